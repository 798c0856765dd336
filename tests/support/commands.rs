//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a saltshaker command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME inside the temporary home directory
    /// - Current directory set to the test project directory
    /// - Logging and colors switched off
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("saltshaker").expect("failed to find saltshaker binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SALTSHAKER_LOG");
        cmd.env_remove("SALTSHAKER_CONFIG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run saltshaker with arbitrary arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run saltshaker")
    }

    /// Shortcut for `saltshaker generate`.
    pub fn generate(&self, args: &[&str]) -> Output {
        let mut full = vec!["generate"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Shortcut for `saltshaker write <file>`.
    pub fn write(&self, file: &str, args: &[&str]) -> Output {
        let mut full = vec!["write", file];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Shortcut for `saltshaker spec --json`.
    pub fn spec_json(&self, args: &[&str]) -> Output {
        let mut full = vec!["spec", "--json"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}
