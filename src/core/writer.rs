//! Writing rendered salts to disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Add to the end of the file, creating it if missing.
    Append,
    /// Replace the file contents.
    Overwrite,
}

impl WriteMode {
    /// Mode used when the caller does not choose one: append to an existing
    /// file, otherwise create it.
    pub fn for_path(path: &Path) -> Self {
        if path.exists() {
            Self::Append
        } else {
            Self::Overwrite
        }
    }
}

/// Write `content` to `path`.
///
/// Returns the number of bytes written. Newly created files are given
/// `0600` permissions on Unix.
///
/// # Errors
///
/// Returns `Error::Write` carrying the path if the file cannot be opened or
/// written.
pub fn write_to_file(
    path: impl AsRef<Path>,
    content: &str,
    mode: Option<WriteMode>,
) -> Result<usize> {
    let path = path.as_ref();
    let mode = mode.unwrap_or_else(|| WriteMode::for_path(path));
    debug!(path = %path.display(), ?mode, "writing salts");

    let wrap = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Overwrite => options.write(true).truncate(true),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(wrap)?;
    file.write_all(content.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    debug!(bytes = content.len(), "salts written");
    Ok(content.len())
}
