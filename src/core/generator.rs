//! Salt generation.
//!
//! Draws salt values from [`ALPHABET`] using a cryptographically secure
//! random source. The source is chosen by type: only generators implementing
//! [`CryptoRng`] are accepted, and there is no way to seed one through this
//! API.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{ALPHABET, MAX_LENGTH};
use crate::core::spec::{same_name, SaltSpec};
use crate::core::types::{RawLength, SaltName};
use crate::core::validation::validate_length;
use crate::error::{Error, Result};

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are rejected so every character is equally likely.
const ACCEPT_BELOW: u8 = (256 - 256 % ALPHABET.len()) as u8;

/// Random bytes requested per draw.
const CHUNK: usize = 64;

/// Generated salts, keyed by name, in spec order.
///
/// Values are wiped from memory when the set is dropped.
#[derive(Default)]
pub struct SaltSet {
    entries: Vec<(SaltName, Zeroizing<String>)>,
}

impl SaltSet {
    /// Build a set from explicitly named values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if any entry has an empty name; values
    /// are never given synthesized names.
    pub fn from_named<I, N, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::default();
        for (position, (name, value)) in entries.into_iter().enumerate() {
            let name = name.into();
            if name.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "salt at position {} has no name; salts must be named, e.g. MY_SALT => value",
                    position + 1
                )));
            }
            set.insert(name, Zeroizing::new(value.into()));
        }
        Ok(set)
    }

    fn insert(&mut self, name: SaltName, value: Zeroizing<String>) {
        match self.entries.iter_mut().find(|(n, _)| same_name(n, &name)) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| same_name(n, name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Salt names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of salts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SaltSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, _)| (n, "<redacted>")))
            .finish()
    }
}

/// Generates salt values from a secure random source.
pub struct SaltGenerator<R = OsRng> {
    rng: R,
}

impl SaltGenerator<OsRng> {
    /// Generator backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SaltGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SaltGenerator<R> {
    /// Generator backed by another cryptographically secure source.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one value per entry in `spec`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an entry longer than [`MAX_LENGTH`]
    /// and `Error::Entropy` if the random source fails.
    pub fn generate(&mut self, spec: &SaltSpec) -> Result<SaltSet> {
        let mut set = SaltSet::default();
        for entry in spec.entries() {
            validate_length(&entry.name, entry.length as RawLength)?;
            let value = self.random_string(entry.length)?;
            set.insert(entry.name.clone(), value);
        }
        debug!(salts = set.len(), "generated salts");
        Ok(set)
    }

    /// Draw `length` characters uniformly from [`ALPHABET`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` above [`MAX_LENGTH`] and
    /// `Error::Entropy` if the random source fails.
    pub fn random_string(&mut self, length: usize) -> Result<Zeroizing<String>> {
        if length > MAX_LENGTH {
            return Err(Error::InvalidInput(format!(
                "salt length {} exceeds the maximum of {}",
                length, MAX_LENGTH
            )));
        }
        let mut value = Zeroizing::new(String::with_capacity(length));
        let mut buf = Zeroizing::new([0u8; CHUNK]);

        while value.len() < length {
            self.rng.try_fill_bytes(&mut buf[..]).map_err(Error::Entropy)?;
            for &byte in buf.iter() {
                if value.len() == length {
                    break;
                }
                if byte < ACCEPT_BELOW {
                    value.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
                }
            }
        }

        Ok(value)
    }
}
