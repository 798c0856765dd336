//! Salt specifications.
//!
//! A [`SaltSpec`] is the ordered list of `(name, length)` pairs to generate.
//! It always starts from [`DEFAULT_SALTS`] and is adjusted by caller supplied
//! [`OverrideSpec`] layers.

use serde::Serialize;
use tracing::debug;

use crate::core::constants::{DEFAULT_LENGTH, DEFAULT_SALTS};
use crate::core::types::{RawLength, SaltLength, SaltName};

/// Caller supplied additions to, or replacements of, the default salts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSpec {
    /// Bare names, each generated with the default length.
    Names(Vec<SaltName>),
    /// Names with explicit lengths, in insertion order. A length of zero
    /// requests the default.
    Lengths(Vec<(SaltName, RawLength)>),
}

impl OverrideSpec {
    /// Whether this override carries no entries at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Names(names) => names.is_empty(),
            Self::Lengths(lengths) => lengths.is_empty(),
        }
    }

    /// Entries as `(name, raw length)` pairs, bare names mapped to zero.
    fn entries(&self) -> Vec<(&str, RawLength)> {
        match self {
            Self::Names(names) => names.iter().map(|n| (n.as_str(), 0)).collect(),
            Self::Lengths(lengths) => lengths.iter().map(|(n, l)| (n.as_str(), *l)).collect(),
        }
    }
}

/// A single salt to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaltEntry {
    pub name: SaltName,
    pub length: SaltLength,
}

/// Ordered, name-unique list of salts to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SaltSpec {
    entries: Vec<SaltEntry>,
}

impl SaltSpec {
    /// The built-in default salts.
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULT_SALTS
                .iter()
                .map(|(name, length)| SaltEntry {
                    name: (*name).to_string(),
                    length: *length,
                })
                .collect(),
        }
    }

    /// Merge `overrides` on top of the defaults.
    ///
    /// Never fails: empty names are dropped and unusable lengths fall back
    /// to [`DEFAULT_LENGTH`].
    pub fn resolve(overrides: Option<&OverrideSpec>) -> Self {
        let mut spec = Self::defaults();
        if let Some(overrides) = overrides {
            spec.apply(overrides);
        }
        debug!(salts = spec.len(), "resolved salt spec");
        spec
    }

    /// Apply one override layer.
    ///
    /// A name already present keeps its position, spelling and the new
    /// length. Names are compared the way they are rendered, so `auth_key`
    /// and `AUTH_KEY` are the same salt. New names are appended in the order
    /// they were supplied.
    pub fn apply(&mut self, overrides: &OverrideSpec) {
        for (name, raw) in overrides.entries() {
            if name.is_empty() {
                debug!("dropping override without a name");
                continue;
            }

            let length = effective_length(raw);
            match self.entries.iter_mut().find(|e| same_name(&e.name, name)) {
                Some(existing) => existing.length = length,
                None => self.entries.push(SaltEntry {
                    name: name.to_string(),
                    length,
                }),
            }
        }
    }

    /// All entries in generation order.
    pub fn entries(&self) -> &[SaltEntry] {
        &self.entries
    }

    /// Length requested for `name`, if present.
    pub fn length_of(&self, name: &str) -> Option<SaltLength> {
        self.entries
            .iter()
            .find(|e| same_name(&e.name, name))
            .map(|e| e.length)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether two names render to the same key in some output format.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_uppercase() == b.to_uppercase() || a.to_lowercase() == b.to_lowercase()
}

/// Map a caller supplied length to the length actually generated.
fn effective_length(raw: RawLength) -> SaltLength {
    match SaltLength::try_from(raw) {
        Ok(0) => DEFAULT_LENGTH,
        Ok(length) => length,
        Err(_) => SaltLength::MAX,
    }
}

/// Parse a loosely typed length.
///
/// Anything that is not a positive integer yields zero, which the resolver
/// turns into [`DEFAULT_LENGTH`].
pub fn parse_length(raw: &str) -> RawLength {
    raw.trim().parse::<RawLength>().unwrap_or(0)
}
