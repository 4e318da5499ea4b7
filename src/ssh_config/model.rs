//! SSH config domain models.

use serde::Serialize;
use std::collections::HashMap;

/// One parsed `Host` block (or the implicit global block before the first
/// `Host` line).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Pattern tokens exactly as they appeared after the `Host` keyword.
    ///
    /// May contain `*`/`?` globs and `!`-negated patterns. Empty only for the
    /// implicit global block, which matches every host.
    pub patterns: Vec<String>,
    /// Lower-cased parameter name to raw value. Within a block the last
    /// occurrence of a scalar parameter wins.
    pub parameters: HashMap<String, String>,
    /// `IdentityFile` values in file order. Repeatable, so kept out of
    /// [`HostConfig::parameters`].
    pub identity_files: Vec<String>,
}

impl HostConfig {
    /// Create a block for the given `Host` line pattern tokens.
    pub(super) fn with_patterns(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }

    /// Whether this is the implicit global block.
    pub fn is_global(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the block carries no parameters at all.
    pub(super) fn has_parameters(&self) -> bool {
        !self.parameters.is_empty() || !self.identity_files.is_empty()
    }
}

/// The effective configuration for one queried host.
///
/// Contains exactly the parameters set by matching blocks; no defaults are
/// applied (callers fall back to their own, e.g. port 22).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Lower-cased parameter name to the first value obtained in file order.
    pub parameters: HashMap<String, String>,
    /// Identity file candidates accumulated across all matching blocks, in
    /// file order, without deduplication.
    pub identity_files: Vec<String>,
}

impl ResolvedConfig {
    /// Case-insensitive parameter lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters.get(&name.to_lowercase()).map(String::as_str)
    }

    /// The `Hostname` value, if any block set one.
    pub fn hostname(&self) -> Option<&str> {
        self.get("hostname")
    }

    /// The `User` value, if any block set one.
    pub fn user(&self) -> Option<&str> {
        self.get("user")
    }

    /// The `Port` value parsed as a port number. Non-numeric values resolve
    /// to `None`, matching the "opaque string parameters" contract.
    pub fn port(&self) -> Option<u16> {
        self.get("port").and_then(|value| value.parse::<u16>().ok())
    }

    /// Whether no matching block contributed anything.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.identity_files.is_empty()
    }
}
