//! Per-host resolution over an ordered block list.

use super::model::{HostConfig, ResolvedConfig};
use super::parser;
use super::pattern;
use std::io;
use std::path::Path;

/// Owns the parsed host blocks and answers per-host queries.
///
/// Immutable once constructed; queries never mutate state, so a resolver can
/// be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    blocks: Vec<HostConfig>,
}

impl ConfigResolver {
    /// A resolver with no blocks; every query resolves to an empty
    /// configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a resolver from config text.
    ///
    /// Pure text parsing: `Include` directives need a file context and are
    /// ignored here. Parsing never fails; worst case is an empty resolver.
    pub fn from_str(contents: &str) -> Self {
        Self {
            blocks: parser::parse_config_text(contents).blocks,
        }
    }

    /// Build a resolver from a config file, following `Include` directives.
    pub fn from_file(config_path: &Path) -> io::Result<Self> {
        Ok(Self {
            blocks: parser::parse_config_file_tree(config_path)?,
        })
    }

    /// The parsed blocks in file order.
    pub fn blocks(&self) -> &[HostConfig] {
        &self.blocks
    }

    /// Resolve the effective configuration for `host`.
    ///
    /// Blocks are scanned in file order. The first obtained value wins for
    /// scalar parameters; `IdentityFile` values instead accumulate across all
    /// matching blocks, in order and without deduplication. No match yields
    /// an empty configuration, never an error.
    pub fn resolve(&self, host: &str) -> ResolvedConfig {
        let mut resolved = ResolvedConfig::default();

        for block in &self.blocks {
            if !block.is_global() && !pattern::block_matches(&block.patterns, host) {
                continue;
            }

            for (name, value) in &block.parameters {
                resolved.parameters.entry(name.clone()).or_insert_with(|| value.clone());
            }
            resolved.identity_files.extend(block.identity_files.iter().cloned());
        }

        resolved
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/resolver.rs"]
mod tests;
