//! Line-oriented SSH config parsing and include-tree walking.

use super::include::{expand_include_pattern, resolve_include_pattern};
use super::model::HostConfig;
use crate::log_debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub(super) struct ParsedConfigFile {
    pub(super) blocks: Vec<HostConfig>,
    pub(super) include_patterns: Vec<String>,
}

/// Parse config text into host blocks in file order.
///
/// Blank lines, `#` comments, and malformed lines are skipped; parsing never
/// fails. `Include` patterns are collected for callers that have a file
/// context and ignored otherwise.
pub(super) fn parse_config_text(contents: &str) -> ParsedConfigFile {
    let mut parsed = ParsedConfigFile::default();
    // Parameters before the first Host line belong to the implicit global
    // block, which matches every host.
    let mut current = HostConfig::default();

    for line in contents.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((keyword, value)) = split_directive(trimmed) else {
            continue;
        };

        match keyword.as_str() {
            "host" => {
                if !current.is_global() || current.has_parameters() {
                    parsed.blocks.push(current);
                }
                current = HostConfig::with_patterns(value.split_whitespace().map(str::to_string).collect());
            }
            "identityfile" => {
                current.identity_files.push(value.to_string());
            }
            "include" => {
                for token in value.split_whitespace() {
                    parsed.include_patterns.push(token.to_string());
                }
            }
            _ => {
                current.parameters.insert(keyword, value.to_string());
            }
        }
    }

    if !current.is_global() || current.has_parameters() {
        parsed.blocks.push(current);
    }

    parsed
}

/// Split a directive line into its lower-cased keyword and trimmed value.
///
/// OpenSSH accepts both `Keyword value` and `Keyword=value`; a keyword with
/// no value is malformed and yields `None`.
fn split_directive(line: &str) -> Option<(String, String)> {
    let split_at = line.find(|ch: char| ch.is_whitespace() || ch == '=')?;
    let (keyword, rest) = line.split_at(split_at);

    let mut value = rest.trim_start();
    if let Some(stripped) = value.strip_prefix('=') {
        value = stripped.trim_start();
    }
    let value = value.trim_end();

    if keyword.is_empty() || value.is_empty() {
        return None;
    }

    Some((keyword.to_lowercase(), value.to_string()))
}

/// Parse a config file and everything it `Include`s, depth first.
///
/// Included blocks are appended after the including file's own blocks.
/// Already-visited files are skipped so include cycles terminate.
pub(super) fn parse_config_file_tree(config_path: &Path) -> io::Result<Vec<HostConfig>> {
    let mut blocks = Vec::new();
    let mut visited = HashSet::new();
    walk_config_file(config_path, &mut blocks, &mut visited)?;
    Ok(blocks)
}

fn walk_config_file(config_path: &Path, blocks: &mut Vec<HostConfig>, visited: &mut HashSet<PathBuf>) -> io::Result<()> {
    let canonical = config_path.canonicalize().unwrap_or_else(|_| config_path.to_path_buf());

    if !visited.insert(canonical.clone()) {
        log_debug!("Skipping already visited SSH include file (possible include cycle): {}", canonical.display());
        return Ok(());
    }

    let parsed = parse_config_text(&fs::read_to_string(&canonical)?);
    blocks.extend(parsed.blocks);

    let parent_dir = canonical.parent().unwrap_or(Path::new("."));
    for include_pattern in parsed.include_patterns {
        let resolved_pattern = resolve_include_pattern(&include_pattern, parent_dir);
        for include_path in expand_include_pattern(&resolved_pattern) {
            walk_config_file(&include_path, blocks, visited)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
