//! Glob-style host pattern matching.

/// Whether a block's pattern list matches the queried host.
///
/// The block matches when any positive pattern matches and no negated
/// (`!`-prefixed) pattern matches. A negated match excludes the block even
/// when a positive pattern also matches.
pub(super) fn block_matches(patterns: &[String], host: &str) -> bool {
    let mut matched = false;

    for pattern in patterns {
        if let Some(negated) = pattern.strip_prefix('!') {
            if matches_pattern(host, negated) {
                return false;
            }
        } else if matches_pattern(host, pattern) {
            matched = true;
        }
    }

    matched
}

/// Anchored, case-insensitive glob match. `*` matches any run of characters
/// (including none), `?` matches exactly one.
pub(super) fn matches_pattern(text: &str, pattern: &str) -> bool {
    let text_chars: Vec<char> = text.to_lowercase().chars().collect();
    let pattern_chars: Vec<char> = pattern.to_lowercase().chars().collect();

    glob_match(&text_chars, &pattern_chars)
}

fn glob_match(text: &[char], pattern: &[char]) -> bool {
    let Some((&head, rest)) = pattern.split_first() else {
        return text.is_empty();
    };

    match head {
        '*' => (0..=text.len()).any(|skip| glob_match(&text[skip..], rest)),
        '?' => !text.is_empty() && glob_match(&text[1..], rest),
        literal => text.first() == Some(&literal) && glob_match(&text[1..], rest),
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/pattern.rs"]
mod tests;
