//! `%`-token substitution applied to resolved values.
//!
//! Substitution is a caller-side convenience performed after resolution, not
//! part of the resolver's contract: `%h` is the queried remote host, `%r` the
//! remote user, `%u` the local user name, `%l` the local host name, `%d` the
//! local home directory, and `%%` a literal percent sign.

use nix::unistd::{self, Uid, User};

/// Inputs for `%`-token substitution.
#[derive(Debug, Clone)]
pub struct TokenContext {
    /// Queried remote host name (`%h`).
    pub remote_host: String,
    /// Remote user name supplied by the caller (`%r`).
    pub remote_user: Option<String>,
    /// Local user name (`%u`).
    pub local_user: Option<String>,
    /// Local host name (`%l`).
    pub local_host: Option<String>,
    /// Local home directory (`%d`).
    pub home_dir: Option<String>,
}

impl TokenContext {
    /// A context carrying only the queried host; other tokens are left
    /// verbatim until filled in.
    pub fn new(remote_host: impl Into<String>) -> Self {
        Self {
            remote_host: remote_host.into(),
            remote_user: None,
            local_user: None,
            local_host: None,
            home_dir: None,
        }
    }

    /// A context with local user, host, and home directory filled from the
    /// running environment.
    pub fn from_environment(remote_host: impl Into<String>) -> Self {
        let local_user = User::from_uid(Uid::current()).ok().flatten().map(|user| user.name);
        let local_host = unistd::gethostname().ok().and_then(|name| name.into_string().ok());
        let home_dir = dirs::home_dir().map(|home| home.to_string_lossy().to_string());

        Self {
            remote_host: remote_host.into(),
            remote_user: None,
            local_user,
            local_host,
            home_dir,
        }
    }

    /// Set the remote user name used for `%r`.
    pub fn with_remote_user(mut self, remote_user: impl Into<String>) -> Self {
        self.remote_user = Some(remote_user.into());
        self
    }

    /// Expand `%`-tokens in `value`.
    ///
    /// Unknown tokens and tokens whose context value is absent are kept
    /// verbatim, so a later pass (or the remote side) can still see them.
    pub fn expand(&self, value: &str) -> String {
        let mut expanded = String::with_capacity(value.len());
        let mut chars = value.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                expanded.push(ch);
                continue;
            }

            match chars.next() {
                Some('%') => expanded.push('%'),
                Some('h') => expanded.push_str(&self.remote_host),
                Some('r') => push_or_keep(&mut expanded, 'r', self.remote_user.as_deref()),
                Some('u') => push_or_keep(&mut expanded, 'u', self.local_user.as_deref()),
                Some('l') => push_or_keep(&mut expanded, 'l', self.local_host.as_deref()),
                Some('d') => push_or_keep(&mut expanded, 'd', self.home_dir.as_deref()),
                Some(other) => {
                    expanded.push('%');
                    expanded.push(other);
                }
                None => expanded.push('%'),
            }
        }

        expanded
    }
}

fn push_or_keep(expanded: &mut String, token: char, value: Option<&str>) {
    match value {
        Some(value) => expanded.push_str(value),
        None => {
            expanded.push('%');
            expanded.push(token);
        }
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/tokens.rs"]
mod tests;
