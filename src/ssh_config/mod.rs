//! OpenSSH client config parsing and per-host resolution.

mod include;
mod model;
mod parser;
mod path;
mod pattern;
mod resolver;
mod tokens;

pub use model::{HostConfig, ResolvedConfig};
pub use path::{expand_tilde, get_default_ssh_config_path};
pub use resolver::ConfigResolver;
pub use tokens::TokenContext;

use std::io;

/// Load a resolver from `~/.ssh/config`, following `Include` directives.
///
/// A missing config file is not an error; it yields an empty resolver whose
/// every query resolves to an empty configuration.
pub fn load_default_resolver() -> io::Result<ConfigResolver> {
    let config_path = get_default_ssh_config_path().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not find home directory"))?;

    if !config_path.exists() {
        return Ok(ConfigResolver::empty());
    }

    ConfigResolver::from_file(&config_path)
}
