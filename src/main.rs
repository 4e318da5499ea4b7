use sshconf::ssh_config::{ConfigResolver, ResolvedConfig, TokenContext, expand_tilde, load_default_resolver};
use sshconf::{Result, args, log, log_debug};

use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = args::main_args();

    // Initialize logging
    let logger = log::Logger::new();
    if args.debug {
        logger.enable_debug();
        if let Err(err) = logger.log_debug("Debug mode enabled") {
            eprintln!("Failed to initialize debug logging: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    let resolver = match &args.config_file {
        Some(config_file) => ConfigResolver::from_file(Path::new(config_file))?,
        None => load_default_resolver()?,
    };
    log_debug!("Loaded {} host block(s)", resolver.blocks().len());

    let resolved = resolver.resolve(&args.host);
    let expanded = expand_resolved(&resolved, &args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&expanded).map_err(io::Error::other)?);
    } else {
        print_plain(&expanded, &args.host);
    }

    Ok(ExitCode::SUCCESS)
}

/// Apply caller-side `%`-token and tilde substitution to the path-bearing
/// resolved values.
fn expand_resolved(resolved: &ResolvedConfig, args: &args::MainArgs) -> ResolvedConfig {
    let mut ctx = TokenContext::from_environment(&args.host);
    if let Some(login_name) = args.login_name.as_deref().or(resolved.user()) {
        ctx = ctx.with_remote_user(login_name);
    }

    let mut expanded = resolved.clone();
    if let Some(hostname) = resolved.hostname() {
        expanded.parameters.insert("hostname".to_string(), ctx.expand(hostname));
    }
    expanded.identity_files = resolved.identity_files.iter().map(|identity_file| expand_tilde(&ctx.expand(identity_file))).collect();

    expanded
}

/// Print `name value` lines the way `ssh -G` does, with the well-known
/// parameters first and the rest in sorted order.
fn print_plain(resolved: &ResolvedConfig, queried_host: &str) {
    println!("hostname {}", resolved.hostname().unwrap_or(queried_host));
    println!("port {}", resolved.port().unwrap_or(22));
    if let Some(user) = resolved.user() {
        println!("user {}", user);
    }
    for identity_file in &resolved.identity_files {
        println!("identityfile {}", identity_file);
    }

    let mut remaining: Vec<(&str, &str)> = resolved
        .parameters
        .iter()
        .filter(|(name, _)| !matches!(name.as_str(), "hostname" | "port" | "user"))
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    remaining.sort();
    for (name, value) in remaining {
        println!("{} {}", name, value);
    }
}
