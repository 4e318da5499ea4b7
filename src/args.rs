use clap::{Arg, Command};

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub debug: bool,
    pub json: bool,
    pub config_file: Option<String>,
    pub login_name: Option<String>,
    pub host: String,
}

/// Parses command-line arguments using clap.
pub fn main_args() -> MainArgs {
    args_from(std::env::args())
}

fn args_from<I>(args: I) -> MainArgs
where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command().get_matches_from(args);

    MainArgs {
        debug: matches.get_flag("debug"),
        json: matches.get_flag("json"),
        config_file: matches.get_one::<String>("config").cloned(),
        login_name: matches.get_one::<String>("login").cloned(),
        host: matches.get_one::<String>("host").cloned().unwrap_or_default(),
    }
}

fn build_command() -> Command {
    Command::new("sshconf")
        .version("v0.3.0")
        .about("Resolve the effective OpenSSH client configuration for a host.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug mode")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('F')
                .long("config")
                .help("Read this config file instead of ~/.ssh/config")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("login")
                .short('l')
                .long("login")
                .help("Remote user name used for %r substitution")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the resolved configuration as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(Arg::new("host").help("Host name to resolve").required(true))
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
