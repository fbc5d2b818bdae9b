use std::path::PathBuf;

use clap::Parser;

/// WebWrap: a minimal browser window with Back, Home and Forward.
#[derive(Parser, Debug)]
#[command(name = "webwrap", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Home page to load instead of the configured one.
    #[arg(long)]
    pub home_url: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "webwrap",
            "--config",
            "/tmp/webwrap.toml",
            "--home-url",
            "https://example.com",
            "--log-level",
            "debug",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/webwrap.toml")));
        assert_eq!(args.home_url.as_deref(), Some("https://example.com"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::try_parse_from(["webwrap"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.home_url.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
    }
}
