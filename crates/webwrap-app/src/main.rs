mod app_state;
mod cli;
mod controller;
mod layout;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use webwrap_common::WebWrapError;
use webwrap_config::schema::WebWrapConfig;

const DEFAULT_DIRECTIVE: &str = "webwrap=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- WebWrap crashed ---");
        eprintln!("Run with --log-level debug for more detail.");
        eprintln!("-----------------------\n");
        default_hook(info);
    }));
}

/// A bare level such as `debug` applies to our crates only; anything with
/// `=` is passed through as a full directive.
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("webwrap={level}")
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    let directive: Directive = directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

/// Load config before logging is configured. Loader warnings go through a
/// temporary subscriber so they are not lost.
fn load_config(args: &cli::Args) -> WebWrapConfig {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_DIRECTIVE))
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        if let Some(ref path) = args.config {
            tracing::info!("Using config override: {}", path.display());
        }
        let mut config = webwrap_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            WebWrapConfig::default()
        });

        if let Some(ref url) = args.home_url {
            let previous = config.home.url.replace(url.clone());
            if let Err(e) = webwrap_config::validation::validate(&config) {
                tracing::warn!("Ignoring --home-url {url}: {e}");
                config.home.url = previous;
            }
        }
        config
    })
}

fn main() {
    install_panic_hook();

    let args = cli::parse();
    let config = load_config(&args);

    if args.print_config {
        println!("{}", webwrap_config::config_to_json(&config));
        return;
    }

    // Initialize logging
    let directive = args
        .log_level
        .as_deref()
        .map(directive_for)
        .unwrap_or_else(|| directive_for(config.logging.level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("WebWrap v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        home = config.home.url().unwrap_or("<none>"),
        locale = %config.labels.locale,
        "Config loaded"
    );

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(config: WebWrapConfig) -> webwrap_common::Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| WebWrapError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::WebWrapApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| WebWrapError::Other(format!("event loop error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_webwrap() {
        assert_eq!(directive_for("debug"), "webwrap=debug");
    }

    #[test]
    fn full_directive_passes_through() {
        assert_eq!(directive_for("wry=trace"), "wry=trace");
    }

    #[test]
    fn bad_directive_falls_back() {
        // Must not panic on garbage input.
        let _ = env_filter("webwrap=notalevel[");
    }
}
