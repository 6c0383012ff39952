use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `level` comes from the config file and is
/// only consulted when `RUST_LOG` is unset.
pub fn init_cli_logger(verbose: bool, level: Option<&str>, json: bool) {
    let default_directive = match (verbose, level) {
        (true, _) => "demo_services=debug,info".to_string(),
        (false, Some(level)) => format!("demo_services={}", level),
        (false, None) => "demo_services=info".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
