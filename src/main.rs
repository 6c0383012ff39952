use clap::Parser;
use demo_services::utils::logger;
use demo_services::{CliConfig, OperationEngine, ServiceError, Settings};

fn main() {
    let cli = CliConfig::parse();

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref(), settings.json_logs);

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = OperationEngine::new(settings);

    match engine.run(&cli.operation) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            tracing::error!(
                "{} failed: {} (Category: {:?}, Severity: {:?})",
                cli.operation.name(),
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &ServiceError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
