use clap::Parser;
use small_greet::utils::error::ErrorSeverity;
use small_greet::utils::{logger, validation::Validate};
use small_greet::{adapters, CliConfig, GreetEngine, Greeter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-greet CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // Composition root: pick the concrete sink and inject it.
    let sink = adapters::build_sink(&config);
    let greeter = Greeter::new(sink);
    let engine = GreetEngine::new_with_repeat(greeter, config.repeat);

    match engine.run() {
        Ok(count) => {
            tracing::info!("Emitted {} greeting(s)", count);
        }
        Err(e) => {
            tracing::error!(
                "Greeting run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
