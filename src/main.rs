use clap::Parser;
use small_drills::utils::error::DrillError;
use small_drills::utils::logger;
use small_drills::{CliConfig, ConsoleSource, ExerciseReport, ExerciseRunner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-drills CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(report) => {
            let rendered = report.render(config.format)?;
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Drill failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<ExerciseReport, DrillError> {
    let file_config = config.load_file_config()?;
    let exercise = config.resolve(&file_config)?;

    let mut runner = ExerciseRunner::new(ConsoleSource::stdio());
    let report = runner.run(&exercise)?;
    Ok(report)
}
