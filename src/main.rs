use anyhow::Context;
use clap::Parser;
use dice_report::config::prompt::{open_rolls, prompt_for_rolls};
use dice_report::core::ConfigProvider;
use dice_report::utils::logger;
use dice_report::{CliConfig, DiceError, DicePipeline, LocalStorage, ReportEngine};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting dice-report");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let Some(err) = e.downcast_ref::<DiceError>() else {
            tracing::error!("❌ dice-report failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ dice-report failed: {:#} (Category: {:?}, Severity: {:?})",
            e,
            err.category(),
            err.severity()
        );

        // The prompt has already told the user it is giving up.
        if !matches!(err, DiceError::OpenAttemptsExhausted { .. }) {
            eprintln!("❌ {}", err.user_friendly_message());
            eprintln!("💡 {}", err.recovery_suggestion());
        }

        std::process::exit(err.exit_code());
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.resolve().context("Failed to load configuration")?;
    let storage = LocalStorage::new(".");

    let source = match &cli.input {
        Some(path) => open_rolls(&storage, path)?,
        None => {
            let stdin = std::io::stdin();
            prompt_for_rolls(
                &storage,
                &mut stdin.lock(),
                &mut std::io::stdout(),
                &mut std::io::stderr(),
                config.max_open_attempts(),
            )?
        }
    };

    let pipeline = DicePipeline::new(storage, config, source);
    let report_path = ReportEngine::new(pipeline)
        .run()
        .context("Failed to produce the game report")?;

    println!("📁 Report saved to: {}", report_path);
    Ok(())
}
