use clap::Parser;
use marketing_sim::config::API_KEY_ENV;
use marketing_sim::core::report;
use marketing_sim::utils::error::{ErrorSeverity, SimError};
use marketing_sim::utils::{logger, validation::Validate};
use marketing_sim::{ApiSettings, CliConfig, OpenRouterClient, Simulator, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting marketing-sim");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", redacted(&config));
    }

    if let Err(e) = run(config).await {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(config: CliConfig) -> Result<(), SimError> {
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    // 驗證輸入
    let input = config.goal_input();
    input.validate()?;

    let json_output = config.json || file_config.as_ref().is_some_and(|f| f.json_output());
    let export_path = config
        .export
        .clone()
        .or_else(|| file_config.as_ref().and_then(|f| f.export_path().map(str::to_string)));

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the API will not be called");
        let prompt = marketing_sim::core::prompt::PromptBuilder::new(&input.product)
            .build(input.scenario, input.target);
        println!("{}", prompt);
        return Ok(());
    }

    let settings = ApiSettings::resolve(
        &config.overrides(),
        file_config.as_ref(),
        std::env::var(API_KEY_ENV).ok(),
    )?;
    let timeout = settings.timeout;
    let client = OpenRouterClient::new(settings)?;
    let simulator = Simulator::new(client).with_timeout(timeout);

    let outcome = tokio::select! {
        outcome = simulator.run(&input) => outcome,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, request abandoned");
            return Ok(());
        }
    };

    if json_output {
        println!("{}", report::to_json(&outcome)?);
    } else {
        print!("{}", report::render_text(&outcome));
    }

    if let (Some(path), Ok(recommendation)) = (export_path, &outcome.result) {
        match report::to_csv(recommendation)? {
            Some(csv) => {
                std::fs::write(&path, csv)?;
                tracing::info!("📁 Data exported to: {}", path);
            }
            None => tracing::info!("Nothing to export, no numeric data was found"),
        }
    }

    Ok(())
}

fn redacted(config: &CliConfig) -> CliConfig {
    let mut config = config.clone();
    if config.api_key.is_some() {
        config.api_key = Some("***".to_string());
    }
    config
}
