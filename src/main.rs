use anyhow::Context;
use clap::Parser;
use clinic_fixtures::utils::{logger, validation::Validate};
use clinic_fixtures::{CliConfig, FixtureError, FixtureSet, OutputFormat};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        // 參數錯誤屬於配置錯誤，退出碼為 1；--help / --version 照 clap 處理
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = logger::init_cli_logger(config.verbose) {
        eprintln!("⚠️ Logger initialisation failed: {}", e);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        let exit_code = e
            .downcast_ref::<FixtureError>()
            .map(FixtureError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let fixtures = match &config.fixtures {
        Some(path) => FixtureSet::from_file(path)
            .with_context(|| format!("failed to load fixtures from {}", path.display()))?,
        None => {
            tracing::info!("No fixture file given, using the sample set");
            FixtureSet::sample()
        }
    };

    tracing::info!(
        web_controls = fixtures.web_controls.len(),
        office_hours = fixtures.office_hours.len(),
        "Loaded fixtures"
    );

    let rendered = match config.format {
        OutputFormat::Json => fixtures.to_json_pretty()?,
        OutputFormat::Toml => fixtures.to_toml_string()?,
    };
    println!("{}", rendered);
    Ok(())
}
