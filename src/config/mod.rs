pub mod fixture_file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-fixtures")]
#[command(about = "Load and print clinic UI test fixtures")]
pub struct CliConfig {
    #[arg(long, env = "CLINIC_FIXTURES", help = "TOML fixture file; prints the sample set when omitted")]
    pub fixtures: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fixtures {
            validate_path("fixtures", path)?;
            validate_file_extension("fixtures", path, &["toml"])?;
        }
        Ok(())
    }
}
