pub mod toml_config;

use crate::domain::model::{Operation, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use toml_config::{TomlConfig, MAX_PRECISION};

#[derive(Debug, Clone, Parser)]
#[command(name = "demo-services")]
#[command(about = "Calculator and string utilities")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for floating-point results in text output
    #[arg(long)]
    pub precision: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(precision) = self.precision {
            validation::validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}

/// Effective settings: command-line flags win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: Option<usize>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let file_format = file.map(|f| f.output_format());
        let file_precision = file.and_then(|f| f.precision());

        Self {
            format: cli.format.or(file_format).unwrap_or_default(),
            precision: cli.precision.or(file_precision),
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
            json_logs: file.is_some_and(|f| f.json_logs()),
        }
    }

    /// Reads the config file named by `--config`, if any, and merges it.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        let file = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        Ok(Self::resolve(cli, file.as_ref()))
    }
}

impl ConfigProvider for Settings {
    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn precision(&self) -> Option<usize> {
        self.precision
    }
}
