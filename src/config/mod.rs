pub mod prompt;
pub mod storage;
pub mod toml_config;

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Files written for each game. The text report is always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[serde(rename = "rpt")]
    #[cfg_attr(feature = "cli", value(name = "rpt"))]
    Report,
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "csv")]
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dice-report")]
#[command(about = "Scores a four-player team dice game and writes a report")]
pub struct CliConfig {
    /// Roll data file; prompts for a filename when omitted
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory for report files (defaults to next to the input)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Extension of the text report
    #[arg(long)]
    pub extension: Option<String>,

    /// Extra output formats, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub format: Vec<OutputFormat>,

    /// Filename prompts allowed before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.report.output_dir = Some(dir.clone());
        }
        if let Some(extension) = &self.extension {
            config.report.extension = extension.clone();
        }
        if !self.format.is_empty() {
            config.report.formats = self.format.clone();
        }
        if let Some(attempts) = self.max_attempts {
            config.input.max_open_attempts = attempts;
        }

        config.validate()?;
        Ok(config)
    }
}
