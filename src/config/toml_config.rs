use crate::config::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{DiceError, Result};
use crate::utils::validation::{validate_extension, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_OPEN_ATTEMPTS: u32 = 3;
pub const DEFAULT_REPORT_EXTENSION: &str = "rpt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_open_attempts: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_open_attempts: DEFAULT_MAX_OPEN_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub extension: String,
    pub output_dir: Option<String>,
    pub formats: Vec<OutputFormat>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_REPORT_EXTENSION.to_string(),
            output_dir: None,
            formats: vec![OutputFormat::Report],
        }
    }
}

impl TomlConfig {
    /// Loads a config file; every section and key is optional.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| DiceError::OpenFailed {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DiceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DiceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range("input.max_open_attempts", self.input.max_open_attempts, 1, 10)?;
        validate_extension("report.extension", &self.report.extension)?;

        if let Some(dir) = &self.report.output_dir {
            validate_path("report.output_dir", dir)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn report_extension(&self) -> &str {
        &self.report.extension
    }

    fn output_dir(&self) -> Option<&str> {
        self.report.output_dir.as_deref()
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.report.formats
    }

    fn max_open_attempts(&self) -> u32 {
        self.input.max_open_attempts
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
