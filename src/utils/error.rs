use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not open {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Gave up after {attempts} failed attempts to open roll data (last tried: {last})")]
    OpenAttemptsExhausted { attempts: u32, last: String },

    #[error("Standard input closed before a filename was entered")]
    PromptClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiceError::OpenFailed { .. }
            | DiceError::OpenAttemptsExhausted { .. }
            | DiceError::PromptClosed => ErrorCategory::Input,
            DiceError::IoError(_)
            | DiceError::SerializationError(_)
            | DiceError::CsvError(_) => ErrorCategory::Output,
            DiceError::ConfigValidationError { .. } | DiceError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DiceError::OpenFailed { .. } => ErrorSeverity::Medium,
            DiceError::OpenAttemptsExhausted { .. }
            | DiceError::PromptClosed
            | DiceError::ConfigValidationError { .. }
            | DiceError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DiceError::IoError(_)
            | DiceError::SerializationError(_)
            | DiceError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a failure of this severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiceError::OpenFailed { path, .. } => format!("Could not open {}.", path),
            DiceError::OpenAttemptsExhausted { .. } => "Program is exiting.".to_string(),
            DiceError::PromptClosed => "No roll data filename was entered.".to_string(),
            DiceError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DiceError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            DiceError::IoError(e) => format!("Could not write the report: {}", e),
            DiceError::SerializationError(e) => format!("Could not build the JSON summary: {}", e),
            DiceError::CsvError(e) => format!("Could not build the CSV scores: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the roll data filename and that the file is readable",
            ErrorCategory::Output => "Check that the report directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiceError>;
