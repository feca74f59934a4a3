use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmalgamError {
    #[error("Fragment '{name}' not found at {}", .path.display())]
    ResourceNotFound { name: String, path: PathBuf },

    #[error("Fragment '{name}' is not valid UTF-8")]
    InvalidEncoding { name: String },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AmalgamError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. } | Self::InvalidEncoding { .. } => ErrorCategory::Input,
            Self::WriteFailure { .. } => ErrorCategory::Output,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ProcessingError { .. } => ErrorCategory::Processing,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ResourceNotFound { name, .. } => format!(
                "Run the tool from the directory containing '{}', or pass --directory",
                name
            ),
            Self::InvalidEncoding { name } => {
                format!("Re-save '{}' as UTF-8 text", name)
            }
            Self::WriteFailure { path, .. } => format!(
                "Check that {} is writable and the disk is not full",
                path.display()
            ),
            Self::IoError(_) => "Check file permissions and retry".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{}' entry of the amalgamation manifest", field)
            }
            Self::ProcessingError { .. } => {
                "Re-run with --verbose to see which fragment failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ResourceNotFound { name, .. } => {
                format!("Input fragment '{}' does not exist", name)
            }
            Self::InvalidEncoding { name } => {
                format!("Input fragment '{}' could not be decoded", name)
            }
            Self::WriteFailure { path, .. } => {
                format!("Could not write the amalgamated file {}", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AmalgamError>;
