use thiserror::Error;

#[derive(Error, Debug)]
pub enum KcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl KcError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KcError::IoError(_) => "Check that standard output is writable and the config file is readable",
            KcError::ConfigValidationError { .. } => "Make sure the config file is valid TOML",
            KcError::InvalidConfigValueError { .. } => "Fix the highlighted value in the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, KcError>;
