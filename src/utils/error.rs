use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Unknown service id: {id}")]
    UnknownService { id: String },

    #[error("Unknown complexity tier id: {id}")]
    UnknownTier { id: String },

    #[error("Unknown add-on id: {id}")]
    UnknownAddOn { id: String },

    #[error("Timeline must be between 1 and 12 months, got {months}")]
    InvalidTimeline { months: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuoteError {
    /// Short hint the CLI prints next to the error message. Every core
    /// error is a caller-correctable input problem, so each one has a fix.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::UnknownService { .. } => {
                "Run with --list to see the available service ids"
            }
            QuoteError::UnknownTier { .. } => {
                "Run with --list to see the available complexity tier ids"
            }
            QuoteError::UnknownAddOn { .. } => {
                "Run with --list to see the available add-on ids"
            }
            QuoteError::InvalidTimeline { .. } => "Choose a timeline between 1 and 12 months",
            QuoteError::IoError(_) => "Check that the path exists and is writable",
            QuoteError::SerializationError(_) => "Report this as a bug; quote data should always serialize",
            QuoteError::ConfigValidationError { .. } | QuoteError::InvalidConfigValueError { .. } => {
                "Fix the catalog file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
