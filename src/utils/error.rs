use thiserror::Error;

/// Startup-time failures only. A query that matches nothing is not an error;
/// it surfaces as an absent result and never reaches this enum.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Reference data error: {message}")]
    ReferenceDataError { message: String },
}

pub type Result<T> = std::result::Result<T, LookupError>;
