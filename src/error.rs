//! Error types for quillcheck.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillcheckError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Dictionary errors
    #[error("Failed to fetch dictionary data: {message}")]
    DictionaryFetch { message: String },

    #[error("Failed to parse dictionary data: {message}")]
    DictionaryParse { message: String },

    // Rule engine errors
    #[error("Rule '{id}' failed to compile: {message}")]
    RuleCompile { id: String, message: String },

    // AI tier errors
    #[error("AI transport failed: {message}")]
    AiTransport { message: String },

    #[error("AI response malformed: {message}")]
    AiResponseMalformed { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, QuillcheckError>;
