use thiserror::Error;

/// Result type used across the checklist core crate.
pub type Result<T> = std::result::Result<T, ChecklistError>;

/// Canonical error representation shared by the checklist crates.
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("general error: {0}")]
    GeneralError(String),
}

/// Dedicated configuration error used by the configuration helpers.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {key}: {source}")]
    InvalidEnvVar {
        key: &'static str,
        #[source]
        source: std::env::VarError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}
