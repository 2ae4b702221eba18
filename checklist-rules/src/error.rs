use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the rules crate when loading rule sets or accepting records.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rules path does not exist: {0}")]
    MissingPath(String),
    #[error("failed to read rules from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules from {path}: {message}")]
    Parse { path: String, message: String },
    #[error("duplicate rule name detected: {name}")]
    DuplicateRule { name: String },
    #[error("no rules defined in {path}")]
    EmptyRuleSet { path: String },
    #[error("applicant record must be a JSON object, found {found}")]
    MalformedRecord { found: &'static str },
}

impl RuleError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RuleError::Io {
            path: path.into().display().to_string(),
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RuleError::Parse {
            path: path.into().display().to_string(),
            message: message.into(),
        }
    }
}
