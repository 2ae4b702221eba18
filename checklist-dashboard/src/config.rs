use std::env::{self, VarError};
use std::path::PathBuf;
use std::time::Duration;

use checklist_core::config::{optional_var, parse_var, sanitize_http_url};
use checklist_core::ConfigError;
use checklist_rules::{RuleEngine, RuleError};
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Dashboard configuration, loaded once at startup and passed explicitly to
/// the server.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Endpoint returning the applicant record.
    pub data_source_url: Url,
    pub bind_host: String,
    pub port: u16,
    /// Upper bound on one applicant fetch.
    pub fetch_timeout: Duration,
    /// Optional rule file or directory replacing the built-in checklist.
    pub rules_path: Option<PathBuf>,
}

impl DashboardConfig {
    /// Configuration with defaults for everything but the data source.
    pub fn new(data_source_url: Url) -> Self {
        Self {
            data_source_url,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            rules_path: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let data_source_url = read_data_source_url(&lookup)?;
        let bind_host = optional_var("CHECKLIST_BIND_HOST", lookup("CHECKLIST_BIND_HOST"))?
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());
        let port = parse_var::<u16>("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let fetch_timeout_ms = parse_var::<u64>(
            "CHECKLIST_FETCH_TIMEOUT_MS",
            lookup("CHECKLIST_FETCH_TIMEOUT_MS"),
            DEFAULT_FETCH_TIMEOUT_MS,
        )?;
        let rules_path = optional_var("CHECKLIST_RULES_PATH", lookup("CHECKLIST_RULES_PATH"))?
            .map(PathBuf::from);

        Ok(Self {
            data_source_url,
            bind_host,
            port,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms.max(100)),
            rules_path,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Builds the rule engine, from `rules_path` when set.
    pub fn load_engine(&self) -> Result<RuleEngine, RuleError> {
        match &self.rules_path {
            Some(path) => {
                let engine = RuleEngine::from_path(path)?;
                info!(path = %path.display(), rules = engine.len(), "loaded checklist rules");
                Ok(engine)
            }
            None => Ok(RuleEngine::with_defaults()),
        }
    }
}

fn read_data_source_url<F>(lookup: &F) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    if let Some(value) = optional_var("DATA_SOURCE_URL", lookup("DATA_SOURCE_URL"))? {
        return sanitize_http_url("DATA_SOURCE_URL", &value);
    }

    // Older deployments put the applicant URL in API_KEY. It is not a credential.
    if let Some(value) = optional_var("API_KEY", lookup("API_KEY"))? {
        warn!("API_KEY is deprecated as the data source URL, set DATA_SOURCE_URL instead");
        return sanitize_http_url("API_KEY", &value);
    }

    Err(ConfigError::MissingEnvVar("DATA_SOURCE_URL".to_string()))
}
