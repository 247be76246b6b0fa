use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATASET_PATH: &str = "protein_vs_fat.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(String),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub model: String,
    pub api_url: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn from_env(provider: &str) -> Result<Self, ConfigError> {
        let prefix = provider.to_uppercase();

        let model = env::var(format!("{}_MODEL", prefix))
            .unwrap_or_else(|_| match provider {
                "deepseek" => "deepseek-chat".to_string(),
                _ => String::new(),
            });

        let api_url = env::var(format!("{}_API_URL", prefix))
            .unwrap_or_else(|_| match provider {
                "deepseek" => "https://api.deepseek.com/chat/completions".to_string(),
                _ => String::new(),
            });

        let temperature = parse_var(&format!("{}_TEMPERATURE", prefix))?.unwrap_or(0.8);
        let timeout_secs =
            parse_var(&format!("{}_TIMEOUT_SECS", prefix))?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            model,
            api_url,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            api_url: "https://api.deepseek.com/chat/completions".to_string(),
            temperature: 0.8,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub region_hint: Option<String>,
    pub api_key: Option<ApiKey>,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let dataset_path = env::var("NUTRITION_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));

        let region_hint = env::var("NUTRITION_REGION")
            .ok()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let api_key = env::var("DEEPSEEK_API_KEY").ok().and_then(ApiKey::new);

        Ok(Self {
            dataset_path,
            region_hint,
            api_key,
            provider: ProviderConfig::from_env("deepseek")?,
        })
    }

    pub fn require_api_key(&self) -> Result<&ApiKey, ConfigError> {
        self.api_key
            .as_ref()
            .ok_or_else(|| ConfigError::MissingVar("DEEPSEEK_API_KEY".to_string()))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
