use crate::{
    error::{ArtError, Result},
    logger::LoggerConfig,
};
use std::env;
use std::time::Duration;

pub const DEFAULT_GENERATION_URL: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/imageGenerationAsync";
pub const DEFAULT_OPERATIONS_URL: &str = "https://llm.api.cloud.yandex.net:443/operations";

const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
const PLACEHOLDER_FOLDER_ID: &str = "b1g...";

#[derive(Debug, Clone)]
pub struct ArtConfig {
    pub api_key: String,
    pub folder_id: String,
    pub generation_url: String,
    pub operations_url: String,
    pub model_name: String,
    pub model_version: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub art: ArtConfig,
    pub log: LoggerConfig,
}

impl ArtConfig {
    pub fn new(api_key: impl Into<String>, folder_id: impl Into<String>) -> Self {
        ArtConfig {
            api_key: api_key.into(),
            folder_id: folder_id.into(),
            generation_url: DEFAULT_GENERATION_URL.to_string(),
            operations_url: DEFAULT_OPERATIONS_URL.to_string(),
            model_name: "yandex-art".to_string(),
            model_version: "latest".to_string(),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(2),
            max_poll_attempts: 60,
        }
    }

    /// Reads the provider settings from the process environment.
    ///
    /// `YANDEX_API_KEY` and `FOLDER_ID` are required and must not hold the
    /// placeholder values shipped in sample `.env` files.
    pub fn from_env() -> Result<Self> {
        let api_key = required_var("YANDEX_API_KEY", PLACEHOLDER_API_KEY)?;
        let folder_id = required_var("FOLDER_ID", PLACEHOLDER_FOLDER_ID)?;

        let mut config = ArtConfig::new(api_key, folder_id);

        if let Ok(url) = env::var("ART_GENERATION_URL") {
            config.generation_url = url;
        }
        if let Ok(url) = env::var("ART_OPERATIONS_URL") {
            config.operations_url = url;
        }
        if let Some(secs) = parsed_var::<u64>("ART_POLL_INTERVAL_SECS")? {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(attempts) = parsed_var::<u32>("ART_MAX_POLL_ATTEMPTS")? {
            config.max_poll_attempts = attempts;
        }
        if let Some(secs) = parsed_var::<u64>("ART_REQUEST_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if is_placeholder(&self.api_key, PLACEHOLDER_API_KEY) {
            return Err(ArtError::Validation(
                "YANDEX_API_KEY is missing or still the placeholder value".into(),
            ));
        }
        if is_placeholder(&self.folder_id, PLACEHOLDER_FOLDER_ID) {
            return Err(ArtError::Validation(
                "FOLDER_ID is missing or still the placeholder value".into(),
            ));
        }
        if self.max_poll_attempts == 0 {
            return Err(ArtError::Validation(
                "ART_MAX_POLL_ATTEMPTS must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn model_uri(&self) -> String {
        format!(
            "art://{}/{}/{}",
            self.folder_id, self.model_name, self.model_version
        )
    }

    pub fn with_endpoints(
        mut self,
        generation_url: impl Into<String>,
        operations_url: impl Into<String>,
    ) -> Self {
        self.generation_url = generation_url.into();
        self.operations_url = operations_url.into();
        self
    }

    pub fn with_model(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.model_name = name.into();
        self.model_version = version.into();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Config {
    pub fn new(art: ArtConfig) -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            art,
            log: LoggerConfig::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let art = ArtConfig::from_env()?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parsed_var::<u16>("PORT")?.unwrap_or(5000);
        let log = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => LoggerConfig::production(),
            _ => LoggerConfig::development(),
        };

        Ok(Config {
            host,
            port,
            art,
            log,
        })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_logger(mut self, log: LoggerConfig) -> Self {
        self.log = log;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_placeholder(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == placeholder
}

fn required_var(name: &str, placeholder: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !is_placeholder(&value, placeholder) => Ok(value.trim().to_string()),
        _ => Err(ArtError::Validation(format!(
            "{} is missing or still the placeholder value",
            name
        ))),
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ArtError::Validation(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(None),
    }
}
