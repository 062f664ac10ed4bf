use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Allowed CORS origins; empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// How submitted bed records are ordered before assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineOrdering {
    /// Records must already be newest first; anything else is rejected.
    Strict,
    /// Records are sorted newest first by start date.
    Sort,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConfig {
    /// chrono format rendered into the two timestamp labels, split on `;`.
    #[serde(default = "default_date_time_format")]
    pub date_time_format: String,

    #[serde(default = "default_ordering")]
    pub ordering: TimelineOrdering,

    /// Maximum number of bed records accepted per request.
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// Offset east of UTC, in minutes, used for timestamp labels when the
    /// request does not carry one.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            date_time_format: default_date_time_format(),
            ordering: default_ordering(),
            max_records: default_max_records(),
            utc_offset_minutes: 0,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_body_size() -> usize {
    2_097_152
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_date_time_format() -> String {
    shared::datetime::DEFAULT_DATE_TIME_FORMAT.to_string()
}
fn default_ordering() -> TimelineOrdering {
    TimelineOrdering::Strict
}
fn default_max_records() -> usize {
    500
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with BT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("BT").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from embedded defaults plus overrides, without
    /// touching the file system or environment.
    pub fn load_with_overrides(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30
            max_body_size = 2097152

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [timeline]
            date_time_format = "%I:%M %p; %d/%m/%Y"
            ordering = "strict"
            max_records = 500
            utc_offset_minutes = 0
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "BT__SERVER__HOST must not be empty".to_string(),
            ));
        }

        if self.timeline.max_records == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "timeline.max_records must be greater than 0".to_string(),
            ));
        }

        shared::validation::validate_date_time_format(&self.timeline.date_time_format).map_err(
            |e| {
                ConfigValidationError::InvalidValue(format!(
                    "timeline.date_time_format: {}",
                    e.message.unwrap_or_default()
                ))
            },
        )?;

        shared::validation::validate_utc_offset_minutes(self.timeline.utc_offset_minutes)
            .map_err(|e| {
                ConfigValidationError::InvalidValue(format!(
                    "timeline.utc_offset_minutes: {}",
                    e.message.unwrap_or_default()
                ))
            })?;

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigValidationError::InvalidValue(format!(
                    "Invalid socket address {}:{}",
                    self.server.host, self.server.port
                ))
            })
    }
}
