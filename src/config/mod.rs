use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the decision CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let pretty = match env::var("APP_PRETTY_OUTPUT") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidPrettyOutput { value: raw })?,
            Err(_) => false,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            output: OutputConfig { pretty },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Controls how decisions are rendered on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPrettyOutput { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrettyOutput { value } => write!(
                f,
                "APP_PRETTY_OUTPUT must be a boolean flag (true/false/1/0), got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
