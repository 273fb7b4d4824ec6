//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use homestay_core::{PastStartRule, SchedulePolicy};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub scheduling: SchedulingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Acceptance schedule rules
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    #[serde(default = "default_primary_occupant_nationality")]
    pub primary_occupant_nationality: String,
    #[serde(default)]
    pub past_start_rule: PastStartRule,
    /// Longest period an occupancy range report may cover, in days
    #[serde(default = "default_max_occupancy_range_days")]
    pub max_occupancy_range_days: u32,
}

impl SchedulingConfig {
    #[must_use]
    pub fn policy(&self) -> SchedulePolicy {
        SchedulePolicy {
            primary_occupant_nationality: self.primary_occupant_nationality.clone(),
            past_start_rule: self.past_start_rule,
            max_occupancy_range_days: self.max_occupancy_range_days,
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            primary_occupant_nationality: default_primary_occupant_nationality(),
            past_start_rule: PastStartRule::default(),
            max_occupancy_range_days: default_max_occupancy_range_days(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "homestay-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_primary_occupant_nationality() -> String {
    homestay_core::scheduling::DEFAULT_PRIMARY_OCCUPANT_NATIONALITY.to_string()
}

fn default_max_occupancy_range_days() -> u32 {
    homestay_core::scheduling::DEFAULT_MAX_OCCUPANCY_RANGE_DAYS
}

/// Parse an optional variable; unparsable values count as absent
fn parse_var<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.trim().parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key/value source
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: parse_var(var("API_PORT")).ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var(var("DATABASE_MAX_CONNECTIONS"))
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(var("DATABASE_MIN_CONNECTIONS"))
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var(var("DATABASE_RUN_MIGRATIONS"))
                    .unwrap_or_else(default_run_migrations),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(var("RATE_LIMIT_REQUESTS_PER_SECOND"))
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(var("RATE_LIMIT_BURST")).unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            scheduling: SchedulingConfig {
                primary_occupant_nationality: var("SCHEDULE_PRIMARY_OCCUPANT_NATIONALITY")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(default_primary_occupant_nationality),
                past_start_rule: match var("SCHEDULE_PAST_START_RULE") {
                    Some(raw) => raw.parse().map_err(|_| {
                        ConfigError::InvalidValue("SCHEDULE_PAST_START_RULE", raw.clone())
                    })?,
                    None => PastStartRule::default(),
                },
                max_occupancy_range_days: match var("SCHEDULE_MAX_OCCUPANCY_RANGE_DAYS") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|days| *days > 0)
                        .ok_or_else(|| {
                            ConfigError::InvalidValue("SCHEDULE_MAX_OCCUPANCY_RANGE_DAYS", raw.clone())
                        })?,
                    None => default_max_occupancy_range_days(),
                },
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
