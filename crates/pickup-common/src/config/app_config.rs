//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). Missing backend credentials are fatal: the process refuses to
//! start rather than run a sweep it cannot complete.

use pickup_core::GameSchedule;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub backend: BackendConfig,
    pub sweep: SweepConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Local runs get human-readable logs; everything else is deployed
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

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which backend the repositories talk to
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Managed backend over its PostgREST surface
    Rest(RestConfig),
    /// Direct PostgreSQL connection
    Postgres(DatabaseConfig),
}

impl BackendConfig {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rest(_) => "rest",
            Self::Postgres(_) => "postgres",
        }
    }
}

/// Managed backend REST configuration
#[derive(Clone)]
pub struct RestConfig {
    /// Project URL, without trailing slash
    pub url: String,
    /// Service-role key, sent as both `apikey` and bearer token
    pub service_key: String,
    pub timeout_secs: u64,
}

impl RestConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Database configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// Archival sweep configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Timezone policy for game start instants
    pub schedule: GameSchedule,
    /// Period of the in-process scheduler; `None` disables it
    pub interval_secs: Option<u64>,
}

impl SweepConfig {
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval_secs.map(Duration::from_secs)
    }
}

// Default value functions
fn default_app_name() -> String {
    "pickup-archiver".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_backend_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// any value fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match get("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        let backend = match get("BACKEND").map(|s| s.to_lowercase()).as_deref() {
            None | Some("rest") => BackendConfig::Rest(RestConfig {
                url: normalize_url(
                    "SUPABASE_URL",
                    get("SUPABASE_URL").ok_or(ConfigError::MissingVar("SUPABASE_URL"))?,
                )?,
                service_key: get("SUPABASE_SERVICE_ROLE_KEY")
                    .ok_or(ConfigError::MissingVar("SUPABASE_SERVICE_ROLE_KEY"))?,
                timeout_secs: parse_or(&get, "BACKEND_TIMEOUT_SECS", default_backend_timeout)?,
            }),
            Some("postgres" | "postgresql") => BackendConfig::Postgres(DatabaseConfig {
                url: get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&get, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            }),
            Some(other) => return Err(ConfigError::InvalidValue("BACKEND", other.to_string())),
        };

        let schedule = match get("GAME_UTC_OFFSET") {
            Some(raw) => raw
                .parse::<GameSchedule>()
                .map_err(|_| ConfigError::InvalidValue("GAME_UTC_OFFSET", raw))?,
            None => GameSchedule::utc(),
        };

        let interval_secs = match parse_opt::<u64, _>(&get, "SWEEP_INTERVAL_SECS")? {
            Some(0) | None => None,
            Some(secs) => Some(secs),
        };

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&get, "API_PORT", default_port)?,
            },
            backend,
            sweep: SweepConfig {
                schedule,
                interval_secs,
            },
        })
    }
}

fn parse_opt<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

fn parse_or<T, G>(get: &G, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(get, key)?.unwrap_or_else(default))
}

fn normalize_url(key: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidValue(key, raw))
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
