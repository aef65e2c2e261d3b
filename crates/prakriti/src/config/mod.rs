use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use chrono::Duration;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the assessment service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reports: ReportConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let output_dir = match env::var("APP_REPORT_DIR") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyReportDir),
            Ok(value) => PathBuf::from(value.trim()),
            Err(_) => PathBuf::from("."),
        };

        let ttl_secs = env::var("APP_SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidSessionTtl)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            reports: ReportConfig { output_dir },
            sessions: SessionConfig {
                ttl: Duration::seconds(i64::from(ttl_secs)),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where exported report documents are written by the CLI.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
}

/// Lifetime of an in-memory assessment session before it is evicted.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl: Duration,
}

const DEFAULT_SESSION_TTL_SECS: u32 = 60 * 60;

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyReportDir,
    InvalidSessionTtl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptyReportDir => write!(f, "APP_REPORT_DIR must not be blank"),
            ConfigError::InvalidSessionTtl => {
                write!(f, "APP_SESSION_TTL_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::EmptyReportDir
            | ConfigError::InvalidSessionTtl => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
