//! Configuration loading and constants.
//!
//! All settings come from command-line flags or their environment variable
//! equivalents, parsed once at startup into [`Args`] and normalized into
//! [`AppConfig`]. Secrets are injected into the environment by the cluster's
//! secret synchronization; their absence is a valid "not configured" state.

use std::fmt;

use clap::Parser;

// =============================================================================
// Defaults
// =============================================================================

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default listen address (all interfaces, as required inside a pod)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Reported application version when VERSION is unset
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Reported deployment environment when ENVIRONMENT is unset
pub const DEFAULT_ENVIRONMENT: &str = "unknown";

/// Bundled landing page template
pub const DEFAULT_LANDING_TEMPLATE: &str = "templates/index.html";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "myapp=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// Response constants
// =============================================================================

/// Greeting returned by the root endpoint
pub const ROOT_MESSAGE: &str = "Hello from MyApp on EKS!";

/// Cache-Control for probes and live data
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Command line arguments, each backed by an environment variable.
#[derive(Parser, Debug)]
#[command(name = "myapp", version, about)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Application version reported by the API
    #[arg(long = "app-version", env = "VERSION", default_value = DEFAULT_VERSION)]
    pub app_version: String,

    /// Deployment environment reported by the API
    #[arg(long, env = "ENVIRONMENT", default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Database connection string (only its presence is reported)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Key required in the x-api-key header of /api/data
    #[arg(long, env = "API_SECRET_KEY", hide = true, hide_env_values = true)]
    pub api_secret_key: Option<String>,

    /// Path to the HTML landing page template
    #[arg(long, env = "LANDING_TEMPLATE", default_value = DEFAULT_LANDING_TEMPLATE)]
    pub landing_template: String,

    /// Log level filter (e.g., "myapp=debug")
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Log format: "text" or "json"
    #[arg(long, env = "LOG_FORMAT", default_value = DEFAULT_LOG_FORMAT)]
    pub log_format: String,
}

/// Immutable runtime configuration shared by all handlers.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub version: String,
    pub environment: String,
    pub database_url: Option<String>,
    pub api_secret_key: Option<String>,
    pub landing_template: String,
}

impl AppConfig {
    /// Whether a database connection string was injected
    pub fn has_database(&self) -> bool {
        self.database_url.is_some()
    }

    /// Whether an API key was injected
    pub fn has_api_key(&self) -> bool {
        self.api_secret_key.is_some()
    }

    /// Report the secret status without revealing any values.
    pub fn secrets_status(&self) -> SecretsStatus {
        SecretsStatus {
            database: if self.has_database() {
                "connected"
            } else {
                NOT_CONFIGURED
            },
            api_key: if self.has_api_key() {
                "configured"
            } else {
                NOT_CONFIGURED
            },
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            version: args.app_version,
            environment: args.environment,
            database_url: non_empty(args.database_url),
            api_secret_key: non_empty(args.api_secret_key),
            landing_template: args.landing_template,
        }
    }
}

// Secrets are never printed, even in debug logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.secrets_status();
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("version", &self.version)
            .field("environment", &self.environment)
            .field("database_url", &status.database)
            .field("api_secret_key", &status.api_key)
            .field("landing_template", &self.landing_template)
            .finish()
    }
}

const NOT_CONFIGURED: &str = "NOT CONFIGURED";

/// Secret presence flags as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SecretsStatus {
    pub database: &'static str,
    #[serde(rename = "apiKey")]
    pub api_key: &'static str,
}

/// An empty injected value counts as not configured.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["myapp"];
        argv.extend_from_slice(args);
        AppConfig::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--port",
            "9090",
            "--app-version",
            "2.3.4",
            "--environment",
            "staging",
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.version, "2.3.4");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_default_log_filter_targets_crate() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER
            .split(',')
            .all(|directive| directive.starts_with(env!("CARGO_CRATE_NAME"))));
    }

    #[test]
    fn test_empty_secrets_are_not_configured() {
        let config = parse(&["--database-url", "", "--api-secret-key", ""]);
        assert!(!config.has_database());
        assert!(!config.has_api_key());
        assert_eq!(
            config.secrets_status(),
            SecretsStatus {
                database: "NOT CONFIGURED",
                api_key: "NOT CONFIGURED",
            }
        );
    }

    #[test]
    fn test_configured_secrets_status() {
        let config = parse(&[
            "--database-url",
            "postgres://db:5432/app",
            "--api-secret-key",
            "s3cret",
        ]);
        assert_eq!(
            config.secrets_status(),
            SecretsStatus {
                database: "connected",
                api_key: "configured",
            }
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = parse(&[
            "--database-url",
            "postgres://user:hunter2@db/app",
            "--api-secret-key",
            "s3cret-key",
        ]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("s3cret-key"));
        assert!(debug.contains("configured"));
    }

    #[test]
    fn test_secrets_status_serializes_camel_case() {
        let json = serde_json::to_value(SecretsStatus {
            database: "connected",
            api_key: "NOT CONFIGURED",
        })
        .unwrap();
        assert_eq!(json["database"], "connected");
        assert_eq!(json["apiKey"], "NOT CONFIGURED");
    }
}
