//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::templates::LandingPage;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is fixed at startup: the configuration, the landing page
/// template (if it loaded), the host name, and the process start time used
/// for uptime reporting.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub landing: Arc<LandingPage>,
    pub hostname: Arc<str>,
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state from the given configuration and landing page.
    pub fn new(config: AppConfig, landing: LandingPage) -> Self {
        Self {
            config: Arc::new(config),
            landing: Arc::new(landing),
            hostname: system_hostname().into(),
            started_at: Instant::now(),
        }
    }
}

fn system_hostname() -> String {
    match hostname::get() {
        Ok(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        Ok(_) => "unknown".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read hostname");
            "unknown".to_string()
        }
    }
}
