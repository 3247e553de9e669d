//! myapp: probe, status, and API-key protected endpoints for a service
//! running under a container orchestrator.
//!
//! Secrets (a database URL and an API key) are injected into the environment
//! by the cluster's secret synchronization. The service reports whether they
//! are present without ever revealing them, and uses the API key to guard
//! `/api/data`.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
