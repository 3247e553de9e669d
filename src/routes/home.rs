//! Root endpoint: application info as JSON, or the HTML landing page for
//! clients that prefer HTML.

use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::instrument;

use crate::config::{SecretsStatus, ROOT_MESSAGE};
use crate::http::negotiate::{negotiate, Representation};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootInfo<'a> {
    pub message: &'static str,
    pub version: &'a str,
    pub environment: &'a str,
    pub secrets: SecretsStatus,
}

/// Root handler.
#[instrument(name = "home::index", skip_all)]
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = &state.config;
    let accept = headers.get(ACCEPT).and_then(|value| value.to_str().ok());

    if negotiate(accept, state.landing.is_available()) == Representation::Html {
        match state.landing.render(&config.environment, &config.version) {
            Ok(html) => return Html(html).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render landing page, serving JSON");
            }
        }
    }

    Json(RootInfo {
        message: ROOT_MESSAGE,
        version: &config.version,
        environment: &config.environment,
        secrets: config.secrets_status(),
    })
    .into_response()
}
