//! Live status endpoint: deployment info plus host, uptime, and current time.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::config::SecretsStatus;
use crate::state::AppState;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86400;

#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub environment: String,
    pub version: String,
    pub secrets: SecretsStatus,
    pub hostname: String,
    pub uptime: String,
    pub timestamp: String,
}

/// Status handler.
#[instrument(name = "status::status", skip_all)]
pub async fn status(State(state): State<AppState>) -> Json<StatusInfo> {
    let config = &state.config;
    Json(StatusInfo {
        environment: config.environment.clone(),
        version: config.version.clone(),
        secrets: config.secrets_status(),
        hostname: state.hostname.to_string(),
        uptime: format_uptime(state.started_at.elapsed().as_secs()),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Format a duration as "1d 2h 3m 4s".
///
/// Leading zero units are dropped; once a unit is shown every smaller unit
/// follows, and seconds are always present.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / SECONDS_PER_DAY;
    let hours = (total_secs % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_secs % SECONDS_PER_MINUTE;

    let units = [(days, 'd'), (hours, 'h'), (minutes, 'm')];
    let mut parts: Vec<String> = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .map(|(value, suffix)| format!("{}{}", value, suffix))
        .collect();
    parts.push(format!("{}s", seconds));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_seconds_only() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
    }

    #[test]
    fn test_format_uptime_minutes() {
        assert_eq!(format_uptime(60), "1m 0s");
        assert_eq!(format_uptime(65), "1m 5s");
    }

    #[test]
    fn test_format_uptime_all_units() {
        assert_eq!(format_uptime(90065), "1d 1h 1m 5s");
    }

    #[test]
    fn test_format_uptime_keeps_inner_zeros() {
        assert_eq!(format_uptime(3605), "1h 0m 5s");
        assert_eq!(format_uptime(SECONDS_PER_DAY), "1d 0h 0m 0s");
    }

    #[test]
    fn test_format_uptime_many_days() {
        assert_eq!(format_uptime(400 * SECONDS_PER_DAY + 7), "400d 0h 0m 7s");
    }
}
