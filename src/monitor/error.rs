// src/monitor/error.rs
use reqwest::StatusCode;

/// Every way a watchdog run can fail. All of them are terminal.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Failed to read health response body")]
    HealthBody(#[source] reqwest::Error),

    #[error("Malformed health response")]
    HealthParse(#[source] serde_json::Error),

    #[error("Stop request failed")]
    StopRequest(#[source] reqwest::Error),

    #[error("Failed to read stop response body")]
    StopBody(#[source] reqwest::Error),

    #[error("Stop request rejected with {status}: {body}")]
    StopRejected { status: StatusCode, body: String },
}

impl MonitorError {
    /// True for failures that happened before any stop request was attempted.
    pub fn is_health_error(&self) -> bool {
        matches!(self, MonitorError::HealthBody(_) | MonitorError::HealthParse(_))
    }
}
