// src/health/probe.rs
use super::HealthStatus;
use crate::monitor::MonitorError;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Fetches and decodes the local health endpoint.
pub struct HealthProbe {
    client: Client,
    url: Url,
}

impl HealthProbe {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns `Ok(None)` when the endpoint could not be reached at all.
    ///
    /// The response status is not inspected: whatever body comes back must
    /// decode as a [`HealthStatus`].
    pub async fn fetch(&self) -> Result<Option<HealthStatus>, MonitorError> {
        let response = match self.client.get(self.url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Health endpoint {} unreachable: {}", self.url, e);
                return Ok(None);
            }
        };

        debug!("Health endpoint {} answered {}", self.url, response.status());

        let body = response.bytes().await.map_err(MonitorError::HealthBody)?;
        let status: HealthStatus =
            serde_json::from_slice(&body).map_err(MonitorError::HealthParse)?;

        debug!(
            status = %status.status,
            last_heartbeat = status.last_heartbeat,
            "Decoded health status"
        );

        Ok(Some(status))
    }
}
