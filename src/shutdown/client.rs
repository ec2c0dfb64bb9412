// src/shutdown/client.rs
use crate::monitor::MonitorError;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

/// Sends the remote self-stop signal.
pub struct StopClient {
    client: Client,
    url: Url,
}

impl StopClient {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue the stop request. Any HTTP response counts as delivered.
    pub async fn send(&self) -> Result<Response, MonitorError> {
        debug!("Sending stop request to {}", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(MonitorError::StopRequest)?;

        debug!("Stop endpoint answered {}", response.status());
        Ok(response)
    }

    /// Issue the stop request and require exactly `200 OK`.
    ///
    /// Any other status is surfaced as [`MonitorError::StopRejected`] carrying
    /// the response body.
    pub async fn send_checked(&self) -> Result<StatusCode, MonitorError> {
        let response = self.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.map_err(MonitorError::StopBody)?;
            return Err(MonitorError::StopRejected { status, body });
        }

        Ok(status)
    }
}
