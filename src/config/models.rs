// src/config/models.rs
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_HEALTH_URL: &str = "http://localhost/healthz";
pub const DEFAULT_STOP_URL: &str =
    "https://srg-devplatform-backend-k7em4uqi4a-km.a.run.app/self/stop";

/// Activity older than this is considered idle (30 minutes).
pub const DEFAULT_IDLE_THRESHOLD_SECS: u64 = 1800;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    pub health_url: Url,
    pub stop_url: Url,
    pub idle_threshold_secs: u64,
    /// Per-request client timeout. Unset means requests may block indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            health_url: Url::parse(DEFAULT_HEALTH_URL).expect("default health URL is valid"),
            stop_url: Url::parse(DEFAULT_STOP_URL).expect("default stop URL is valid"),
            idle_threshold_secs: DEFAULT_IDLE_THRESHOLD_SECS,
            timeout_secs: None,
        }
    }
}

impl WatchdogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.idle_threshold_secs == 0 {
            bail!("idle_threshold_secs must be greater than zero");
        }

        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero when set");
        }

        for (name, url) in [("health_url", &self.health_url), ("stop_url", &self.stop_url)] {
            match url.scheme() {
                "http" | "https" => {}
                other => bail!("{} must use http or https, got scheme '{}'", name, other),
            }
        }

        Ok(())
    }

    pub fn idle_threshold(&self) -> Duration {
        Duration::from_secs(self.idle_threshold_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
