// src/health/status.rs
use serde::{Deserialize, Serialize};

/// Body reported by the local health endpoint.
///
/// Missing fields fall back to their zero values, so a body without
/// `lastHeartbeat` reads as activity at the epoch and is always stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    /// Unix epoch seconds of the last observed activity.
    pub last_heartbeat: i64,
}

impl HealthStatus {
    /// Seconds elapsed since the heartbeat. Negative when the heartbeat is in the future.
    pub fn age_at(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_heartbeat)
    }

    pub fn is_stale_at(&self, now: i64, threshold_secs: u64) -> bool {
        let threshold = i64::try_from(threshold_secs).unwrap_or(i64::MAX);
        self.age_at(now) >= threshold
    }
}
