// src/monitor/idle.rs
use super::MonitorError;
use crate::config::WatchdogConfig;
use crate::health::HealthProbe;
use crate::shutdown::StopClient;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

/// Why a stop request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last heartbeat is at least the idle threshold old.
    Idle { last_heartbeat: i64, age_secs: i64 },
    /// The health endpoint could not be reached; assume idle.
    HealthUnreachable,
}

/// Clean result of a single watchdog run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Active { last_heartbeat: i64, age_secs: i64 },
    Stopped { reason: StopReason, status: StatusCode },
}

impl Outcome {
    pub fn stop_requested(&self) -> bool {
        matches!(self, Outcome::Stopped { .. })
    }
}

pub struct IdleMonitor {
    probe: HealthProbe,
    stop: StopClient,
    idle_threshold_secs: u64,
}

impl IdleMonitor {
    pub fn new(config: WatchdogConfig) -> Result<Self, MonitorError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(MonitorError::Client)?;

        Ok(Self {
            probe: HealthProbe::new(client.clone(), config.health_url),
            stop: StopClient::new(client, config.stop_url),
            idle_threshold_secs: config.idle_threshold_secs,
        })
    }

    /// Check once against the wall clock and act on the result.
    pub async fn run(&self) -> Result<Outcome, MonitorError> {
        self.run_at(Utc::now().timestamp()).await
    }

    /// Check once, treating `now` as the current Unix time in seconds.
    pub async fn run_at(&self, now: i64) -> Result<Outcome, MonitorError> {
        let health = match self.probe.fetch().await? {
            Some(health) => health,
            None => {
                // Unreachable health endpoint: any answer from the stop endpoint is enough.
                warn!("Assuming idle, sending stop request to {}", self.stop.url());
                let response = self.stop.send().await?;
                let status = response.status();
                info!("Stop request delivered after health failure ({})", status);
                return Ok(Outcome::Stopped {
                    reason: StopReason::HealthUnreachable,
                    status,
                });
            }
        };

        let age_secs = health.age_at(now);

        if !health.is_stale_at(now, self.idle_threshold_secs) {
            info!("{}", activity_message(self.idle_threshold_secs, health.last_heartbeat));
            return Ok(Outcome::Active {
                last_heartbeat: health.last_heartbeat,
                age_secs,
            });
        }

        info!(
            "No activity for {}s (last heartbeat {}), requesting stop",
            age_secs, health.last_heartbeat
        );

        let status = self.stop.send_checked().await?;
        info!("This instance should be shutting down now.");

        Ok(Outcome::Stopped {
            reason: StopReason::Idle {
                last_heartbeat: health.last_heartbeat,
                age_secs,
            },
            status,
        })
    }
}

fn activity_message(threshold_secs: u64, last_heartbeat: i64) -> String {
    format!(
        "Activity in the last {}s, timestamp: {}",
        threshold_secs, last_heartbeat
    )
}
