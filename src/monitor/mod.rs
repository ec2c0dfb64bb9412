// src/monitor/mod.rs
mod error;
mod idle;

pub use error::MonitorError;
pub use idle::{IdleMonitor, Outcome, StopReason};
