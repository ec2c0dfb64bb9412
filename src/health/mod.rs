// src/health/mod.rs
mod probe;
mod status;

pub use probe::HealthProbe;
pub use status::HealthStatus;
