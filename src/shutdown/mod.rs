// src/shutdown/mod.rs
mod client;

pub use client::StopClient;
