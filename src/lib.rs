pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod telemetry;
pub mod views;
