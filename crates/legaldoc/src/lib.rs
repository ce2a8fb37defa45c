pub mod config;
pub mod drafting;
pub mod error;
pub mod telemetry;
