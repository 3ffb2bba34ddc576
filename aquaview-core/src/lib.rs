pub mod analysis;
pub mod classify;
pub mod error;
pub mod logger;
pub mod telemetry;
