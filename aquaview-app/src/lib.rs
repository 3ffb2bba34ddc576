pub mod config;
pub mod plotting;
pub mod report;
pub mod server;
