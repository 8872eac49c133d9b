pub mod config;
pub mod http;
pub mod persistence;
pub mod services;
pub mod telemetry;
