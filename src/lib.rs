// sysmetrics Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SysMetricsError};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::system_info::{MetricSample, MetricsSource, SysinfoSource};

// Initialize logging
//
// Warnings only by default so stdout stays a clean report; RUST_LOG overrides.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
