// Core business logic module

pub mod config;
pub mod metrics_csv;
pub mod system_info;

// Re-export commonly used items
pub use config::Config;
pub use metrics_csv::{append_rows, sample_rows, CsvRow, TimestampStyle};
pub use system_info::{MetricSample, MetricsSource, SysinfoSource};
