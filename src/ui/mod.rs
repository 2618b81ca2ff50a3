// UI and formatting module

pub mod formatters;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_interval, format_percent};
pub use system_formatters::write_system_report;
