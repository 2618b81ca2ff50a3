use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for sysmetrics
#[derive(Error, Debug)]
pub enum SysMetricsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("Failed to write CSV file {}", .path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for sysmetrics
pub type Result<T> = std::result::Result<T, SysMetricsError>;

impl SysMetricsError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SysMetricsError::Config(msg.into())
    }

    /// Create a metrics unavailable error
    pub fn metrics_unavailable<S: Into<String>>(msg: S) -> Self {
        SysMetricsError::MetricsUnavailable(msg.into())
    }

    pub fn csv_write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SysMetricsError::CsvWrite {
            path: path.into(),
            source,
        }
    }

    /// True for the errors raised while querying the OS
    pub fn is_metrics_unavailable(&self) -> bool {
        matches!(self, SysMetricsError::MetricsUnavailable(_))
    }
}
