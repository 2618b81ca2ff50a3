use crate::cli::DEFAULT_CSV_FILE;
use crate::core::metrics_csv::TimestampStyle;
use crate::error::{Result, SysMetricsError};
use clap::ArgMatches;
use std::path::PathBuf;

/// Options for a single report run.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub emit_csv: bool,
    pub csv_path: PathBuf,
    /// CPU sampling window in seconds. Not validated here; see `cpu::sample`.
    pub sample_interval: f64,
    pub use_local_time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emit_csv: false,
            csv_path: PathBuf::from(DEFAULT_CSV_FILE),
            sample_interval: 1.0,
            use_local_time: false,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let csv_path = matches
            .get_one::<String>("csv-file")
            .map(PathBuf::from)
            .ok_or_else(|| SysMetricsError::config("missing value for --csv-file"))?;

        let sample_interval = matches
            .get_one::<f64>("interval")
            .copied()
            .ok_or_else(|| SysMetricsError::config("missing value for --interval"))?;

        Ok(Self {
            emit_csv: matches.get_flag("csv"),
            csv_path,
            sample_interval,
            use_local_time: matches.get_flag("local-time"),
        })
    }

    pub fn timestamp_style(&self) -> TimestampStyle {
        if self.use_local_time {
            TimestampStyle::Local
        } else {
            TimestampStyle::Utc
        }
    }
}
