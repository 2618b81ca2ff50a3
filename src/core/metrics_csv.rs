//! Append-only CSV log of snapshots.
//!
//! Every run appends one row per metric, all sharing the same timestamp. The
//! header `datetime,metrica,valor,unidade` is written only when the file is
//! missing or empty, so repeated runs build a single table.

use crate::core::system_info::MetricSample;
use crate::error::{Result, SysMetricsError};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use csv::WriterBuilder;
use log::{debug, info};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["datetime", "metrica", "valor", "unidade"];

const UNIT_BYTES: &str = "bytes";
const UNIT_PERCENT: &str = "percent";

/// One line of the log. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvRow {
    pub datetime: String,
    pub metrica: &'static str,
    pub valor: String,
    pub unidade: &'static str,
}

impl CsvRow {
    fn bytes(datetime: &str, metrica: &'static str, value: u64) -> Self {
        Self {
            datetime: datetime.to_string(),
            metrica,
            valor: value.to_string(),
            unidade: UNIT_BYTES,
        }
    }

    fn percent(datetime: &str, metrica: &'static str, value: f64) -> Self {
        Self {
            datetime: datetime.to_string(),
            metrica,
            valor: format!("{:.1}", value),
            unidade: UNIT_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// ISO-8601 with offset, e.g. `2025-03-01T14:05:09.123456+00:00`
    Utc,
    /// Local wall clock, `YYYY-MM-DD HH:MM:SS`, no zone marker
    Local,
}

impl TimestampStyle {
    pub fn format(self, now: DateTime<Utc>) -> String {
        match self {
            TimestampStyle::Utc => now.to_rfc3339_opts(SecondsFormat::Micros, false),
            TimestampStyle::Local => now
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

pub fn current_timestamp(style: TimestampStyle) -> String {
    style.format(Utc::now())
}

/// Expand a snapshot into its fixed set of rows, in log order.
pub fn sample_rows(sample: &MetricSample, timestamp: &str) -> Vec<CsvRow> {
    vec![
        CsvRow::bytes(timestamp, "memory_total", sample.memory.total_bytes),
        CsvRow::bytes(timestamp, "memory_available", sample.memory.available_bytes),
        CsvRow::percent(timestamp, "memory_used_percent", sample.memory.usage_percent),
        CsvRow::bytes(timestamp, "disk_total", sample.disk.total_bytes),
        CsvRow::percent(timestamp, "disk_used_percent", sample.disk.usage_percent),
        CsvRow::bytes(timestamp, "disk_free", sample.disk.free_bytes),
        CsvRow::percent(timestamp, "cpu_percent", sample.cpu.usage_percent),
    ]
}

/// A header is due when the file does not exist yet or has no content.
pub fn needs_header(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.len() == 0,
        Err(_) => true,
    }
}

/// Append `rows` to the CSV file at `path`, creating it (with header) if needed.
///
/// Existing content is never truncated. The file handle is closed before
/// returning, on success and on error.
pub fn append_rows(path: &Path, rows: &[CsvRow]) -> Result<()> {
    let write_header = needs_header(path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SysMetricsError::csv_write(path, e))?;

    let mut writer = WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| SysMetricsError::csv_write(path, io::Error::from(e)))?;
    }
    writer
        .flush()
        .map_err(|e| SysMetricsError::csv_write(path, e))?;

    if write_header {
        info!("created CSV header in {}", path.display());
    }
    debug!("appended {} rows to {}", rows.len(), path.display());

    Ok(())
}
