use crate::core::config::Config;
use crate::core::metrics_csv::{append_rows, current_timestamp, sample_rows};
use crate::core::system_info::{MetricsSource, SysinfoSource};
use crate::error::Result;
use crate::ui::system_formatters::write_system_report;
use anyhow::Context;
use std::io::{self, Write};

/// Take a live snapshot, print it and optionally log it to CSV.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let mut source = SysinfoSource::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(config, &mut source, &mut out).context("failed to report system metrics")
}

/// Collect -> present -> (optionally) append.
///
/// Nothing is printed unless the whole snapshot was collected. A CSV failure
/// happens after the report has been flushed, so the report stays visible.
pub fn run<S, W>(config: &Config, source: &mut S, out: &mut W) -> Result<()>
where
    S: MetricsSource + ?Sized,
    W: Write,
{
    let sample = source.collect(config.sample_interval)?;

    write_system_report(out, &sample, config.sample_interval)?;
    out.flush()?;

    if config.emit_csv {
        let timestamp = current_timestamp(config.timestamp_style());
        let rows = sample_rows(&sample, &timestamp);
        append_rows(&config.csv_path, &rows)?;

        writeln!(out, "Métricas gravadas em {}", config.csv_path.display())?;
        out.flush()?;
    }

    Ok(())
}
