use crate::core::system_info::types::{round_percent, CpuInfo};
use crate::error::{Result, SysMetricsError};
use log::{debug, warn};
use std::time::Duration;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};

/// Measure CPU utilisation over `interval_secs` seconds.
///
/// Blocks the calling thread for the whole window: utilisation is the busy
/// time delta between two refreshes of the kernel counters. sysinfo ignores
/// a refresh that comes sooner than `MINIMUM_CPU_UPDATE_INTERVAL` after the
/// previous one, so shorter windows (including 0) are stretched to that
/// minimum. Negative or non-finite windows are rejected.
pub fn sample(sys: &mut System, interval_secs: f64) -> Result<CpuInfo> {
    let window = effective_window(sampling_window(interval_secs)?);

    sys.refresh_cpu_usage();
    let logical_cores = sys.cpus().len();
    if logical_cores == 0 {
        return Err(SysMetricsError::metrics_unavailable(
            "no CPUs reported by the operating system",
        ));
    }

    debug!("sampling CPU usage over {:?}", window);
    std::thread::sleep(window);
    sys.refresh_cpu_usage();

    let physical_cores = System::physical_core_count().filter(|&count| count > 0);
    if physical_cores.is_none() {
        warn!("physical core count is not available on this host");
    }

    Ok(CpuInfo {
        usage_percent: round_percent(f64::from(sys.global_cpu_usage())),
        logical_cores,
        physical_cores,
    })
}

/// Window actually waited: never below what sysinfo needs between refreshes.
fn effective_window(requested: Duration) -> Duration {
    if requested < MINIMUM_CPU_UPDATE_INTERVAL {
        warn!(
            "CPU sampling window {:?} is below the {:?} minimum; sampling over {:?}",
            requested, MINIMUM_CPU_UPDATE_INTERVAL, MINIMUM_CPU_UPDATE_INTERVAL
        );
        return MINIMUM_CPU_UPDATE_INTERVAL;
    }
    requested
}

fn sampling_window(interval_secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(interval_secs).map_err(|e| {
        SysMetricsError::metrics_unavailable(format!(
            "cannot sample CPU over an interval of {}s: {}",
            interval_secs, e
        ))
    })
}
