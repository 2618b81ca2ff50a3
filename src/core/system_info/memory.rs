use crate::core::system_info::types::{percent_of, MemoryInfo};
use crate::error::{Result, SysMetricsError};
use log::debug;
use sysinfo::System;

pub fn collect(sys: &mut System) -> Result<MemoryInfo> {
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        // sysinfo reports zeros instead of failing when /proc/meminfo (or the
        // platform equivalent) cannot be read.
        return Err(SysMetricsError::metrics_unavailable(
            "memory totals could not be read from the operating system",
        ));
    }

    let available = sys.available_memory().min(total);
    let used = sys.used_memory();
    debug!(
        "memory: total={} available={} used={}",
        total, available, used
    );

    Ok(MemoryInfo {
        total_bytes: total,
        available_bytes: available,
        used_bytes: used,
        usage_percent: percent_of(total - available, total),
    })
}
