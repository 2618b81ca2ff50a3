use crate::core::system_info::types::{percent_of, DiskInfo};
use crate::error::{Result, SysMetricsError};
use log::debug;

#[cfg(not(unix))]
use sysinfo::Disks;

/// Collect usage of the root filesystem (`/`, or the system drive on Windows)
pub fn collect() -> Result<DiskInfo> {
    let root = root_path();
    let (total, used, free) = query_usage(&root)?;
    debug!(
        "disk {}: total={} used={} free={}",
        root, total, used, free
    );
    Ok(build_disk_info(root, total, used, free))
}

fn build_disk_info(mount_point: String, total: u64, used: u64, free: u64) -> DiskInfo {
    DiskInfo {
        mount_point,
        total_bytes: total,
        used_bytes: used,
        free_bytes: free,
        usage_percent: percent_of(used, used.saturating_add(free)),
    }
}

#[cfg(unix)]
fn root_path() -> String {
    "/".to_string()
}

#[cfg(not(unix))]
fn root_path() -> String {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    format!("{}\\", drive)
}

/// (total, used, free) in bytes, where used counts reserved blocks as taken
/// and free is what an unprivileged user can still allocate.
#[cfg(unix)]
fn query_usage(root: &str) -> Result<(u64, u64, u64)> {
    use std::ffi::CString;

    let c_path = CString::new(root)
        .map_err(|e| SysMetricsError::metrics_unavailable(format!("invalid path {}: {}", root, e)))?;

    // SAFETY: statvfs only writes into the zeroed struct we own, and c_path
    // outlives the call.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(SysMetricsError::metrics_unavailable(format!(
            "statvfs({}) failed: {}",
            root,
            std::io::Error::last_os_error()
        )));
    }

    #[allow(clippy::unnecessary_cast)]
    let (blocks, bfree, bavail, frsize) = (
        stat.f_blocks as u64,
        stat.f_bfree as u64,
        stat.f_bavail as u64,
        stat.f_frsize as u64,
    );

    let total = blocks.saturating_mul(frsize);
    let used = blocks.saturating_sub(bfree).saturating_mul(frsize);
    let free = bavail.saturating_mul(frsize);
    Ok((total, used, free))
}

#[cfg(not(unix))]
fn query_usage(root: &str) -> Result<(u64, u64, u64)> {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|disk| {
            disk.mount_point()
                .to_string_lossy()
                .eq_ignore_ascii_case(root)
        })
        .ok_or_else(|| {
            SysMetricsError::metrics_unavailable(format!("no mounted disk found for {}", root))
        })?;

    let total = disk.total_space();
    let free = disk.available_space();
    Ok((total, total.saturating_sub(free), free))
}
