use serde::Serialize;

/// One complete snapshot of the host, taken in a single pass
#[derive(Debug, Clone, Serialize)]
pub struct MetricSample {
    pub os: OsInfo,
    pub memory: MemoryInfo,
    pub disk: DiskInfo,
    pub cpu: CpuInfo,
}

/// Identity line: OS family, kernel release, machine architecture
#[derive(Debug, Clone, Serialize)]
pub struct OsInfo {
    pub name: String,
    pub release: String,
    pub architecture: String,
}

/// Memory Information
#[derive(Debug, Clone, Serialize)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    /// (total - available) / total, one decimal
    pub usage_percent: f64,
}

/// Usage of the root filesystem
#[derive(Debug, Clone, Serialize)]
pub struct DiskInfo {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    /// Space available to unprivileged users
    pub free_bytes: u64,
    /// used / (used + free), one decimal
    pub usage_percent: f64,
}

/// CPU Information
#[derive(Debug, Clone, Serialize)]
pub struct CpuInfo {
    pub usage_percent: f64,
    pub logical_cores: usize,
    /// `None` when the platform does not expose it (common in VMs and containers)
    pub physical_cores: Option<usize>,
}

/// Round to one decimal place, the precision every percent is reported with.
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_percent(part as f64 / whole as f64 * 100.0)
}
