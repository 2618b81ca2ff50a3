use crate::core::system_info::types::MetricSample;
use crate::core::system_info::{cpu, memory, os, storage};
use crate::error::{Result, SysMetricsError};
use log::debug;
use sysinfo::System;

/// Anything that can produce a full snapshot of the host.
///
/// The report command only depends on this trait, so tests can drive it with
/// canned samples instead of the live OS.
pub trait MetricsSource {
    /// Take one snapshot, blocking for the CPU sampling window.
    fn collect(&mut self, sample_interval: f64) -> Result<MetricSample>;
}

/// Live snapshot backed by sysinfo and the platform filesystem APIs
pub struct SysinfoSource {
    system: System,
}

impl SysinfoSource {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoSource {
    fn collect(&mut self, sample_interval: f64) -> Result<MetricSample> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SysMetricsError::metrics_unavailable(format!(
                "system metrics are not supported on {}",
                std::env::consts::OS
            )));
        }

        let os = os::collect();
        let memory = memory::collect(&mut self.system)?;
        let disk = storage::collect()?;
        // Last: this is the only step that blocks.
        let cpu = cpu::sample(&mut self.system, sample_interval)?;
        debug!("snapshot collected for {} {}", os.name, os.release);

        Ok(MetricSample {
            os,
            memory,
            disk,
            cpu,
        })
    }
}
