use crate::core::system_info::types::OsInfo;
use sysinfo::System;

const UNKNOWN: &str = "Unknown";

pub fn collect() -> OsInfo {
    OsInfo {
        name: os_family(std::env::consts::OS),
        release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
        architecture: std::env::consts::ARCH.to_string(),
    }
}

/// Kernel family name as the OS reports it (`uname -s` style)
fn os_family(target_os: &str) -> String {
    match target_os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        other => other.to_string(),
    }
}
