const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with binary (1024-based) units and two decimals.
///
/// Picks the largest unit that keeps the value below 1024, capping at PB:
/// `1536` -> `"1.50 KB"`, `0` -> `"0.00 B"`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Percent with one decimal, e.g. `45.3`
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}", percent)
}

/// Echo a sampling interval the way it was typed: `1.0`, `0.1`, `2.5`
pub fn format_interval(seconds: f64) -> String {
    format!("{:?}", seconds)
}
