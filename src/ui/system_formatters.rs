use crate::core::system_info::types::*;
use crate::ui::formatters::{format_bytes, format_interval, format_percent};
use colored::*;
use std::io::{self, Write};

const PHYSICAL_CORES_UNAVAILABLE: &str = "indisponível";

/// Render the report: identity line, then memory, disk and CPU sections.
pub fn write_system_report<W: Write>(
    out: &mut W,
    sample: &MetricSample,
    sample_interval: f64,
) -> io::Result<()> {
    writeln!(out, "{}", "Informações do sistema".bold())?;
    writeln!(
        out,
        "Sistema: {} {} ({})",
        sample.os.name, sample.os.release, sample.os.architecture
    )?;

    write_memory_section(out, &sample.memory)?;
    write_disk_section(out, &sample.disk)?;
    write_cpu_section(out, &sample.cpu, sample_interval)
}

fn write_section_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold())
}

fn write_memory_section<W: Write>(out: &mut W, memory: &MemoryInfo) -> io::Result<()> {
    write_section_header(out, "Memória:")?;
    writeln!(out, "  Total: {}", format_bytes(memory.total_bytes))?;
    writeln!(out, "  Disponível: {}", format_bytes(memory.available_bytes))?;
    writeln!(
        out,
        "  Em uso: {} ({}%)",
        format_bytes(memory.used_bytes),
        format_percent(memory.usage_percent)
    )
}

fn write_disk_section<W: Write>(out: &mut W, disk: &DiskInfo) -> io::Result<()> {
    write_section_header(out, "Disco (root /):")?;
    writeln!(out, "  Total: {}", format_bytes(disk.total_bytes))?;
    writeln!(
        out,
        "  Usado: {} ({}%)",
        format_bytes(disk.used_bytes),
        format_percent(disk.usage_percent)
    )?;
    writeln!(out, "  Livre: {}", format_bytes(disk.free_bytes))
}

fn write_cpu_section<W: Write>(out: &mut W, cpu: &CpuInfo, sample_interval: f64) -> io::Result<()> {
    write_section_header(out, "CPU:")?;
    writeln!(
        out,
        "  Percent (interval={}s): {}%",
        format_interval(sample_interval),
        format_percent(cpu.usage_percent)
    )?;
    writeln!(out, "  Contagem lógica: {}", cpu.logical_cores)?;

    let physical = cpu
        .physical_cores
        .map(|count| count.to_string())
        .unwrap_or_else(|| PHYSICAL_CORES_UNAVAILABLE.to_string());
    writeln!(out, "  Contagem física: {}", physical)
}
