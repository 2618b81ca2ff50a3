use std::collections::HashSet;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sysmetrics() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sysmetrics"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_end_to_end_csv_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.csv");

    let output = sysmetrics()
        .arg("--csv")
        .arg(format!("--csv-file={}", path.display()))
        .arg("--interval=0.1")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    for section in ["Informações do sistema", "Memória:", "Disco (root /):", "CPU:"] {
        assert!(stdout.contains(section), "missing {section}");
    }
    assert!(stdout.contains("Percent (interval=0.1s):"));

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "datetime,metrica,valor,unidade");
    assert_eq!(lines.len(), 8);

    let timestamps: HashSet<_> = lines[1..].iter().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(timestamps.len(), 1);

    let names: Vec<_> = lines[1..].iter().map(|l| l.split(',').nth(1).unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "memory_total",
            "memory_available",
            "memory_used_percent",
            "disk_total",
            "disk_used_percent",
            "disk_free",
            "cpu_percent",
        ]
    );
}

#[test]
fn test_unwritable_csv_path_fails_after_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist").join("test.csv");

    let output = sysmetrics()
        .args(["--csv", "--interval", "0.1", "--csv-file"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("Memória:"));
    assert!(stdout.contains("CPU:"));
    assert!(stderr.contains("failed to report system metrics"));
    assert!(stderr.contains("Failed to write CSV file"));
    assert!(stderr.contains("test.csv"));
    assert_eq!(stderr.matches("No such file or directory").count(), 1);
}

#[test]
fn test_malformed_interval_is_usage_error() {
    let output = sysmetrics().args(["--interval", "abc"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--interval"));
}

#[test]
fn test_negative_interval_is_metrics_unavailable() {
    let output = sysmetrics().arg("--interval=-1").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Metrics unavailable"));
}
