use super::support::{data_lines, fixed_sample};
use std::fs;
use sysmetrics::core::metrics_csv::{append_rows, sample_rows, CSV_HEADER};
use sysmetrics::SysMetricsError;
use tempfile::TempDir;

#[test]
fn test_two_runs_share_one_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metricas.csv");
    let sample = fixed_sample();

    append_rows(&path, &sample_rows(&sample, "2025-01-01T00:00:00.000000+00:00")).unwrap();
    append_rows(&path, &sample_rows(&sample, "2025-01-01T00:05:00.000000+00:00")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let header = CSV_HEADER.join(",");
    assert_eq!(content.lines().next(), Some(header.as_str()));
    assert_eq!(content.lines().filter(|l| *l == header).count(), 1);
    assert_eq!(data_lines(&content).len(), 14);
}

#[test]
fn test_existing_content_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.csv");
    let existing = "datetime,metrica,valor,unidade\n2024-12-31 23:59:59,cpu_percent,99.9,percent\n";
    fs::write(&path, existing).unwrap();

    append_rows(&path, &sample_rows(&fixed_sample(), "2025-01-01 00:00:00")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(existing));
    assert_eq!(content.lines().count(), 2 + 7);
    assert_eq!(content.matches("datetime,metrica").count(), 1);
}

#[test]
fn test_empty_file_gets_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    append_rows(&path, &sample_rows(&fixed_sample(), "t")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("datetime,metrica,valor,unidade\n"));
    assert_eq!(data_lines(&content).len(), 7);
}

#[test]
fn test_metric_names_and_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("values.csv");

    append_rows(&path, &sample_rows(&fixed_sample(), "t")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        data_lines(&content),
        vec![
            "t,memory_total,4294967296,bytes",
            "t,memory_available,3221225472,bytes",
            "t,memory_used_percent,25.0,percent",
            "t,disk_total,68719476736,bytes",
            "t,disk_used_percent,25.0,percent",
            "t,disk_free,51539607552,bytes",
            "t,cpu_percent,3.2,percent",
        ]
    );
}

#[test]
fn test_missing_parent_directory_is_csv_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("metricas.csv");

    let err = append_rows(&path, &sample_rows(&fixed_sample(), "t")).unwrap_err();

    match err {
        SysMetricsError::CsvWrite { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_directory_as_target_is_csv_write_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = append_rows(temp_dir.path(), &sample_rows(&fixed_sample(), "t")).unwrap_err();

    assert!(matches!(err, SysMetricsError::CsvWrite { .. }));
    assert!(err.to_string().contains(&temp_dir.path().display().to_string()));
}
