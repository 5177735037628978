use std::fs;

use lmx_core::{LmxError, Phase, PhaseSampleLog};
use lmx_plot::{phase_window, summarize_phases, ImageFormat, RenderConfig};
use lmx_stat::count_outliers;
use tempfile::tempdir;

#[test]
fn kneading_is_truncated_to_limit() {
    let mut log = PhaseSampleLog::new();
    for idx in 0..150_000u64 {
        log.push(Phase::Kneading, idx % 1000);
    }
    // Values past the limit would be outliers if they were included.
    for idx in 100_000..150_000 {
        log.kneading[idx] = 1_000_000;
    }
    log.push(Phase::Inflationary, 3);

    let config = RenderConfig::default();
    assert_eq!(config.kneading_limit, 100_000);
    let window = phase_window(&log, Phase::Kneading, &config);
    assert_eq!(window.len(), 100_000);
    assert_eq!(window, &log.kneading[..100_000]);

    let report = summarize_phases(&log, &config);
    assert_eq!(report.kneading.samples_total, 150_000);
    assert_eq!(report.kneading.samples_used, 100_000);
    assert_eq!(report.kneading.outliers, count_outliers(window));
    assert_eq!(report.kneading.outliers, 0);
    assert_eq!(
        report.kneading.box_summary.as_ref().map(|summary| summary.count),
        Some(100_000)
    );
    assert_eq!(report.inflationary.samples_used, 1);
    assert!(report.images.is_empty());
}

#[test]
fn inflationary_is_never_truncated() {
    let mut log = PhaseSampleLog::new();
    log.inflationary = vec![1; 12];
    let config = RenderConfig {
        kneading_limit: 4,
        ..RenderConfig::default()
    };
    assert_eq!(phase_window(&log, Phase::Inflationary, &config).len(), 12);
}

#[test]
fn config_loads_partial_yaml() {
    let dir = tempdir().expect("tmp dir");
    let path = dir.path().join("render.yaml");
    fs::write(&path, "figure:\n  format: svg\n  width: 640\nkneading_limit: 50\n")
        .expect("write yaml");
    let config = RenderConfig::load(&path).expect("load");
    assert_eq!(config.figure.format, ImageFormat::Svg);
    assert_eq!(config.figure.width, 640);
    assert_eq!(config.figure.height, 600);
    assert_eq!(config.kneading_limit, 50);
    assert_eq!(config.iqr_factor, 1.5);
}

#[test]
fn config_rejects_degenerate_values() {
    let dir = tempdir().expect("tmp dir");
    let path = dir.path().join("render.yaml");
    fs::write(&path, "figure:\n  width: 0\n").expect("write yaml");
    let err = RenderConfig::load(&path).expect_err("zero width");
    assert_eq!(err.info().code, "C002");

    fs::write(&path, "iqr_factor: -1.0\n").expect("write yaml");
    let err = RenderConfig::load(&path).expect_err("negative factor");
    assert!(matches!(err, LmxError::Config(_)));

    fs::write(&path, "figure: [1, 2]\n").expect("write yaml");
    let err = RenderConfig::load(&path).expect_err("bad shape");
    assert_eq!(err.info().code, "C001");
}

#[test]
fn summary_serializes_for_reports() {
    let mut log = PhaseSampleLog::new();
    log.inflationary = vec![1, 2, 3, 4, 5, 100];
    let report = summarize_phases(&log, &RenderConfig::default());
    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["inflationary"]["phase"], "inflationary");
    assert_eq!(json["inflationary"]["outliers"], 1);
    assert!(json["kneading"]["box_summary"].is_null());
}
