use std::fs;

use lmx_cli::commands::hamming_weight::{self, HammingWeightArgs};
use lmx_cli::commands::replacement_times::{self, ReplacementTimesArgs};
use tempfile::tempdir;

const TRACE: &str = "\
Inflationary, SUCCESS: n_gates = 12, n_circuits_sampled = 5, max_candidate_dist = 3, time = 10
Inflationary, SUCCESS: n_gates = 13, n_circuits_sampled = 7, max_candidate_dist = 3, time = 11
Kneading, SUCCESS: n_gates = 40, n_circuits_sampled = 3, max_candidate_dist = 4, time = 12
Kneading: Search has failed 100 times in a row, n_circuits_sampled = 99
Kneading, SUCCESS: n_gates = 41, n_circuits_sampled = 4, max_candidate_dist = 4, time = 13
";

#[test]
fn hamming_weight_writes_one_image_per_binary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("d.json");
    fs::write(
        &input,
        r#"{"results": {"alpha": [[1, 2, 3], [3, 2, 1]], "beta": [[4], [5, 6]]}}"#,
    )
    .unwrap();
    let out = dir.path().join("plots");

    hamming_weight::run(&HammingWeightArgs {
        input_file: input,
        output_folder: out.clone(),
        config: None,
    })
    .unwrap();

    assert!(out.join("alpha.png").is_file());
    assert!(out.join("beta.png").is_file());
}

#[test]
fn hamming_weight_rejects_missing_results() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("d.json");
    fs::write(&input, r#"{"other": {}}"#).unwrap();

    let err = hamming_weight::run(&HammingWeightArgs {
        input_file: input,
        output_folder: dir.path().join("plots"),
        config: None,
    })
    .unwrap_err();
    assert!(err.to_string().contains("W001"), "{err}");
}

#[test]
fn replacement_times_renders_and_reports() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("trace.log");
    fs::write(&log, TRACE).unwrap();
    let out = dir.path().join("phases");

    let mut args = ReplacementTimesArgs::new(&log, &out);
    args.summary = true;
    let report = replacement_times::run(&args).unwrap();

    assert_eq!(report.inflationary.samples_used, 2);
    assert_eq!(report.kneading.samples_used, 2);
    assert_eq!(report.inflationary.outliers, 0);
    assert_eq!(report.kneading.outliers, 0);
    assert_eq!(report.images.len(), 4);
    for image in &report.images {
        assert!(image.is_file(), "missing {}", image.display());
    }

    let summary: serde_json::Value =
        serde_json::from_slice(&fs::read(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["scan"]["accepted_inflationary"], 2);
    assert_eq!(summary["scan"]["accepted_kneading"], 2);
    assert_eq!(summary["scan"]["ignored"], 1);
    assert!(summary["scan_error"].is_null());
}

#[test]
fn replacement_times_tolerates_missing_log() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("phases");

    let report =
        replacement_times::run(&ReplacementTimesArgs::new(dir.path().join("absent.log"), &out))
            .unwrap();

    assert_eq!(report.inflationary.samples_total, 0);
    assert_eq!(report.kneading.samples_total, 0);
    assert_eq!(report.images.len(), 4);
}

#[test]
fn replacement_times_honours_config_file() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("trace.log");
    fs::write(&log, TRACE).unwrap();
    let config = dir.path().join("render.yaml");
    fs::write(&config, "figure:\n  format: svg\nkneading_limit: 1\n").unwrap();
    let out = dir.path().join("phases");

    let mut args = ReplacementTimesArgs::new(&log, &out);
    args.config = Some(config);
    let report = replacement_times::run(&args).unwrap();

    assert_eq!(report.kneading.samples_total, 2);
    assert_eq!(report.kneading.samples_used, 1);
    assert!(report
        .images
        .iter()
        .all(|image| image.extension().is_some_and(|ext| ext == "svg")));
}
