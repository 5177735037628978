use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use lmx_core::{parse_log_file, scan_log_file, ScanStats};
use lmx_plot::{render_phase_report, PhaseReport};
use serde::Serialize;

use super::load_render_config;

pub const USAGE: &str = "Usage: replacement_times <logfile_path> <output_directory>";

#[derive(Args, Debug)]
pub struct ReplacementTimesArgs {
    /// Search trace log to scan for `n_circuits_sampled` values.
    pub logfile_path: PathBuf,
    /// Directory the four phase plots are written to; created if missing.
    pub output_directory: PathBuf,
    /// YAML render configuration overriding figure size, format and limits.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also write `summary.json` with per-phase statistics.
    #[arg(long)]
    pub summary: bool,
}

impl ReplacementTimesArgs {
    pub fn new(logfile_path: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            logfile_path: logfile_path.into(),
            output_directory: output_directory.into(),
            config: None,
            summary: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryFile<'a> {
    logfile: String,
    scan: ScanStats,
    scan_error: Option<String>,
    report: &'a PhaseReport,
}

pub fn run(args: &ReplacementTimesArgs) -> Result<PhaseReport, Box<dyn Error>> {
    let config = load_render_config(args.config.as_deref())?;

    if !args.summary {
        let samples = parse_log_file(&args.logfile_path);
        let report = render_phase_report(&samples, &args.output_directory, &config)?;
        print_outliers(&report);
        println!("Plots saved to {}", args.output_directory.display());
        return Ok(report);
    }

    let scan = scan_log_file(&args.logfile_path);
    scan.report_error();
    let report = render_phase_report(&scan.samples, &args.output_directory, &config)?;
    print_outliers(&report);

    let summary = SummaryFile {
        logfile: args.logfile_path.display().to_string(),
        scan: scan.stats,
        scan_error: scan.error.as_ref().map(ToString::to_string),
        report: &report,
    };
    fs::write(
        args.output_directory.join("summary.json"),
        serde_json::to_vec_pretty(&summary)?,
    )?;

    println!("Plots saved to {}", args.output_directory.display());
    Ok(report)
}

fn print_outliers(report: &PhaseReport) {
    println!(
        "Number of outliers in inflationary data: {}",
        report.inflationary.outliers
    );
    println!(
        "Number of outliers in kneading data: {}",
        report.kneading.outliers
    );
}
