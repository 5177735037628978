use std::path::{Path, PathBuf};

use lmx_core::{LmxError, Phase, PhaseSampleLog};
use lmx_stat::{count_outliers_with, BoxSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::{BoxChart, ScatterChart};
use crate::config::RenderConfig;
use crate::figure::{create_output_dir, Figure};

/// File stems of the four phase images, in the order they are written.
pub const PHASE_IMAGE_STEMS: [&str; 4] = [
    "percentiles_outliers_inflationary",
    "percentiles_outliers_kneading",
    "n_circuits_sampled_over_steps_inflationary",
    "n_circuits_sampled_over_steps_kneading",
];

/// Statistics of the samples charted for one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    /// Phase described.
    pub phase: Phase,
    /// Samples found in the log.
    pub samples_total: usize,
    /// Samples charted and analysed after truncation.
    pub samples_used: usize,
    /// Outliers among the analysed samples.
    pub outliers: usize,
    /// Box-plot statistics, absent for an empty phase.
    pub box_summary: Option<BoxSummary>,
}

/// Per-phase statistics plus the images written for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseReport {
    /// Inflationary statistics.
    pub inflationary: PhaseSummary,
    /// Kneading statistics.
    pub kneading: PhaseSummary,
    /// Images written, empty when only summarised.
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

impl PhaseReport {
    /// Summary of `phase`.
    pub fn summary(&self, phase: Phase) -> &PhaseSummary {
        match phase {
            Phase::Inflationary => &self.inflationary,
            Phase::Kneading => &self.kneading,
        }
    }
}

/// Samples of `phase` that are charted: all inflationary samples, and at most
/// `kneading_limit` leading kneading samples.
pub fn phase_window<'a>(log: &'a PhaseSampleLog, phase: Phase, config: &RenderConfig) -> &'a [u64] {
    match phase {
        Phase::Inflationary => log.samples(phase),
        Phase::Kneading => log.truncated(phase, config.kneading_limit),
    }
}

fn summarize_phase(log: &PhaseSampleLog, phase: Phase, config: &RenderConfig) -> PhaseSummary {
    let window = phase_window(log, phase, config);
    PhaseSummary {
        phase,
        samples_total: log.len(phase),
        samples_used: window.len(),
        outliers: count_outliers_with(window, config.iqr_factor),
        box_summary: BoxSummary::from_samples(window, config.iqr_factor),
    }
}

/// Computes the per-phase statistics without drawing anything.
pub fn summarize_phases(log: &PhaseSampleLog, config: &RenderConfig) -> PhaseReport {
    PhaseReport {
        inflationary: summarize_phase(log, Phase::Inflationary, config),
        kneading: summarize_phase(log, Phase::Kneading, config),
        images: Vec::new(),
    }
}

/// Writes the box plots and step scatter plots of both phases into `out_dir`.
pub fn render_phase_report(
    log: &PhaseSampleLog,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<PhaseReport, LmxError> {
    create_output_dir(out_dir)?;
    let mut report = summarize_phases(log, config);
    let [box_inflationary, box_kneading, steps_inflationary, steps_kneading] = PHASE_IMAGE_STEMS;

    for (phase, stem) in [
        (Phase::Inflationary, box_inflationary),
        (Phase::Kneading, box_kneading),
    ] {
        let title = format!(
            "Percentiles and Outliers of n_circuits_sampled ({})",
            phase.label()
        );
        let chart = BoxChart {
            title: &title,
            label: phase.label(),
            y_desc: "n_circuits_sampled",
            summary: report.summary(phase).box_summary.as_ref(),
        };
        let path = Figure::new(out_dir, stem, &config.figure).save(&chart)?;
        report.images.push(path);
    }

    for (phase, stem) in [
        (Phase::Inflationary, steps_inflationary),
        (Phase::Kneading, steps_kneading),
    ] {
        let title = format!("n_circuits_sampled Over Steps ({})", phase.label());
        let chart = ScatterChart {
            title: &title,
            label: phase.label(),
            samples: phase_window(log, phase, config),
        };
        let path = Figure::new(out_dir, stem, &config.figure).save(&chart)?;
        report.images.push(path);
    }

    debug!(
        inflationary = report.inflationary.samples_used,
        kneading = report.kneading.samples_used,
        dir = %out_dir.display(),
        "phase report rendered"
    );
    Ok(report)
}
