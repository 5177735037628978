//! Chart rendering for local-mixing diagnostics.

pub mod charts;
pub mod config;
pub mod figure;
pub mod phases;
pub mod weights;

pub use charts::{BoxChart, LineChart, ScatterChart};
pub use config::{FigureConfig, ImageFormat, RenderConfig};
pub use figure::{create_output_dir, Chart, Figure};
pub use phases::{
    phase_window, render_phase_report, summarize_phases, PhaseReport, PhaseSummary,
    PHASE_IMAGE_STEMS,
};
pub use weights::render_weight_series;
