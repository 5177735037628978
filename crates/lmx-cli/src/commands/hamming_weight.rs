use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lmx_core::WeightReport;
use lmx_plot::render_weight_series;

use super::load_render_config;

#[derive(Args, Debug)]
pub struct HammingWeightArgs {
    /// Distinguisher output (e.g. d.json) with a top-level `results` map.
    pub input_file: PathBuf,
    /// Folder the per-binary plots are written to; created if missing.
    pub output_folder: PathBuf,
    /// YAML render configuration overriding figure size and format.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &HammingWeightArgs) -> Result<(), Box<dyn Error>> {
    let config = load_render_config(args.config.as_deref())?;
    let report = WeightReport::load(&args.input_file)?;
    render_weight_series(&report.records(), &args.output_folder, &config, |path| {
        println!("Plot saved to {}", path.display());
    })?;
    Ok(())
}
