use std::error::Error;

use clap::Parser;
use lmx_cli::commands::hamming_weight::{self, HammingWeightArgs};
use lmx_cli::logging;

#[derive(Parser, Debug)]
#[command(name = "hamming_weight", about = "Plot Hamming weights from JSON data.")]
struct Cli {
    #[command(flatten)]
    args: HammingWeightArgs,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let cli = Cli::parse();
    hamming_weight::run(&cli.args)
}
