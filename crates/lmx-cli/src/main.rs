use std::error::Error;

use clap::{Parser, Subcommand};
use lmx_cli::commands::{
    hamming_weight::{self, HammingWeightArgs},
    replacement_times::{self, ReplacementTimesArgs},
};
use lmx_cli::logging;

#[derive(Parser, Debug)]
#[command(name = "lmx", about = "Local-mixing diagnostics plotter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot per-gate hamming weights of both circuits for every binary.
    HammingWeight(HammingWeightArgs),
    /// Plot n_circuits_sampled distributions per search phase and count outliers.
    ReplacementTimes(ReplacementTimesArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::HammingWeight(args) => hamming_weight::run(&args),
        Command::ReplacementTimes(args) => replacement_times::run(&args).map(|_| ()),
    }
}
