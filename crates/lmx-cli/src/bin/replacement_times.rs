use std::error::Error;
use std::ffi::OsString;
use std::process;

use lmx_cli::commands::replacement_times::{self, ReplacementTimesArgs, USAGE};
use lmx_cli::logging;

fn main() -> Result<(), Box<dyn Error>> {
    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    let Ok([logfile_path, output_directory]) = <[OsString; 2]>::try_from(argv) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    logging::init();
    replacement_times::run(&ReplacementTimesArgs::new(logfile_path, output_directory))?;
    Ok(())
}
