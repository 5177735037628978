#![deny(missing_docs)]
#![doc = "Core data types, loaders and the search-log scanner for local-mixing diagnostics."]

pub mod errors;
pub mod phase;
pub mod scan;
pub mod weights;

pub use errors::{ErrorInfo, LmxError, ScanError};
pub use phase::{Phase, PhaseSampleLog};
pub use scan::{
    classify_line, parse_log_file, scan_log_file, scan_reader, LineClass, LogScan, ScanStats,
    IGNORE_PHRASES, SAMPLE_FIELD,
};
pub use weights::{WeightReport, WeightSeriesRecord};
