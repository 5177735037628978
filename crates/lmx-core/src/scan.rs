//! Line-oriented scanner for local-mixing search logs.
//!
//! Each line is classified independently. Lines containing one of
//! [`IGNORE_PHRASES`] are dropped before any phase matching, phase keywords are
//! matched case-insensitively with the inflationary keyword taking priority,
//! and the sample value is read from the first `n_circuits_sampled = <digits>`
//! field on the line.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ScanError;
use crate::phase::{Phase, PhaseSampleLog};

/// Case-sensitive substrings marking summary lines that never carry samples.
pub const IGNORE_PHRASES: [&str; 3] = [
    "Search has failed 100 times in a row",
    "Total number of iterations:",
    "Number of failed attempts:",
];

/// Name of the field holding the sample count.
pub const SAMPLE_FIELD: &str = "n_circuits_sampled";

/// Outcome of classifying a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The line contains an ignore phrase.
    Ignored,
    /// The line belongs to a phase and carries a sample.
    Sample(Phase, u64),
    /// The line mentions a phase but has no sample field.
    MissingField(Phase),
    /// The sample field holds a value that does not fit in `u64`.
    Overflow(Phase),
    /// The line mentions neither phase.
    Unrelated,
}

/// Counters describing a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Lines read successfully.
    pub lines: usize,
    /// Lines skipped because of an ignore phrase.
    pub ignored: usize,
    /// Samples appended to the inflationary phase.
    pub accepted_inflationary: usize,
    /// Samples appended to the kneading phase.
    pub accepted_kneading: usize,
    /// Phase lines without a sample field.
    pub missing_field: usize,
    /// Sample values that overflowed `u64`.
    pub overflowed: usize,
    /// Lines matching no phase keyword.
    pub unrelated: usize,
}

/// Samples gathered from a log together with scan diagnostics.
#[derive(Debug, Default)]
pub struct LogScan {
    /// Samples accumulated before the scan finished or stopped.
    pub samples: PhaseSampleLog,
    /// Per-class line counters.
    pub stats: ScanStats,
    /// Failure that stopped the scan, if any.
    pub error: Option<ScanError>,
}

impl LogScan {
    /// Prints the failure that stopped the scan, if any, to stderr.
    pub fn report_error(&self) {
        if let Some(err) = &self.error {
            eprintln!("{err}");
        }
    }
}

/// Classifies one log line.
pub fn classify_line(line: &str) -> LineClass {
    if IGNORE_PHRASES.iter().any(|phrase| line.contains(phrase)) {
        return LineClass::Ignored;
    }
    let lowered = line.to_lowercase();
    let Some(phase) = Phase::ALL
        .into_iter()
        .find(|phase| lowered.contains(phase.keyword()))
    else {
        return LineClass::Unrelated;
    };
    match extract_sample(line) {
        Some(Some(value)) => LineClass::Sample(phase, value),
        Some(None) => LineClass::Overflow(phase),
        None => LineClass::MissingField(phase),
    }
}

/// Finds the first `n_circuits_sampled<ws>=<ws><digits>` occurrence.
///
/// Returns `None` when no occurrence matches and `Some(None)` when the digits
/// do not fit in a `u64`.
fn extract_sample(line: &str) -> Option<Option<u64>> {
    for (start, _) in line.match_indices(SAMPLE_FIELD) {
        let rest = line[start + SAMPLE_FIELD.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            return Some(rest[..digits].parse().ok());
        }
    }
    None
}

/// Scans `reader` line by line.
///
/// A read or decode failure stops the scan; samples collected up to that
/// point are kept and the failure is recorded in [`LogScan::error`].
pub fn scan_reader<R: BufRead>(reader: R) -> LogScan {
    let mut scan = LogScan::default();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(line = scan.stats.lines + 1, error = %err, "log scan stopped early");
                scan.error = Some(ScanError::Io(err));
                break;
            }
        };
        scan.stats.lines += 1;
        match classify_line(&line) {
            LineClass::Ignored => scan.stats.ignored += 1,
            LineClass::Sample(phase, value) => {
                scan.samples.push(phase, value);
                match phase {
                    Phase::Inflationary => scan.stats.accepted_inflationary += 1,
                    Phase::Kneading => scan.stats.accepted_kneading += 1,
                }
            }
            LineClass::MissingField(_) => scan.stats.missing_field += 1,
            LineClass::Overflow(phase) => {
                warn!(line = scan.stats.lines, %phase, "sample value overflows u64, skipped");
                scan.stats.overflowed += 1;
            }
            LineClass::Unrelated => scan.stats.unrelated += 1,
        }
    }
    debug!(
        lines = scan.stats.lines,
        ignored = scan.stats.ignored,
        inflationary = scan.samples.inflationary.len(),
        kneading = scan.samples.kneading.len(),
        "log scan finished"
    );
    scan
}

/// Opens and scans the log at `path`.
pub fn scan_log_file(path: impl AsRef<Path>) -> LogScan {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => scan_reader(BufReader::new(file)),
        Err(err) if err.kind() == ErrorKind::NotFound => LogScan {
            error: Some(ScanError::NotFound {
                path: path.to_path_buf(),
            }),
            ..LogScan::default()
        },
        Err(err) => LogScan {
            error: Some(ScanError::Io(err)),
            ..LogScan::default()
        },
    }
}

/// Parses the log at `path`, reporting any failure on stderr.
///
/// Never fails: a missing file yields an empty log and other errors yield the
/// samples read before the failure.
pub fn parse_log_file(path: impl AsRef<Path>) -> PhaseSampleLog {
    let scan = scan_log_file(path);
    scan.report_error();
    scan.samples
}
