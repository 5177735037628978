//! Hamming-weight series produced by the circuit distinguisher.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LmxError};

/// Paired weight sequences for one input binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightSeriesRecord {
    /// Binary name; also the stem of the rendered image.
    pub binary: String,
    /// Hamming weight per gate index for the first circuit.
    pub circuit_one: Vec<u64>,
    /// Hamming weight per gate index for the second circuit.
    pub circuit_two: Vec<u64>,
}

impl WeightSeriesRecord {
    /// Length of the longer of the two sequences.
    pub fn max_len(&self) -> usize {
        self.circuit_one.len().max(self.circuit_two.len())
    }

    /// Largest weight across both sequences, if any.
    pub fn max_weight(&self) -> Option<u64> {
        self.circuit_one
            .iter()
            .chain(self.circuit_two.iter())
            .copied()
            .max()
    }
}

/// Distinguisher output document: `{"results": {<binary>: [[..], [..]]}}`.
///
/// Key order of the source document is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightReport {
    /// Weight sequence pairs keyed by binary name.
    pub results: IndexMap<String, (Vec<u64>, Vec<u64>)>,
}

impl WeightReport {
    /// Parses a report from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, LmxError> {
        serde_json::from_str(raw).map_err(|err| {
            LmxError::Schema(
                ErrorInfo::new("W001", err.to_string())
                    .with_context("line", err.line().to_string())
                    .with_context("column", err.column().to_string())
                    .with_hint("expected {\"results\": {<name>: [[int, ...], [int, ...]]}}"),
            )
        })
    }

    /// Reads and parses the report stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LmxError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| LmxError::io("W000", path, &err))?;
        Self::from_json_str(&raw).map_err(|err| match err {
            LmxError::Schema(info) => LmxError::Schema(info.with_path(path)),
            other => other,
        })
    }

    /// Number of binaries in the report.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when the report holds no binaries.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns one record per binary, in document order.
    pub fn records(&self) -> Vec<WeightSeriesRecord> {
        self.results
            .iter()
            .map(|(binary, (one, two))| WeightSeriesRecord {
                binary: binary.clone(),
                circuit_one: one.clone(),
                circuit_two: two.clone(),
            })
            .collect()
    }
}
