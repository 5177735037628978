//! Search phases and the per-phase sample log.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Stage of the local-mixing search that emitted a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Inflationary stage (circuit grows).
    Inflationary,
    /// Kneading stage (circuit is mixed at constant size).
    Kneading,
}

impl Phase {
    /// Both phases in the order lines are matched against them.
    pub const ALL: [Phase; 2] = [Phase::Inflationary, Phase::Kneading];

    /// Lowercase keyword searched for (case-insensitively) in log lines.
    pub fn keyword(self) -> &'static str {
        match self {
            Phase::Inflationary => "inflationary",
            Phase::Kneading => "kneading",
        }
    }

    /// Title-case label used on charts and in reports.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inflationary => "Inflationary",
            Phase::Kneading => "Kneading",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `n_circuits_sampled` values extracted from a search log, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSampleLog {
    /// Samples recorded during the inflationary stage.
    pub inflationary: Vec<u64>,
    /// Samples recorded during the kneading stage.
    pub kneading: Vec<u64>,
}

impl PhaseSampleLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample to the sequence of `phase`.
    pub fn push(&mut self, phase: Phase, value: u64) {
        self.samples_mut(phase).push(value);
    }

    /// Returns every sample recorded for `phase`.
    pub fn samples(&self, phase: Phase) -> &[u64] {
        match phase {
            Phase::Inflationary => &self.inflationary,
            Phase::Kneading => &self.kneading,
        }
    }

    /// Returns at most the first `limit` samples recorded for `phase`.
    pub fn truncated(&self, phase: Phase, limit: usize) -> &[u64] {
        let samples = self.samples(phase);
        &samples[..samples.len().min(limit)]
    }

    /// Number of samples recorded for `phase`.
    pub fn len(&self, phase: Phase) -> usize {
        self.samples(phase).len()
    }

    /// Returns `true` when neither phase has any samples.
    pub fn is_empty(&self) -> bool {
        self.inflationary.is_empty() && self.kneading.is_empty()
    }

    fn samples_mut(&mut self, phase: Phase) -> &mut Vec<u64> {
        match phase {
            Phase::Inflationary => &mut self.inflationary,
            Phase::Kneading => &mut self.kneading,
        }
    }
}
