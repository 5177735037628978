use serde::{Deserialize, Serialize};

use crate::Sample;

/// First quartile, median and third quartile of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles with linear interpolation between closest ranks.
    ///
    /// Returns `None` for an empty sample.
    pub fn from_samples<T: Sample>(samples: &[T]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sorted = sorted_values(samples);
        Some(Self::from_sorted(&sorted))
    }

    /// Computes quartiles of values already sorted ascending.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            q1: percentile(sorted, 0.25),
            median: percentile(sorted, 0.5),
            q3: percentile(sorted, 0.75),
        }
    }

    /// Interquartile range `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Closed interval outside of which a value counts as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    /// `q1 - factor * iqr`.
    pub lower: f64,
    /// `q3 + factor * iqr`.
    pub upper: f64,
}

impl Fences {
    /// Builds fences `factor` interquartile ranges beyond the quartiles.
    pub fn from_quartiles(quartiles: &Quartiles, factor: f64) -> Self {
        let iqr = quartiles.iqr();
        Self {
            lower: quartiles.q1 - factor * iqr,
            upper: quartiles.q3 + factor * iqr,
        }
    }

    /// Values equal to a fence are not outliers.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Percentile of ascending `values` at `quantile` in `[0, 1]`.
///
/// Interpolates linearly between the two closest ranks at position
/// `quantile * (len - 1)`. Returns `NaN` for an empty slice.
pub fn percentile(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let position = quantile.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        values[lower]
    } else {
        let weight = position - lower as f64;
        values[lower] + (values[upper] - values[lower]) * weight
    }
}

pub(crate) fn sorted_values<T: Sample>(samples: &[T]) -> Vec<f64> {
    let mut values: Vec<f64> = samples.iter().map(|value| value.as_f64()).collect();
    values.sort_by(f64::total_cmp);
    values
}
