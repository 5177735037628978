use serde::{Deserialize, Serialize};

use crate::quartiles::{sorted_values, Fences, Quartiles};
use crate::Sample;

/// Conventional Tukey fence multiplier.
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Counts values outside `[q1 - 1.5 iqr, q3 + 1.5 iqr]`.
///
/// An empty sample has no outliers.
pub fn count_outliers<T: Sample>(samples: &[T]) -> usize {
    count_outliers_with(samples, DEFAULT_IQR_FACTOR)
}

/// Counts values outside the fences built with `factor`.
pub fn count_outliers_with<T: Sample>(samples: &[T], factor: f64) -> usize {
    let Some(quartiles) = Quartiles::from_samples(samples) else {
        return 0;
    };
    let fences = Fences::from_quartiles(&quartiles, factor);
    samples
        .iter()
        .filter(|value| fences.is_outlier(value.as_f64()))
        .count()
}

/// Everything needed to draw a box-and-whisker glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    /// Number of samples summarised.
    pub count: usize,
    /// Quartiles of the sample.
    pub quartiles: Quartiles,
    /// Outlier fences.
    pub fences: Fences,
    /// Smallest sample inside the fences.
    pub whisker_low: f64,
    /// Largest sample inside the fences.
    pub whisker_high: f64,
    /// Samples outside the fences, in input order.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarises `samples`, or returns `None` when the sample is empty.
    pub fn from_samples<T: Sample>(samples: &[T], factor: f64) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sorted = sorted_values(samples);
        let quartiles = Quartiles::from_sorted(&sorted);
        let fences = Fences::from_quartiles(&quartiles, factor);
        // At least one sample always lies between the fences.
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|value| !fences.is_outlier(*value))
            .unwrap_or(quartiles.q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|value| !fences.is_outlier(*value))
            .unwrap_or(quartiles.q3);
        let outliers = samples
            .iter()
            .map(|value| value.as_f64())
            .filter(|value| fences.is_outlier(*value))
            .collect();
        Some(Self {
            count: samples.len(),
            quartiles,
            fences,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Number of samples outside the fences.
    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    /// Smallest and largest value drawn (whiskers and outliers).
    pub fn extent(&self) -> (f64, f64) {
        self.outliers.iter().fold(
            (self.whisker_low, self.whisker_high),
            |(low, high), value| (low.min(*value), high.max(*value)),
        )
    }
}
