#![deny(missing_docs)]
#![doc = "Robust spread statistics: percentiles, quartiles, IQR fences and outliers."]

/// Quartile and fence computation.
pub mod quartiles;
/// Outlier counting and box-plot summaries.
pub mod outliers;

pub use outliers::{count_outliers, count_outliers_with, BoxSummary, DEFAULT_IQR_FACTOR};
pub use quartiles::{percentile, Fences, Quartiles};

/// Numeric sample that can be summarised as an `f64`.
pub trait Sample: Copy {
    /// Converts the sample to `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u32, u64, usize, i64, f64);
