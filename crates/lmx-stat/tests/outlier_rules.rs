use lmx_stat::{count_outliers, count_outliers_with, percentile, BoxSummary, Fences, Quartiles};
use proptest::prelude::*;

#[test]
fn single_far_value_is_flagged() {
    let samples: Vec<u64> = vec![1, 2, 3, 4, 5, 100];
    assert_eq!(count_outliers(&samples), 1);

    let quartiles = Quartiles::from_samples(&samples).expect("quartiles");
    assert!((quartiles.q1 - 2.25).abs() < 1e-12);
    assert!((quartiles.median - 3.5).abs() < 1e-12);
    assert!((quartiles.q3 - 4.75).abs() < 1e-12);
    let fences = Fences::from_quartiles(&quartiles, 1.5);
    assert!((fences.lower + 1.5).abs() < 1e-12);
    assert!((fences.upper - 8.5).abs() < 1e-12);
}

#[test]
fn percentile_interpolates_linearly() {
    let sorted = [10.0, 20.0, 30.0, 40.0];
    assert_eq!(percentile(&sorted, 0.0), 10.0);
    assert_eq!(percentile(&sorted, 1.0), 40.0);
    assert!((percentile(&sorted, 0.5) - 25.0).abs() < 1e-12);
    assert!((percentile(&sorted, 0.25) - 17.5).abs() < 1e-12);
    assert!(percentile(&[], 0.5).is_nan());
}

#[test]
fn fence_values_are_not_outliers() {
    let samples: Vec<u64> = vec![2, 2, 3, 4, 4, 7];
    let quartiles = Quartiles::from_samples(&samples).expect("quartiles");
    let fences = Fences::from_quartiles(&quartiles, 1.5);
    assert!(!fences.is_outlier(fences.upper));
    assert!(!fences.is_outlier(fences.lower));
    assert!(fences.is_outlier(fences.upper + 1e-9));
    assert_eq!(count_outliers(&samples), count_outliers_with(&samples, 1.5));
}

#[test]
fn empty_sample_has_no_outliers() {
    let empty: Vec<u64> = Vec::new();
    assert_eq!(count_outliers(&empty), 0);
    assert!(Quartiles::from_samples(&empty).is_none());
    assert!(BoxSummary::from_samples(&empty, 1.5).is_none());
}

#[test]
fn box_summary_whiskers_stop_at_data() {
    let samples: Vec<u64> = vec![100, 1, 2, 3, 4, 5, 0];
    let summary = BoxSummary::from_samples(&samples, 1.5).expect("summary");
    assert_eq!(summary.count, 7);
    assert_eq!(summary.whisker_low, 0.0);
    assert_eq!(summary.whisker_high, 5.0);
    assert_eq!(summary.outliers, vec![100.0]);
    assert_eq!(summary.outlier_count(), count_outliers(&samples));
    assert_eq!(summary.extent(), (0.0, 100.0));
}

#[test]
fn box_summary_serializes() {
    let summary = BoxSummary::from_samples(&[1u64, 2, 3], 1.5).expect("summary");
    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["count"], 3);
    assert_eq!(json["quartiles"]["median"], 2.0);
}

proptest! {
    #[test]
    fn constant_samples_have_zero_iqr(value in 0u64..1_000_000, len in 1usize..200) {
        let samples = vec![value; len];
        let quartiles = Quartiles::from_samples(&samples).expect("quartiles");
        prop_assert_eq!(quartiles.iqr(), 0.0);
        prop_assert_eq!(count_outliers(&samples), 0);
    }

    #[test]
    fn box_summary_agrees_with_counter(samples in prop::collection::vec(0u64..10_000, 1..300)) {
        let count = count_outliers(&samples);
        let summary = BoxSummary::from_samples(&samples, 1.5).expect("summary");
        prop_assert_eq!(summary.outlier_count(), count);
        prop_assert!(summary.whisker_low <= summary.whisker_high);
        prop_assert!(summary.whisker_low >= summary.fences.lower);
        prop_assert!(summary.whisker_high <= summary.fences.upper);
        for value in &summary.outliers {
            prop_assert!(summary.fences.is_outlier(*value));
        }
    }
}
