//! End-to-end tests of the public description API.

use descriptive::{
    checked_mode_set, describe, mean, median, mode_set, mode_set_info, mode_single,
    standard_deviation, Descriptive, StatsError,
};

/// The textbook series in its original (unsorted) order.
const TEXTBOOK: [f64; 8] = [56.5, 27.9, 32.4, 59.23, 44.87, 41.0, 39.7, 49.98];

#[test]
fn textbook_series_summary() {
    let summary = describe(&TEXTBOOK).unwrap();

    assert_eq!(summary.len, 8);
    assert!((summary.mean - 43.9475).abs() < 1e-9);
    assert!((summary.median - 42.935).abs() < 1e-12);
    // All values distinct: the modal set degenerates to the whole series.
    assert_eq!(summary.mode_count, 8);
    assert_eq!(summary.mode_repeat_count, 1);
    assert!(!summary.has_repeats());
    assert_eq!(summary.modes.as_ref().map(Vec::len), Some(8));
}

#[test]
fn bimodal_series_summary() {
    let summary = describe(&[1.0, 1.0, 2.0, 3.0, 3.0, 5.0]).unwrap();

    assert_eq!(summary.mode, 1.0); // first-encountered tie wins
    assert_eq!(summary.mode_count, 2);
    assert_eq!(summary.mode_repeat_count, 2);
    assert_eq!(summary.modes.as_deref(), Some([1.0, 3.0].as_slice()));
    assert!(summary.is_multimodal());
}

#[test]
fn single_element_summary() {
    let summary = describe(&[7.0]).unwrap();

    assert_eq!(summary.mean, 7.0);
    assert_eq!(summary.std_dev, 0.0);
    assert_eq!(summary.median, 7.0);
    assert_eq!((summary.mode_count, summary.mode_repeat_count), (1, 1));
}

#[test]
fn kernels_agree_with_the_engine() {
    let mut sorted = TEXTBOOK;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let summary = describe(&TEXTBOOK).unwrap();
    let m = mean(&sorted);

    assert_eq!(summary.mean, m);
    assert_eq!(summary.std_dev, standard_deviation(&sorted, m));
    assert_eq!(summary.median, median(&sorted));
    assert_eq!(summary.mode, mode_single(&sorted));
    assert_eq!(
        (summary.mode_count, summary.mode_repeat_count),
        mode_set_info(&sorted)
    );
    assert_eq!(summary.modes.unwrap(), mode_set(&sorted, 1));
}

#[test]
fn empty_series_is_rejected_everywhere() {
    assert_eq!(describe::<f64>(&[]), Err(StatsError::EmptyInput));
    assert_eq!(checked_mode_set::<f64>(&[], 1), Err(StatsError::EmptyInput));
}

#[test]
fn non_finite_series_is_rejected() {
    let err = describe(&[1.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, StatsError::InvalidNumericValue(_)));
}

#[test]
fn assume_sorted_rejects_unsorted_input() {
    let processor = Descriptive::builder().assume_sorted().build().unwrap();
    assert_eq!(
        processor.describe(&TEXTBOOK),
        Err(StatsError::UnsortedInput { index: 1 })
    );
}

#[test]
fn skip_modes_leaves_metadata_intact() {
    let processor = Descriptive::builder().skip_modes().build().unwrap();
    let summary = processor.describe(&[2.0, 2.0, 9.0]).unwrap();

    assert_eq!(summary.modes, None);
    assert_eq!(summary.mode, 2.0);
    assert_eq!((summary.mode_count, summary.mode_repeat_count), (1, 2));
}

#[test]
fn checked_mode_set_round_trips_with_info() {
    let sorted = [1.0, 1.0, 2.0, 3.0, 3.0, 5.0];
    let (mode_count, repeat_count) = mode_set_info(&sorted);

    let modes = checked_mode_set(&sorted, repeat_count).unwrap();
    assert_eq!(modes.len(), mode_count);
    assert_eq!(modes, [1.0, 3.0]);
}
