// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use inform::{InformError, active_info, active_info_ensemble};
use ndarray::{Array1, Array2, array};
use rstest::rstest;

use crate::test_helpers::{generate_random_series, init_logger};

#[rstest]
#[case(0, 2)]
#[case(1, 2)]
#[case(2, 2)]
#[case(3, 2)]
#[case(3, 3)]
#[case(4, 3)]
fn series_too_short(#[case] len: usize, #[case] k: usize) {
    let series: Array1<i32> = Array1::zeros(len);
    assert!(matches!(
        active_info(&series, k, 2),
        Err(InformError::InvalidArgument(_))
    ));
}

#[test]
fn shortest_valid_series() {
    let series = array![0, 1, 1, 0];
    assert!(active_info(&series, 2, 2).is_ok());
}

#[test]
fn invalid_parameters() {
    let series = array![1, 1, 0, 0, 1, 0, 0, 1];
    assert!(matches!(active_info(&series, 0, 2), Err(InformError::InvalidArgument(_))));
    assert!(matches!(active_info(&series, 2, 1), Err(InformError::InvalidArgument(_))));
    // Symbol 2 does not belong to a binary alphabet.
    let series = array![1, 2, 0, 0, 1, 0, 0, 1];
    assert!(matches!(active_info(&series, 2, 2), Err(InformError::InvalidArgument(_))));
    let negative = array![1, -1, 0, 0, 1, 0, 0, 1];
    assert!(matches!(active_info(&negative, 2, 2), Err(InformError::InvalidArgument(_))));
}

#[test]
fn oversized_history() {
    let series = generate_random_series(40, 2, 1);
    assert!(matches!(active_info(&series, 26, 2), Err(InformError::InvalidArgument(_))));
    let series = generate_random_series(40, 4, 1);
    assert!(matches!(active_info(&series, 13, 4), Err(InformError::InvalidArgument(_))));
}

#[test]
fn oversized_joint_state() {
    // The 24-bit history fits, but history plus future needs 36 bits.
    let series = array![0, 1, 2, 1];
    assert!(matches!(active_info(&series, 2, 1 << 12), Err(InformError::InvalidArgument(_))));
    let ensemble = array![[0, 1, 2, 1], [3, 2, 1, 0]];
    assert!(matches!(
        active_info_ensemble(&ensemble, 2, 1 << 12),
        Err(InformError::InvalidArgument(_))
    ));
    // Wide alphabet within the cap: 16 + 4 bits.
    let series = generate_random_series(200, 16, 4);
    assert!(active_info(&series, 4, 16).is_ok());
}

#[test]
fn single_series() {
    init_logger();
    let series = array![1, 1, 0, 0, 1, 0, 0, 1];
    assert_abs_diff_eq!(active_info(&series, 2, 2).unwrap(), 0.918296, epsilon = 1e-6);

    let series = array![0, 0, 0, 1, 0, 0, 0, 1];
    assert_abs_diff_eq!(active_info(&series, 2, 2).unwrap(), 0.251629, epsilon = 1e-6);
}

#[test]
fn constant_series_stores_nothing() {
    let series: Array1<i32> = Array1::ones(20);
    assert_abs_diff_eq!(active_info(&series, 3, 2).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn periodic_series_stores_its_phase() {
    // Period three over three symbols: the history fixes the next symbol.
    let series: Array1<i32> = (0..301).map(|t| t % 3).collect();
    assert_abs_diff_eq!(active_info(&series, 1, 3).unwrap(), 3f64.log2(), epsilon = 1e-12);
}

#[test]
fn accepts_slices_and_views() {
    let data = vec![1, 1, 0, 0, 1, 0, 0, 1];
    let from_slice = active_info(data.as_slice(), 2, 2).unwrap();
    let array = Array1::from(data);
    assert_eq!(from_slice, active_info(array.view(), 2, 2).unwrap());
}

#[test]
fn ensemble() {
    init_logger();
    let series = array![[1, 1, 0, 0, 1, 0, 0, 1], [0, 0, 0, 1, 0, 0, 0, 1]];
    assert_abs_diff_eq!(active_info_ensemble(&series, 2, 2).unwrap(), 0.459148, epsilon = 1e-6);
}

#[test]
fn ensemble_of_one_matches_single_series() {
    let single = generate_random_series(200, 3, 99);
    let ensemble = single.clone().insert_axis(ndarray::Axis(0));
    assert_eq!(
        active_info(&single, 2, 3).unwrap(),
        active_info_ensemble(&ensemble, 2, 3).unwrap()
    );
}

#[test]
fn ensemble_errors() {
    let empty: Array2<i32> = Array2::zeros((0, 8));
    assert!(matches!(active_info_ensemble(&empty, 2, 2), Err(InformError::InvalidArgument(_))));
    let short: Array2<i32> = Array2::zeros((3, 3));
    assert!(matches!(active_info_ensemble(&short, 2, 2), Err(InformError::InvalidArgument(_))));
    let bad = array![[0, 1, 0, 1], [0, 1, 3, 1]];
    assert!(matches!(active_info_ensemble(&bad, 1, 2), Err(InformError::InvalidArgument(_))));
}

#[test]
fn bounded_by_history_and_alphabet() {
    for seed in 0..5 {
        let series = generate_random_series(1000, 4, seed);
        let ai = active_info(&series, 2, 4).unwrap();
        assert!(ai >= -1e-12);
        assert!(ai <= 2.0 + 1e-12);
    }
}
