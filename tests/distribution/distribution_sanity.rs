// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use inform::{Distribution, InformError};
use ndarray::array;

#[test]
fn size_constructor() {
    let dist = Distribution::new(5).unwrap();
    assert!(!dist.is_valid());
    assert_eq!(dist.size(), 5);
    assert_eq!(dist.count(), 0);

    assert!(matches!(
        Distribution::new(0),
        Err(InformError::InvalidArgument(_))
    ));
}

#[test]
fn counts_constructor() {
    let dist = Distribution::from_counts(vec![1u64, 2, 3]).unwrap();
    assert!(dist.is_valid());
    assert_eq!(dist.size(), 3);
    assert_eq!(dist.count(), 6);

    let from_array = Distribution::from_counts(array![1u64, 2, 3]).unwrap();
    assert_eq!(from_array, dist);

    let from_slice = Distribution::try_from(&[1u64, 2, 3][..]).unwrap();
    assert_eq!(from_slice, dist);

    assert!(matches!(
        Distribution::from_counts(Vec::<u64>::new()),
        Err(InformError::InvalidArgument(_))
    ));
    assert!(Distribution::try_from(Vec::<u64>::new()).is_err());
}

#[test]
fn copy_constructor() {
    let mut original = Distribution::from_counts(vec![4u64, 0, 1]).unwrap();
    let copy = original.clone();
    original.tic(1, 3).unwrap();
    assert_eq!(copy.get(1).unwrap(), 0);
    assert_eq!(copy.count(), 5);
    assert_eq!(original.count(), 8);
}

#[test]
fn tic() {
    let mut dist = Distribution::new(2).unwrap();
    assert!(!dist.is_valid());

    assert_eq!(dist.tic_one(0).unwrap(), 1);
    assert_eq!(dist.count(), 1);
    assert!(dist.is_valid());

    assert_eq!(dist.tic_one(0).unwrap(), 2);
    assert_eq!(dist.count(), 2);

    assert_eq!(dist.tic(1, 2).unwrap(), 2);
    assert_eq!(dist.count(), 4);

    assert_eq!(dist.tic(1, 0).unwrap(), 2);
    assert_eq!(dist.count(), 4);

    assert_eq!(
        dist.tic_one(dist.size()),
        Err(InformError::OutOfRange { event: 2, size: 2 })
    );
    assert_eq!(dist.count(), 4);
}

#[test]
fn sample_size_overflow() {
    assert!(matches!(
        Distribution::from_counts(vec![u64::MAX, 1]),
        Err(InformError::InvalidArgument(_))
    ));
    let full = Distribution::from_counts(vec![u64::MAX, 0]).unwrap();
    assert_eq!(full.count(), u64::MAX);

    let mut dist = Distribution::from_counts(vec![1u64, 0]).unwrap();
    assert!(matches!(
        dist.tic(1, u64::MAX),
        Err(InformError::InvalidArgument(_))
    ));
    assert_eq!(dist.get(1).unwrap(), 0);
    assert_eq!(dist.count(), 1);

    assert!(matches!(
        dist.set(1, u64::MAX),
        Err(InformError::InvalidArgument(_))
    ));
    assert_eq!(dist.get(1).unwrap(), 0);
    assert_eq!(dist.count(), 1);

    // Replacing the only non-zero count frees the whole range.
    assert_eq!(dist.set(0, u64::MAX).unwrap(), u64::MAX);
    assert_eq!(dist.count(), u64::MAX);
}

#[test]
fn set() {
    let mut dist = Distribution::new(2).unwrap();
    assert!(!dist.is_valid());

    assert_eq!(dist.set(0, 2).unwrap(), 2);
    assert_eq!(dist.count(), 2);
    assert!(dist.is_valid());

    assert_eq!(dist.set(0, 0).unwrap(), 0);
    assert_eq!(dist.count(), 0);
    assert!(!dist.is_valid());

    assert_eq!(dist.set(0, 4).unwrap(), 4);
    assert_eq!(dist.set(1, 2).unwrap(), 2);
    assert_eq!(dist.count(), 6);
    assert_eq!(dist.set(0, 0).unwrap(), 0);
    assert_eq!(dist.count(), 2);
    assert!(dist.is_valid());

    assert!(matches!(
        dist.set(dist.size(), 5),
        Err(InformError::OutOfRange { .. })
    ));
    assert_eq!(dist.count(), 2);
}

#[test]
fn get() {
    let mut dist = Distribution::new(2).unwrap();
    assert_eq!(dist.get(0).unwrap(), 0);
    assert_eq!(dist.get(1).unwrap(), 0);

    dist.set(0, 5).unwrap();
    dist.set(1, 2).unwrap();
    assert_eq!(dist.get(0).unwrap(), 5);
    assert_eq!(dist.get(1).unwrap(), 2);

    assert!(matches!(dist.get(2), Err(InformError::OutOfRange { .. })));
}

#[test]
fn probability() {
    let mut dist = Distribution::new(2).unwrap();
    assert!(dist.probability(0).unwrap().is_nan());
    assert!(dist.probability(1).unwrap().is_nan());

    dist.tic_one(0).unwrap();
    assert_abs_diff_eq!(dist.probability(0).unwrap(), 1.0);
    assert_abs_diff_eq!(dist.probability(1).unwrap(), 0.0);

    dist.tic_one(1).unwrap();
    assert_abs_diff_eq!(dist.probability(0).unwrap(), 0.5);
    assert_abs_diff_eq!(dist.probability(1).unwrap(), 0.5);

    dist.tic_one(1).unwrap();
    assert_abs_diff_eq!(dist.probability(0).unwrap(), 1.0 / 3.0);
    assert_abs_diff_eq!(dist.probability(1).unwrap(), 2.0 / 3.0);

    dist.set(0, 4).unwrap();
    dist.set(1, 2).unwrap();
    assert_abs_diff_eq!(dist.probability(0).unwrap(), 2.0 / 3.0);
    assert_abs_diff_eq!(dist.probability(1).unwrap(), 1.0 / 3.0);

    assert!(matches!(
        dist.probability(dist.size()),
        Err(InformError::OutOfRange { .. })
    ));
}

#[test]
fn probabilities_iterator() {
    let mut dist = Distribution::new(5).unwrap();
    for i in 0..dist.size() {
        dist.set(i, i as u64 + 1).unwrap();
    }

    let collected: Vec<f64> = dist.probabilities().collect();
    assert_eq!(collected.len(), 5);
    for (i, &p) in collected.iter().enumerate() {
        assert_eq!(p, dist.probability(i).unwrap());
    }

    // Restartable: a second pass yields the same sequence.
    let again: Vec<f64> = (&dist).into_iter().collect();
    assert_eq!(again, collected);

    let array = dist.to_probabilities();
    assert_eq!(array.to_vec(), collected);
    assert_abs_diff_eq!(array.sum(), 1.0, epsilon = 1e-12);
}

#[test]
fn counts_view() {
    let dist = Distribution::from_counts(vec![3u64, 0, 7]).unwrap();
    assert_eq!(dist.counts(), array![3u64, 0, 7]);
}
