// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empirical frequency histogram over the events `{0, …, N-1}`.
//!
//! A [`Distribution`] is the numeric substrate every measure in this crate is
//! built on: observations are tallied with [`Distribution::tic`], and the
//! entropy functions reduce the resulting histogram to a scalar.

use ndarray::{Array1, ArrayView1};

use crate::error::{InformError, Result};

fn overflow() -> InformError {
    InformError::invalid("distribution: sample size overflows u64")
}

/// Histogram of event counts together with the running sample size.
///
/// Invariants: the histogram has at least one event, and `count()` is always
/// the sum of the per-event counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    histogram: Array1<u64>,
    sample_size: u64,
}

impl Distribution {
    /// Creates an all-zero distribution over `size` events.
    ///
    /// Fails with [`InformError::InvalidArgument`] if `size` is zero and with
    /// [`InformError::ResourceExhaustion`] if the histogram cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(InformError::invalid("distribution cannot have size 0"));
        }
        let mut histogram = Vec::new();
        histogram.try_reserve_exact(size)?;
        histogram.resize(size, 0);
        Ok(Self {
            histogram: Array1::from(histogram),
            sample_size: 0,
        })
    }

    /// Creates a distribution from explicit initial counts.
    ///
    /// Fails with [`InformError::InvalidArgument`] if `counts` is empty or
    /// its total does not fit in a `u64`.
    pub fn from_counts(counts: impl Into<Array1<u64>>) -> Result<Self> {
        let histogram = counts.into();
        if histogram.is_empty() {
            return Err(InformError::invalid("distribution cannot have size 0"));
        }
        let sample_size = histogram
            .iter()
            .try_fold(0u64, |total, &c| total.checked_add(c))
            .ok_or_else(overflow)?;
        Ok(Self {
            histogram,
            sample_size,
        })
    }

    /// A distribution is valid iff it has at least one event and a non-zero sample size.
    pub fn is_valid(&self) -> bool {
        self.size() != 0 && self.sample_size != 0
    }

    /// Number of events.
    pub fn size(&self) -> usize {
        self.histogram.len()
    }

    /// Total number of observations.
    pub fn count(&self) -> u64 {
        self.sample_size
    }

    /// Read-only view of the raw counts.
    pub fn counts(&self) -> ArrayView1<'_, u64> {
        self.histogram.view()
    }

    fn check_event(&self, event: usize) -> Result<()> {
        if event < self.size() {
            Ok(())
        } else {
            Err(InformError::OutOfRange {
                event,
                size: self.size(),
            })
        }
    }

    /// Adds `n` observations of `event` and returns its new count.
    ///
    /// Leaves the distribution untouched if the sample size would overflow.
    pub fn tic(&mut self, event: usize, n: u64) -> Result<u64> {
        self.check_event(event)?;
        // Every count is bounded by the total, so only the total can overflow.
        self.sample_size = self.sample_size.checked_add(n).ok_or_else(overflow)?;
        self.histogram[event] += n;
        Ok(self.histogram[event])
    }

    /// Adds a single observation of `event`.
    pub fn tic_one(&mut self, event: usize) -> Result<u64> {
        self.tic(event, 1)
    }

    /// Overwrites the count of `event` and returns `value`.
    ///
    /// Leaves the distribution untouched if the sample size would overflow.
    pub fn set(&mut self, event: usize, value: u64) -> Result<u64> {
        self.check_event(event)?;
        // sample_size >= old always holds, so the subtraction cannot underflow.
        let rest = self.sample_size - self.histogram[event];
        self.sample_size = rest.checked_add(value).ok_or_else(overflow)?;
        self.histogram[event] = value;
        Ok(value)
    }

    /// Raw count of `event`.
    pub fn get(&self, event: usize) -> Result<u64> {
        self.check_event(event)?;
        Ok(self.histogram[event])
    }

    /// Empirical probability of `event`; NaN while the sample size is zero.
    pub fn probability(&self, event: usize) -> Result<f64> {
        self.check_event(event)?;
        Ok(self.histogram[event] as f64 / self.sample_size as f64)
    }

    /// Iterates over the per-event probabilities.
    ///
    /// The sample size is captured when the iterator is created.
    pub fn probabilities(&self) -> Probabilities<'_> {
        Probabilities {
            counts: self.histogram.iter(),
            total: self.sample_size as f64,
        }
    }

    /// Collects the per-event probabilities into an array.
    pub fn to_probabilities(&self) -> Array1<f64> {
        let total = self.sample_size as f64;
        self.histogram.mapv(|c| c as f64 / total)
    }
}

impl TryFrom<Vec<u64>> for Distribution {
    type Error = InformError;

    fn try_from(counts: Vec<u64>) -> Result<Self> {
        Self::from_counts(counts)
    }
}

impl TryFrom<&[u64]> for Distribution {
    type Error = InformError;

    fn try_from(counts: &[u64]) -> Result<Self> {
        Self::from_counts(counts.to_vec())
    }
}

/// Iterator returned by [`Distribution::probabilities`].
#[derive(Clone)]
pub struct Probabilities<'a> {
    counts: ndarray::iter::Iter<'a, u64, ndarray::Ix1>,
    total: f64,
}

impl Iterator for Probabilities<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.counts.next().map(|&c| c as f64 / self.total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.counts.size_hint()
    }
}

impl ExactSizeIterator for Probabilities<'_> {}

impl<'a> IntoIterator for &'a Distribution {
    type Item = f64;
    type IntoIter = Probabilities<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.probabilities()
    }
}
