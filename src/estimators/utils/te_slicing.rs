// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, s};

use crate::error::{InformError, Result};

/// Slice a series into (future, history) pairs for active information.
///
/// Returns (future, history).
/// - future: X_t for t = k..n (length n - k)
/// - history: X_{t-k}, ..., X_{t-1} (shape (n - k) x k, oldest first)
///
/// Yields zero rows when `k >= n`.
pub fn history_slices<T: Clone + Default>(
    series: ArrayView1<'_, T>,
    hist_len: usize,
) -> (Array1<T>, Array2<T>) {
    let n = series.len();
    if hist_len >= n {
        return (Array1::default(0), Array2::default((0, hist_len)));
    }

    let n_samples = n - hist_len;
    let future = series.slice(s![hist_len..]).to_owned();
    let mut history = Array2::default((n_samples, hist_len));
    for (idx, mut row) in history.rows_mut().into_iter().enumerate() {
        row.assign(&series.slice(s![idx..idx + hist_len]));
    }
    (future, history)
}

/// Slice source and destination data into future and history components for TE.
///
/// Returns (dest_future, dest_history, src_state).
/// - dest_future: Y_t (length N)
/// - dest_history: Y_{t-k}, ..., Y_{t-1} (shape N x k, oldest first)
/// - src_state: X_{t-1} (length N)
///
/// Fails with [`InformError::InvalidArgument`] unless `source` and
/// `destination` have the same length. Yields zero rows when `k == 0` or `k >= N`.
pub fn te_slices<T: Clone + Default>(
    source: ArrayView1<'_, T>,
    destination: ArrayView1<'_, T>,
    dest_hist_len: usize,
) -> Result<(Array1<T>, Array2<T>, Array1<T>)> {
    let n = destination.len();
    if source.len() != n {
        return Err(InformError::invalid(format!(
            "te_slices: source and destination lengths differ ({} vs {n})",
            source.len()
        )));
    }
    if dest_hist_len == 0 || dest_hist_len >= n {
        return Ok((
            Array1::default(0),
            Array2::default((0, dest_hist_len)),
            Array1::default(0),
        ));
    }
    let (dest_future, dest_history) = history_slices(destination, dest_hist_len);
    let src_state = source.slice(s![dest_hist_len - 1..n - 1]).to_owned();
    Ok((dest_future, dest_history, src_state))
}
