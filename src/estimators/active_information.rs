// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Active information storage of discrete time series.
//!
//! A(X, k) = I(X_t^{(k)}; X_{t+1}): the mutual information between a length-k
//! history and the next symbol, accumulated over every window of the series
//! (or of every initial condition in an ensemble).

use log::debug;
use ndarray::{ArrayView1, ArrayView2};

use crate::distribution::Distribution;
use crate::error::{InformError, Result};
use crate::estimators::mutual_information::mutual_information;
use crate::estimators::utils::state_encoding::encode;
use crate::estimators::utils::te_slicing::history_slices;
use crate::estimators::utils::{check_history, check_symbols, state_count};

/// Histograms of joint states, histories and futures.
struct ActiveInfoDistributions {
    states: Distribution,
    histories: Distribution,
    futures: Distribution,
    /// Number of distinct histories, the stride of the future in `states`.
    n_histories: usize,
}

impl ActiveInfoDistributions {
    fn new(hist_len: usize, base: i32) -> Result<Self> {
        let n_histories = state_count(hist_len, base, "active_info")?;
        let n_states = state_count(hist_len + 1, base, "active_info")?;
        Ok(Self {
            states: Distribution::new(n_states)?,
            histories: Distribution::new(n_histories)?,
            futures: Distribution::new(base as usize)?,
            n_histories,
        })
    }

    /// Tally every (history, future) window of `series`.
    fn accumulate(&mut self, series: ArrayView1<'_, i32>, hist_len: usize, base: i32) -> Result<()> {
        let q = self.n_histories;
        let (futures, histories) = history_slices(series, hist_len);
        for (history, &future) in histories.rows().into_iter().zip(futures.iter()) {
            let history = encode(history, base)? as usize;
            let future = future as usize;
            self.states.tic_one(history + future * q)?;
            self.histories.tic_one(history)?;
            self.futures.tic_one(future)?;
        }
        Ok(())
    }

    fn active_info(&self) -> Result<f64> {
        mutual_information(&self.states, &self.histories, &self.futures)
    }
}

fn check_length(n: usize, hist_len: usize) -> Result<()> {
    if n <= 1 {
        return Err(InformError::invalid(
            "active_info: time series must have more than one observation",
        ));
    }
    if n < hist_len + 2 {
        return Err(InformError::invalid(
            "active_info: history length must be at least two less than the time series length",
        ));
    }
    Ok(())
}

/// Active information of a single series with history length `k` over an
/// alphabet of `base` symbols, in bits.
pub fn active_info<'a>(series: impl Into<ArrayView1<'a, i32>>, k: usize, base: i32) -> Result<f64> {
    let series = series.into();
    check_length(series.len(), k)?;
    check_history(k, base, "active_info")?;
    check_symbols(series, base, "active_info")?;

    let mut dists = ActiveInfoDistributions::new(k, base)?;
    dists.accumulate(series, k, base)?;
    debug!(
        "active_info: {} observations, k = {k}, base = {base}",
        dists.histories.count()
    );
    dists.active_info()
}

/// Active information over an ensemble, one initial condition per row.
///
/// All rows contribute to the same histograms.
pub fn active_info_ensemble<'a>(
    series: impl Into<ArrayView2<'a, i32>>,
    k: usize,
    base: i32,
) -> Result<f64> {
    let series = series.into();
    if series.nrows() == 0 {
        return Err(InformError::invalid("active_info: ensemble has no time series"));
    }
    check_length(series.ncols(), k)?;
    check_history(k, base, "active_info")?;

    let mut dists = ActiveInfoDistributions::new(k, base)?;
    for row in series.rows() {
        check_symbols(row, base, "active_info")?;
        dists.accumulate(row, k, base)?;
    }
    debug!(
        "active_info: {} observations over {} initial conditions, k = {k}, base = {base}",
        dists.histories.count(),
        series.nrows()
    );
    dists.active_info()
}
