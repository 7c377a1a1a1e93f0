// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transfer entropy between discrete time series.
//!
//! TE(X → Y) = I(X_{t-1}; Y_t | Y_{t-k..t-1}), evaluated through the entropy
//! summation H(Y^k, X) + H(Y^k, Y_t) - H(Y^k, Y_t, X) - H(Y^k).

use log::debug;
use ndarray::{ArrayView1, ArrayView2};

use crate::distribution::Distribution;
use crate::error::{InformError, Result};
use crate::estimators::entropy::shannon_entropy;
use crate::estimators::utils::state_encoding::encode;
use crate::estimators::utils::te_slicing::te_slices;
use crate::estimators::utils::{check_history, check_symbols, state_count};

/// Histograms over the joint spaces of the entropy-summation formula.
struct TransferEntropyDistributions {
    states: Distribution,
    histories: Distribution,
    sources: Distribution,
    predicates: Distribution,
    n_histories: usize,
}

impl TransferEntropyDistributions {
    fn new(hist_len: usize, base: i32) -> Result<Self> {
        let n_histories = state_count(hist_len, base, "transfer_entropy")?;
        let n_pairs = state_count(hist_len + 1, base, "transfer_entropy")?;
        let n_states = state_count(hist_len + 2, base, "transfer_entropy")?;
        Ok(Self {
            states: Distribution::new(n_states)?,
            histories: Distribution::new(n_histories)?,
            sources: Distribution::new(n_pairs)?,
            predicates: Distribution::new(n_pairs)?,
            n_histories,
        })
    }

    fn accumulate(
        &mut self,
        source: ArrayView1<'_, i32>,
        target: ArrayView1<'_, i32>,
        hist_len: usize,
        base: i32,
    ) -> Result<()> {
        let b = base as usize;
        let q = self.n_histories;
        let (futures, histories, src_states) = te_slices(source, target, hist_len)?;
        for ((history, &future), &src) in histories
            .rows()
            .into_iter()
            .zip(futures.iter())
            .zip(src_states.iter())
        {
            let history = encode(history, base)? as usize;
            let future = future as usize;
            let src = src as usize;
            self.states.tic_one(history + q * (future + b * src))?;
            self.histories.tic_one(history)?;
            self.sources.tic_one(history + q * src)?;
            self.predicates.tic_one(history + q * future)?;
        }
        Ok(())
    }

    fn transfer_entropy(&self) -> Result<f64> {
        Ok(shannon_entropy(&self.sources)? + shannon_entropy(&self.predicates)?
            - shannon_entropy(&self.states)?
            - shannon_entropy(&self.histories)?)
    }
}

fn check_length(n: usize, hist_len: usize) -> Result<()> {
    if n <= 1 {
        return Err(InformError::invalid(
            "transfer_entropy: time series must have more than one observation",
        ));
    }
    if n <= hist_len {
        return Err(InformError::invalid(
            "transfer_entropy: history length must be less than the time series length",
        ));
    }
    Ok(())
}

/// Transfer entropy from `source` to `target` with target history length `k`,
/// over an alphabet of `base` symbols, in bits.
pub fn transfer_entropy<'a>(
    source: impl Into<ArrayView1<'a, i32>>,
    target: impl Into<ArrayView1<'a, i32>>,
    k: usize,
    base: i32,
) -> Result<f64> {
    let source = source.into();
    let target = target.into();
    if source.len() != target.len() {
        return Err(InformError::invalid(format!(
            "transfer_entropy: source and target lengths differ ({} vs {})",
            source.len(),
            target.len()
        )));
    }
    check_length(target.len(), k)?;
    check_history(k, base, "transfer_entropy")?;
    check_symbols(source, base, "transfer_entropy")?;
    check_symbols(target, base, "transfer_entropy")?;

    let mut dists = TransferEntropyDistributions::new(k, base)?;
    dists.accumulate(source, target, k, base)?;
    debug!(
        "transfer_entropy: {} observations, k = {k}, base = {base}",
        dists.histories.count()
    );
    dists.transfer_entropy()
}

/// Transfer entropy over an ensemble; row `i` of `source` drives row `i` of `target`.
pub fn transfer_entropy_ensemble<'a>(
    source: impl Into<ArrayView2<'a, i32>>,
    target: impl Into<ArrayView2<'a, i32>>,
    k: usize,
    base: i32,
) -> Result<f64> {
    let source = source.into();
    let target = target.into();
    if source.dim() != target.dim() {
        return Err(InformError::invalid(format!(
            "transfer_entropy: source shape {:?} and target shape {:?} differ",
            source.dim(),
            target.dim()
        )));
    }
    if target.nrows() == 0 {
        return Err(InformError::invalid(
            "transfer_entropy: ensemble has no time series",
        ));
    }
    check_length(target.ncols(), k)?;
    check_history(k, base, "transfer_entropy")?;

    let mut dists = TransferEntropyDistributions::new(k, base)?;
    for (src_row, tgt_row) in source.rows().into_iter().zip(target.rows()) {
        check_symbols(src_row, base, "transfer_entropy")?;
        check_symbols(tgt_row, base, "transfer_entropy")?;
        dists.accumulate(src_row, tgt_row, k, base)?;
    }
    debug!(
        "transfer_entropy: {} observations over {} initial conditions, k = {k}, base = {base}",
        dists.histories.count(),
        target.nrows()
    );
    dists.transfer_entropy()
}
