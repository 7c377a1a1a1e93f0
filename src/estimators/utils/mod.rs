// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod state_encoding;
pub mod te_slicing;

use ndarray::ArrayView1;

use crate::error::{InformError, Result};
use state_encoding::state_bits;

/// Largest history, in bits, the time-series drivers will histogram.
pub const MAX_HISTORY_BITS: f64 = 25.0;

/// Largest joint state, in bits, the time-series drivers will histogram.
///
/// Active information tallies states of `k + 1` symbols and transfer entropy
/// states of `k + 2`; with a binary alphabet every history up to
/// [`MAX_HISTORY_BITS`] stays within this cap.
pub const MAX_STATE_BITS: f64 = 27.0;

/// Check that every symbol lies in `[0, base)`.
pub(crate) fn check_symbols(series: ArrayView1<'_, i32>, base: i32, caller: &str) -> Result<()> {
    match series.iter().position(|&x| x < 0 || x >= base) {
        Some(i) => Err(InformError::invalid(format!(
            "{caller}: symbol {} at index {i} is outside [0, {base})",
            series[i]
        ))),
        None => Ok(()),
    }
}

/// Check the alphabet and history length shared by the time-series drivers.
pub(crate) fn check_history(hist_len: usize, base: i32, caller: &str) -> Result<()> {
    if base < 2 {
        return Err(InformError::invalid(format!(
            "{caller}: base must be at least 2, got {base}"
        )));
    }
    if hist_len == 0 {
        return Err(InformError::invalid(format!(
            "{caller}: history length must be at least 1"
        )));
    }
    if state_bits(hist_len, base) > MAX_HISTORY_BITS {
        return Err(InformError::invalid(format!(
            "{caller}: history of {hist_len} symbols in base {base} exceeds {MAX_HISTORY_BITS} bits"
        )));
    }
    Ok(())
}

/// Number of distinct states of `len` symbols over `base`.
///
/// Rejects states wider than [`MAX_STATE_BITS`], so the result always fits a `usize`.
pub(crate) fn state_count(len: usize, base: i32, caller: &str) -> Result<usize> {
    let too_wide = || {
        InformError::invalid(format!(
            "{caller}: joint state of {len} symbols in base {base} exceeds {MAX_STATE_BITS} bits"
        ))
    };
    if base < 2 || state_bits(len, base) > MAX_STATE_BITS {
        return Err(too_wide());
    }
    u32::try_from(len)
        .ok()
        .and_then(|len| (base as usize).checked_pow(len))
        .ok_or_else(too_wide)
}
