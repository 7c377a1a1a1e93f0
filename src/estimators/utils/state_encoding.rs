// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional encoding of symbol windows into `u64` event identifiers.
//!
//! A state `[s_0, s_1, …, s_{ℓ-1}]` over an alphabet of size `b` encodes to
//! `Σ s_k · b^k`, so the first symbol is the least significant digit. A state
//! of length ℓ fits iff `b^ℓ ≤ 2^64`.

use ndarray::{Array1, ArrayView1};

use crate::error::{InformError, Result};

fn check_base(base: i32) -> Result<()> {
    if base < 2 {
        return Err(InformError::invalid(format!(
            "state encoding: base must be at least 2, got {base}"
        )));
    }
    Ok(())
}

/// Number of distinct states of the given length, if it fits in 64 bits.
fn state_space(length: usize, base: i32) -> Option<u128> {
    let length = u32::try_from(length).ok()?;
    (base as u128)
        .checked_pow(length)
        .filter(|&states| states <= 1u128 << 64)
}

fn check_length(length: usize, base: i32) -> Result<u128> {
    if length == 0 {
        return Err(InformError::invalid("state encoding: state length must be positive"));
    }
    state_space(length, base).ok_or_else(|| {
        InformError::invalid(format!(
            "state encoding: {length} symbols in base {base} do not fit in 64 bits"
        ))
    })
}

/// Encode a state into its integer identifier.
pub fn encode<'a>(state: impl Into<ArrayView1<'a, i32>>, base: i32) -> Result<u64> {
    let state = state.into();
    check_base(base)?;
    check_length(state.len(), base)?;

    let b = base as u64;
    let mut encoding = 0u64;
    for (i, &s) in state.iter().enumerate().rev() {
        if s < 0 || s >= base {
            return Err(InformError::invalid(format!(
                "state encoding: symbol {s} at position {i} is outside [0, {base})"
            )));
        }
        // Horner's scheme never exceeds the final value, which fits by the length check.
        encoding = encoding * b + s as u64;
    }
    Ok(encoding)
}

/// Decode an identifier back into a state of `length` symbols.
pub fn decode(encoding: u64, length: usize, base: i32) -> Result<Array1<i32>> {
    check_base(base)?;
    let states = check_length(length, base)?;
    if (encoding as u128) >= states {
        return Err(InformError::invalid(format!(
            "state decoding: {encoding} does not encode a state of length {length} in base {base}"
        )));
    }

    let b = base as u64;
    let mut rest = encoding;
    let mut state = Array1::zeros(length);
    for s in state.iter_mut() {
        *s = (rest % b) as i32;
        rest /= b;
    }
    Ok(state)
}

/// Number of bits a state of `length` symbols in `base` occupies.
pub fn state_bits(length: usize, base: i32) -> f64 {
    length as f64 * (base as f64).log2()
}
