// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::Distribution;
use crate::error::{InformError, Result};
use crate::estimators::traits::{DistributionEntropy, ensure_valid};

/// Shannon entropy of an empirical distribution (log base 2 unless configured).
///
/// Computes H = -Σ p_i log_b p_i over the events with p_i > 0, so empty bins
/// contribute nothing instead of `0 · log 0 = NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShannonEntropy {
    pub base: f64,
}

impl Default for ShannonEntropy {
    fn default() -> Self {
        Self { base: 2.0 }
    }
}

impl ShannonEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }
}

impl DistributionEntropy for ShannonEntropy {
    fn entropy(&self, pdf: &Distribution) -> Result<f64> {
        ensure_valid(pdf, "shannon_entropy")?;
        // NaN fails this comparison as well
        if !(self.base > 1.0) {
            return Err(InformError::invalid(format!(
                "shannon_entropy: base must be greater than 1, got {}",
                self.base
            )));
        }
        let mut h = 0.0_f64;
        for p in pdf {
            if p > 0.0 {
                h -= p * p.log2();
            }
        }
        // log2(2) == 1 exactly, so bits come back untouched
        Ok(h / self.base.log2())
    }
}
