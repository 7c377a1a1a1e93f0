// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::Distribution;
use crate::error::{InformError, Result};
use crate::estimators::approaches::shannon::ShannonEntropy;
use crate::estimators::traits::{DistributionEntropy, ensure_valid};

/// Tsallis entropy with entropic index q.
///
/// S_q = (1 - Σ p_i^q) / (q - 1), summed over every event. Empty bins matter
/// here: `0^0 = 1` and `0^q = ∞` for q < 0, so a one-hot distribution has
/// S_0 = size - 1 and diverges for negative q.
///
/// q = 1 is a removable singularity. It returns the limit, which is the
/// Shannon entropy in nats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsallisEntropy {
    pub index: f64,
}

impl TsallisEntropy {
    pub fn new(index: f64) -> Self {
        Self { index }
    }

    pub fn with_index(mut self, index: f64) -> Self {
        self.index = index;
        self
    }
}

impl DistributionEntropy for TsallisEntropy {
    fn entropy(&self, pdf: &Distribution) -> Result<f64> {
        ensure_valid(pdf, "tsallis_entropy")?;
        let q = self.index;
        if q.is_nan() {
            return Err(InformError::invalid("tsallis_entropy: index must not be NaN"));
        }
        if q == 1.0 {
            return ShannonEntropy::default()
                .with_base(std::f64::consts::E)
                .entropy(pdf);
        }
        let sum: f64 = pdf.probabilities().map(|p| p.powf(q)).sum();
        Ok((1.0 - sum) / (q - 1.0))
    }
}
