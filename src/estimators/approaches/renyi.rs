// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::Distribution;
use crate::error::{InformError, Result};
use crate::estimators::approaches::shannon::ShannonEntropy;
use crate::estimators::traits::{DistributionEntropy, ensure_valid};

/// Rényi entropy of order α, in bits.
///
/// H_α = log2(Σ p_i^α) / (1 - α). The sum runs over every event, so order 0
/// yields the Hartley entropy log2(size). Order 1 is the Shannon limit and is
/// delegated to [`ShannonEntropy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenyiEntropy {
    pub order: f64,
}

impl RenyiEntropy {
    pub fn new(order: f64) -> Self {
        Self { order }
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }
}

impl DistributionEntropy for RenyiEntropy {
    fn entropy(&self, pdf: &Distribution) -> Result<f64> {
        ensure_valid(pdf, "renyi_entropy")?;
        let order = self.order;
        if !(order >= 0.0) {
            return Err(InformError::invalid(format!(
                "renyi_entropy: order must be non-negative, got {order}"
            )));
        }
        if order == 1.0 {
            return ShannonEntropy::default().entropy(pdf);
        }
        let sum: f64 = pdf.probabilities().map(|p| p.powf(order)).sum();
        Ok(sum.log2() / (1.0 - order))
    }
}
