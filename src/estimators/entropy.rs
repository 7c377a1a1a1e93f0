// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::Distribution;
use crate::error::Result;
use crate::estimators::approaches::{RenyiEntropy, ShannonEntropy, TsallisEntropy};
pub use crate::estimators::traits::DistributionEntropy;

/// Entropy estimation methods over empirical distributions
///
/// This struct provides static methods for creating the entropy estimators
/// of each supported family.
pub struct Entropy;

impl Entropy {
    /// Creates a Shannon entropy estimator in bits
    pub fn shannon() -> ShannonEntropy {
        ShannonEntropy::default()
    }

    /// Creates a Shannon entropy estimator with a given logarithm base
    ///
    /// # Arguments
    ///
    /// * `base` - Logarithm base, must be greater than 1 (checked on evaluation)
    pub fn shannon_with_base(base: f64) -> ShannonEntropy {
        ShannonEntropy::default().with_base(base)
    }

    /// Creates a Rényi entropy estimator
    ///
    /// # Arguments
    ///
    /// * `order` - Order α ≥ 0; α = 1 reduces to Shannon entropy
    pub fn renyi(order: f64) -> RenyiEntropy {
        RenyiEntropy::new(order)
    }

    /// Creates a Tsallis entropy estimator
    ///
    /// # Arguments
    ///
    /// * `index` - Entropic index q; q = 1 reduces to Shannon entropy in nats
    pub fn tsallis(index: f64) -> TsallisEntropy {
        TsallisEntropy::new(index)
    }
}

/// Shannon entropy of `pdf` in bits.
pub fn shannon_entropy(pdf: &Distribution) -> Result<f64> {
    Entropy::shannon().entropy(pdf)
}

/// Shannon entropy of `pdf` with logarithm base `base` (> 1).
pub fn shannon_entropy_with_base(pdf: &Distribution, base: f64) -> Result<f64> {
    Entropy::shannon_with_base(base).entropy(pdf)
}

/// Rényi entropy of `pdf` of the given order, in bits.
pub fn renyi_entropy(pdf: &Distribution, order: f64) -> Result<f64> {
    Entropy::renyi(order).entropy(pdf)
}

/// Tsallis entropy of `pdf` with the given entropic index.
pub fn tsallis_entropy(pdf: &Distribution, index: f64) -> Result<f64> {
    Entropy::tsallis(index).entropy(pdf)
}
