// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shannon-entropy combinations over aligned joint and marginal distributions.
//!
//! The caller is responsible for the alignment: `joint` must be a histogram
//! over the Cartesian product of the variables' alphabets whose marginals are
//! the other arguments. Only validity is checked here.

use crate::distribution::Distribution;
use crate::error::Result;
use crate::estimators::approaches::ShannonEntropy;
use crate::estimators::traits::DistributionEntropy;

/// Conditional entropy $H(X|Y) = H(X,Y) - H(Y)$ in bits.
pub fn conditional_entropy(joint: &Distribution, condition: &Distribution) -> Result<f64> {
    ShannonEntropy::default().conditional_entropy(joint, condition)
}

/// Mutual information $I(X;Y) = H(X) + H(Y) - H(X,Y)$ in bits.
///
/// Active information is evaluated through this function over distributions
/// built from encoded history windows.
pub fn mutual_information(
    joint: &Distribution,
    marginal_x: &Distribution,
    marginal_y: &Distribution,
) -> Result<f64> {
    ShannonEntropy::default().mutual_information(joint, marginal_x, marginal_y)
}
