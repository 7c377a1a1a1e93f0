// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::Distribution;
use crate::error::{InformError, Result};

/// Interface for entropy families that reduce a [`Distribution`] to a scalar.
pub trait DistributionEntropy {
    /// Compute the entropy of `pdf`.
    ///
    /// Fails with [`InformError::InvalidArgument`] if `pdf` is not valid or the
    /// estimator's parameter is out of its domain.
    fn entropy(&self, pdf: &Distribution) -> Result<f64>;

    /// Entropy of `joint` minus entropy of `condition`, $H(X|Y) = H(X,Y) - H(Y)$.
    fn conditional_entropy(&self, joint: &Distribution, condition: &Distribution) -> Result<f64> {
        Ok(self.entropy(joint)? - self.entropy(condition)?)
    }

    /// Mutual information $I(X;Y) = H(X) + H(Y) - H(X,Y)$.
    fn mutual_information(
        &self,
        joint: &Distribution,
        marginal_x: &Distribution,
        marginal_y: &Distribution,
    ) -> Result<f64> {
        Ok(self.entropy(marginal_x)? + self.entropy(marginal_y)? - self.entropy(joint)?)
    }
}

/// Reject distributions that carry no observations.
pub(crate) fn ensure_valid(pdf: &Distribution, caller: &str) -> Result<()> {
    if pdf.is_valid() {
        Ok(())
    } else {
        Err(InformError::invalid(format!(
            "{caller}: provided distribution is invalid"
        )))
    }
}
