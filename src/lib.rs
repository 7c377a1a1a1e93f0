// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # inform
//!
//! Information-theoretic measures over discrete-valued time series: entropy,
//! mutual information, active information, transfer entropy, and the
//! redundancy lattice of the partial information decomposition (PID).
//!
//! ## Quick Start
//!
//! ```rust
//! use inform::{Distribution, shannon_entropy, active_info};
//! use inform::pid::PidLattice;
//! use ndarray::array;
//!
//! // Entropy of an empirical histogram, in bits
//! let dist = Distribution::from_counts(vec![2u64, 1]).unwrap();
//! let h = shannon_entropy(&dist).unwrap();
//! assert!((h - 0.9182958340544896).abs() < 1e-12);
//!
//! // Active information of a binary series with history length 2
//! let series = array![1, 1, 0, 0, 1, 0, 0, 1];
//! let ai = active_info(&series, 2, 2).unwrap();
//! assert!((ai - 0.918296).abs() < 1e-6);
//!
//! // Redundancy lattice over three variables
//! let lattice = PidLattice::new(3).unwrap();
//! assert_eq!(lattice.len(), 18);
//! ```
//!
//! ## Measures
//!
//! | Measure | Input | Function |
//! |---------|-------|----------|
//! | Shannon / Rényi / Tsallis entropy | `Distribution` | [`shannon_entropy`], [`renyi_entropy`], [`tsallis_entropy`] |
//! | Conditional entropy | joint + marginal `Distribution` | [`conditional_entropy`] |
//! | Mutual information | joint + marginals | [`mutual_information`] |
//! | Active information | time series | [`active_info`], [`active_info_ensemble`] |
//! | Transfer entropy | source + target series | [`transfer_entropy`], [`transfer_entropy_ensemble`] |
//!
//! ## Architecture
//!
//! 1. **Distribution**: mutable histogram over `{0, …, N-1}` with derived probabilities
//! 2. **Estimators**: entropy families behind the [`DistributionEntropy`] trait, and the
//!    time-series drivers that encode history windows into distributions
//! 3. **PID**: antichain generation, topological sorting and covering relations
//!
//! Every fallible call returns [`Result`]; entropy is in bits unless a base,
//! order or index says otherwise. The crate logs through the `log` facade and
//! never installs a logger.

pub mod distribution;
pub mod error;
pub mod estimators;
pub mod pid;

pub use distribution::{Distribution, Probabilities};
pub use error::{InformError, Result};
pub use estimators::active_information::{active_info, active_info_ensemble};
pub use estimators::entropy::{
    Entropy, renyi_entropy, shannon_entropy, shannon_entropy_with_base, tsallis_entropy,
};
pub use estimators::mutual_information::{conditional_entropy, mutual_information};
pub use estimators::traits::DistributionEntropy;
pub use estimators::transfer_entropy::{transfer_entropy, transfer_entropy_ensemble};
pub use estimators::utils::state_encoding::{decode, encode};
