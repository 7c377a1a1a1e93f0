// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by distributions, entropy estimators and the PID lattice.

use std::collections::TryReserveError;
use thiserror::Error;

/// All failures reported by this crate.
///
/// Every fallible operation returns [`Result`]; nothing signals an error
/// through NaN or a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InformError {
    /// Malformed or out-of-domain parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Event index outside `[0, size)`.
    #[error("event {event} out of range for distribution of size {size}")]
    OutOfRange { event: usize, size: usize },

    /// A working buffer could not be allocated.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),
}

impl InformError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        InformError::InvalidArgument(msg.into())
    }
}

impl From<TryReserveError> for InformError {
    fn from(err: TryReserveError) -> Self {
        InformError::ResourceExhaustion(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InformError>;
