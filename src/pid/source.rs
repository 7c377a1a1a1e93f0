// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::error::{InformError, Result};

/// A vertex of the redundancy lattice: an antichain of non-empty subsets of
/// the input variables.
///
/// Each component of the name is a bitmask whose set bits are the variables
/// in that subset. No component is a submask of another. `above` and `below`
/// hold the indices, within the owning collection, of the sources that
/// immediately cover this one and that this one immediately covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidSource {
    name: Vec<u64>,
    above: Vec<usize>,
    below: Vec<usize>,
}

/// `x` is a submask of `y`.
#[inline]
pub(crate) fn is_submask(x: u64, y: u64) -> bool {
    x & y == x
}

/// Either mask contains the other.
#[inline]
pub(crate) fn comparable(x: u64, y: u64) -> bool {
    let z = x & y;
    z == x || z == y
}

/// Redundancy order on names: `xs` is below `ys` iff every component of `ys`
/// contains some component of `xs`.
pub fn name_below(xs: &[u64], ys: &[u64]) -> bool {
    ys.iter().all(|&y| xs.iter().any(|&x| is_submask(x, y)))
}

impl PidSource {
    /// Build a source from a name, checking the antichain invariant.
    pub fn new(name: Vec<u64>) -> Result<Self> {
        if name.is_empty() {
            return Err(InformError::invalid("pid source: name must not be empty"));
        }
        if name.contains(&0) {
            return Err(InformError::invalid(
                "pid source: components must be non-empty subsets",
            ));
        }
        for (i, &x) in name.iter().enumerate() {
            if let Some(&y) = name[i + 1..].iter().find(|&&y| comparable(x, y)) {
                return Err(InformError::invalid(format!(
                    "pid source: components {x:#b} and {y:#b} are comparable"
                )));
            }
        }
        Ok(Self::from_antichain(name))
    }

    /// Build a source from a name already known to be an antichain.
    pub(crate) fn from_antichain(mut name: Vec<u64>) -> Self {
        name.shrink_to_fit();
        Self {
            name,
            above: Vec::new(),
            below: Vec::new(),
        }
    }

    /// The antichain, as bitmasks.
    pub fn name(&self) -> &[u64] {
        &self.name
    }

    /// Number of components in the name.
    pub fn size(&self) -> usize {
        self.name.len()
    }

    pub fn above(&self) -> &[usize] {
        &self.above
    }

    pub fn below(&self) -> &[usize] {
        &self.below
    }

    pub fn n_above(&self) -> usize {
        self.above.len()
    }

    pub fn n_below(&self) -> usize {
        self.below.len()
    }

    /// Record `index` as an immediate successor. Repeated indices are ignored.
    pub fn add_above(&mut self, index: usize) {
        if !self.above.contains(&index) {
            self.above.push(index);
        }
    }

    /// Record `index` as an immediate predecessor. Repeated indices are ignored.
    pub fn add_below(&mut self, index: usize) {
        if !self.below.contains(&index) {
            self.below.push(index);
        }
    }

    pub fn clear_neighbours(&mut self) {
        self.above.clear();
        self.below.clear();
    }

    /// `self` lies below (or equals) `other` in the redundancy order.
    pub fn is_below(&self, other: &PidSource) -> bool {
        name_below(&self.name, &other.name)
    }

    /// `self` lies below `other` and is a different source.
    pub fn is_strictly_below(&self, other: &PidSource) -> bool {
        self.is_below(other) && !other.is_below(self)
    }
}

impl fmt::Display for PidSource {
    /// Renders each component as its 1-based variable indices, e.g. `{1}{23}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &mask in &self.name {
            write!(f, "{{")?;
            for bit in 0..u64::BITS {
                if mask & (1u64 << bit) != 0 {
                    write!(f, "{}", bit + 1)?;
                }
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
