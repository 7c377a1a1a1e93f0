// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Redundancy lattice of the Williams–Beer partial information decomposition.
//!
//! [`pid_sources`] enumerates the antichains of non-empty subsets of the input
//! variables, [`pid_toposort`] / [`pid_toposort_kahn`] order them by the
//! redundancy relation, and [`PidLattice`] bundles generation, sorting and
//! neighbour annotation.

pub mod lattice;
pub mod source;

pub use lattice::{
    LatticeOptions, MAX_LATTICE_VARIABLES, MAX_PID_VARIABLES, PidLattice, SCAN_SORT_LIMIT,
    SortStrategy, pid_annotate, pid_sources, pid_toposort, pid_toposort_kahn,
};
pub use source::{PidSource, name_below};
