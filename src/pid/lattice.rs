// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{InformError, Result};
use crate::pid::source::{PidSource, comparable};

/// Largest number of variables whose sources can be generated.
///
/// The lattice over n variables has (Dedekind number − 2) sources: 7,828,352
/// for n = 6 and about 2.4·10^12 for n = 7.
pub const MAX_PID_VARIABLES: usize = 6;

/// Largest number of variables [`PidLattice`] will sort and annotate.
///
/// Both sorts and the annotation compare every pair of sources, about
/// 6·10^13 comparisons for n = 6.
pub const MAX_LATTICE_VARIABLES: usize = 5;

/// Lattices up to this many sources are sorted with the scan-and-swap sort
/// under [`SortStrategy::Auto`].
pub const SCAN_SORT_LIMIT: usize = 256;

/// Topological sort used when building a [`PidLattice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Repeated full-window scan, see [`pid_toposort`].
    Scan,
    /// Kahn's algorithm, see [`pid_toposort_kahn`].
    Kahn,
    /// `Scan` up to [`SCAN_SORT_LIMIT`] sources, `Kahn` beyond.
    #[default]
    Auto,
}

/// Options for [`PidLattice::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeOptions {
    pub sort: SortStrategy,
    /// Fill in the immediate neighbours of every source.
    pub annotate: bool,
}

impl Default for LatticeOptions {
    fn default() -> Self {
        Self {
            sort: SortStrategy::Auto,
            annotate: true,
        }
    }
}

impl LatticeOptions {
    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

fn push_source(sources: &mut Vec<PidSource>, name: Vec<u64>) -> Result<()> {
    sources.try_reserve(1)?;
    sources.push(PidSource::from_antichain(name));
    Ok(())
}

/// Depth-first extension of `name` by every later mask incomparable to all of its components.
fn extend_sources(last: u64, max_mask: u64, name: &[u64], sources: &mut Vec<PidSource>) -> Result<()> {
    for mask in last + 1..=max_mask {
        if name.iter().any(|&x| comparable(mask, x)) {
            continue;
        }
        let mut extended = Vec::new();
        extended.try_reserve_exact(name.len() + 1)?;
        extended.extend_from_slice(name);
        extended.push(mask);
        push_source(sources, extended.clone())?;
        extend_sources(mask, max_mask, &extended, sources)?;
    }
    Ok(())
}

/// Generate every source of the redundancy lattice over `n` variables.
///
/// The result is in generation order, not sorted. `n = 0` gives an empty
/// collection; `n` above [`MAX_PID_VARIABLES`] is rejected.
pub fn pid_sources(n: usize) -> Result<Vec<PidSource>> {
    if n > MAX_PID_VARIABLES {
        return Err(InformError::invalid(format!(
            "pid_sources: at most {MAX_PID_VARIABLES} variables are supported, got {n}"
        )));
    }
    let mut sources = Vec::new();
    if n == 0 {
        return Ok(sources);
    }

    let max_mask = (1u64 << n) - 1;
    for mask in 1..=max_mask {
        push_source(&mut sources, vec![mask])?;
        extend_sources(mask, max_mask, &[mask], &mut sources)?;
    }
    sources.shrink_to_fit();
    debug!("pid_sources: generated {} sources for {n} variables", sources.len());
    Ok(sources)
}

fn cyclic(caller: &str) -> InformError {
    InformError::invalid(format!(
        "{caller}: sources are not partially ordered (duplicate names?)"
    ))
}

/// Sort sources so that every source comes after all sources below it.
///
/// Repeatedly scans the not-yet-placed window for sources with nothing else in
/// the window below them and swaps each into the next output slot. Ties go to
/// the leftmost candidate. Quadratic per placement; intended for small lattices.
///
/// Fails with [`InformError::InvalidArgument`] if some pass finds no such
/// source, which happens when the slice holds the same name twice. The slice
/// is then partially reordered.
pub fn pid_toposort(sources: &mut [PidSource]) -> Result<()> {
    let n = sources.len();
    let mut placed = 0;
    while placed + 1 < n {
        let window = placed;
        for i in window..n {
            let is_bottom = (window..n).all(|j| i == j || !sources[j].is_below(&sources[i]));
            if is_bottom {
                sources.swap(placed, i);
                placed += 1;
            }
        }
        if placed == window {
            return Err(cyclic("pid_toposort"));
        }
    }
    Ok(())
}

/// Kahn's algorithm over the precomputed strict order.
///
/// Produces a topological order with ties broken by lowest current index.
/// Fails with [`InformError::InvalidArgument`], leaving `sources` untouched,
/// if the relation among them has a cycle.
pub fn pid_toposort_kahn(sources: &mut Vec<PidSource>) -> Result<()> {
    let n = sources.len();
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_degree = vec![0usize; n];
    for i in 0..n {
        for j in 0..n {
            if i != j && sources[i].is_below(&sources[j]) {
                successors[i].push(j);
                in_degree[j] += 1;
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(i)) = ready.pop() {
        order.push(i);
        for &j in &successors[i] {
            in_degree[j] -= 1;
            if in_degree[j] == 0 {
                ready.push(Reverse(j));
            }
        }
    }
    if order.len() != n {
        return Err(cyclic("pid_toposort_kahn"));
    }

    let mut slots: Vec<Option<PidSource>> = sources.drain(..).map(Some).collect();
    sources.extend(order.into_iter().filter_map(|i| slots[i].take()));
    Ok(())
}

/// Record the covering relations of a topologically sorted slice.
///
/// After this call `sources[i].below()` lists the sources immediately below
/// source `i` and `above()` those immediately above it, by index.
pub fn pid_annotate(sources: &mut [PidSource]) {
    for source in sources.iter_mut() {
        source.clear_neighbours();
    }
    for j in 0..sources.len() {
        // Predecessors are at lower indices; visit them from the top down so
        // that any non-maximal one lies below a cover found earlier.
        let mut covers: Vec<usize> = Vec::new();
        for i in (0..j).rev() {
            if sources[i].is_below(&sources[j])
                && !covers.iter().any(|&c| sources[i].is_below(&sources[c]))
            {
                covers.push(i);
            }
        }
        trace!("pid_annotate: source {} has {} covers below", sources[j], covers.len());
        for &i in covers.iter().rev() {
            sources[j].add_below(i);
            sources[i].add_above(j);
        }
    }
}

/// The redundancy lattice over `n` variables, topologically sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidLattice {
    n_variables: usize,
    sources: Vec<PidSource>,
}

impl PidLattice {
    /// Generate, sort and annotate the lattice with default options.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_options(n, LatticeOptions::default())
    }

    /// Generate, sort and optionally annotate the lattice.
    ///
    /// `n` above [`MAX_LATTICE_VARIABLES`] is rejected with
    /// [`InformError::InvalidArgument`].
    pub fn with_options(n: usize, options: LatticeOptions) -> Result<Self> {
        if n > MAX_LATTICE_VARIABLES {
            return Err(InformError::invalid(format!(
                "pid lattice: at most {MAX_LATTICE_VARIABLES} variables are supported, got {n}"
            )));
        }
        let mut sources = pid_sources(n)?;
        let strategy = match options.sort {
            SortStrategy::Auto if sources.len() <= SCAN_SORT_LIMIT => SortStrategy::Scan,
            SortStrategy::Auto => SortStrategy::Kahn,
            other => other,
        };
        debug!("pid lattice: sorting {} sources with {strategy:?}", sources.len());
        match strategy {
            SortStrategy::Kahn => pid_toposort_kahn(&mut sources)?,
            _ => pid_toposort(&mut sources)?,
        }
        if options.annotate {
            pid_annotate(&mut sources);
        }
        Ok(Self {
            n_variables: n,
            sources,
        })
    }

    /// Number of input variables.
    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    pub fn sources(&self) -> &[PidSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PidSource> {
        self.sources.iter()
    }

    /// The unique minimal source `{1}{2}…{n}`.
    pub fn bottom(&self) -> Option<&PidSource> {
        self.sources.first()
    }

    /// The unique maximal source `{12…n}`.
    pub fn top(&self) -> Option<&PidSource> {
        self.sources.last()
    }

    pub fn into_sources(self) -> Vec<PidSource> {
        self.sources
    }
}

impl<'a> IntoIterator for &'a PidLattice {
    type Item = &'a PidSource;
    type IntoIter = std::slice::Iter<'a, PidSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}
