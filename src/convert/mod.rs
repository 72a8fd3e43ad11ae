//! Adjacency-list to CSR conversion.
//!
//! The converter accepts one of two input modes:
//! - an adjacency list, which is bounds-checked and flattened into CSR
//! - a pre-built CSR pair, which is returned unchanged
//!
//! The flattening is a single pass over nodes in ascending order. Neighbor
//! order within a row is kept exactly; nothing is sorted or deduplicated, and
//! self-loops or one-directional edges are accepted as given.

mod row;
#[cfg(feature = "parallel")]
mod parallel;

pub use row::AdjacencyRow;
#[cfg(feature = "parallel")]
pub use parallel::convert_adjacency_par;

use row::{coerce_id, row_len};

use crate::{csr::CsrGraph, error::CsrError};

/// The two mutually exclusive ways of handing a graph to [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphInput<'a, R> {
    /// One row per node; row `i` holds the neighbor ids of node `i`.
    Adjacency(&'a [R]),
    /// A ready-made CSR pair, passed through without re-validation.
    Csr(CsrGraph),
}

impl<'a, R> GraphInput<'a, R> {
    /// Selects the input mode from three optional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::InputModeViolation`] unless exactly one of these
    /// holds: `adjacency` is present and both CSR parts are absent, or
    /// `adjacency` is absent and both CSR parts are present.
    pub fn from_parts(
        adjacency: Option<&'a [R]>,
        offsets: Option<Vec<usize>>,
        neighbors: Option<Vec<usize>>,
    ) -> Result<Self, CsrError> {
        match (adjacency, offsets, neighbors) {
            (Some(adjacency), None, None) => Ok(Self::Adjacency(adjacency)),
            (None, Some(offsets), Some(neighbors)) => {
                Ok(Self::Csr(CsrGraph::from_parts(offsets, neighbors)))
            }
            _ => Err(CsrError::InputModeViolation),
        }
    }
}

impl<'a, R> From<&'a [R]> for GraphInput<'a, R> {
    fn from(adjacency: &'a [R]) -> Self {
        Self::Adjacency(adjacency)
    }
}

impl<R> From<CsrGraph> for GraphInput<'_, R> {
    fn from(graph: CsrGraph) -> Self {
        Self::Csr(graph)
    }
}

/// Produces a CSR pair from either input mode.
///
/// # Errors
///
/// Returns [`CsrError::OutOfBoundsNeighbor`] if an adjacency row holds an id
/// outside `[0, n)`. Pass-through input never fails.
pub fn convert<R: AdjacencyRow>(input: GraphInput<'_, R>) -> Result<CsrGraph, CsrError> {
    match input {
        GraphInput::Adjacency(adjacency) => convert_adjacency(adjacency),
        GraphInput::Csr(graph) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "passing through pre-built CSR pair"
            );
            Ok(graph)
        }
    }
}

/// Three-optional-argument form of [`convert`].
///
/// # Errors
///
/// Returns [`CsrError::InputModeViolation`] for an invalid argument
/// combination (see [`GraphInput::from_parts`]) and
/// [`CsrError::OutOfBoundsNeighbor`] for a bad neighbor id.
pub fn convert_parts<R: AdjacencyRow>(
    adjacency: Option<&[R]>,
    offsets: Option<Vec<usize>>,
    neighbors: Option<Vec<usize>>,
) -> Result<CsrGraph, CsrError> {
    let input = GraphInput::from_parts(adjacency, offsets, neighbors).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(%err, "rejected graph input");
        err
    })?;

    convert(input)
}

/// Flattens an adjacency list into CSR, bounds-checking every neighbor id.
///
/// # Errors
///
/// Returns [`CsrError::OutOfBoundsNeighbor`] for the first id (in node order,
/// then row order) that is negative or `>= adjacency.len()`.
pub fn convert_adjacency<R: AdjacencyRow>(adjacency: &[R]) -> Result<CsrGraph, CsrError> {
    let n = adjacency.len();

    let mut offsets = Vec::with_capacity(n + 1);
    offsets.push(0);

    let total_edges = adjacency
        .iter()
        .fold(0usize, |acc, row| acc.saturating_add(row_len(row)));
    let mut neighbors = Vec::with_capacity(total_edges);

    for (node, row) in adjacency.iter().enumerate() {
        if let Some(ids) = row.ids() {
            for &id in ids {
                match coerce_id(node, id, n) {
                    Ok(v) => neighbors.push(v),
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(%err, "rejected adjacency list");
                        return Err(err);
                    }
                }
            }
        }
        offsets.push(neighbors.len());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(nodes = n, edges = neighbors.len(), "built CSR from adjacency list");

    Ok(CsrGraph::from_parts(offsets, neighbors))
}
