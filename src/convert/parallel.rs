//! Rayon-backed conversion for large adjacency lists.

use rayon::prelude::*;

use super::row::{coerce_id, AdjacencyRow};
use crate::{csr::CsrGraph, error::CsrError};

/// Parallel counterpart of [`super::convert_adjacency`].
///
/// Rows are coerced and bounds-checked on the rayon pool, then concatenated in
/// node order. The result, and the error reported for bad input, match the
/// sequential converter exactly.
///
/// # Errors
///
/// Returns [`CsrError::OutOfBoundsNeighbor`] for the lowest offending node.
pub fn convert_adjacency_par<R>(adjacency: &[R]) -> Result<CsrGraph, CsrError>
where
    R: AdjacencyRow + Sync,
    R::Id: Sync,
{
    let n = adjacency.len();

    let rows: Vec<Result<Vec<usize>, CsrError>> = adjacency
        .par_iter()
        .enumerate()
        .map(|(node, row)| {
            row.ids()
                .unwrap_or(&[])
                .iter()
                .map(|&id| coerce_id(node, id, n))
                .collect()
        })
        .collect();

    let mut offsets = Vec::with_capacity(n + 1);
    offsets.push(0);

    let total_edges = rows
        .iter()
        .map(|row| row.as_ref().map_or(0, Vec::len))
        .sum();
    let mut neighbors = Vec::with_capacity(total_edges);

    for row in rows {
        neighbors.extend(row?);
        offsets.push(neighbors.len());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(nodes = n, edges = neighbors.len(), "built CSR from adjacency list in parallel");

    Ok(CsrGraph::from_parts(offsets, neighbors))
}
