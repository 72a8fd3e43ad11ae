//! A plain CSR (compressed sparse row) adjacency pair.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (METIS `xadj`)
//! - `neighbors`: flattened `usize` targets for each row (METIS `adjncy`)
//!
//! The neighbors of node `i` are `neighbors[offsets[i]..offsets[i + 1]]`.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CsrError;

/// An offsets/neighbors pair in CSR layout.
///
/// Values built by [`crate::convert`] from an adjacency list always satisfy the
/// CSR shape rules and the neighbor bounds invariant. Values built through
/// [`CsrGraph::from_parts`] or deserialized are trusted as-is; call
/// [`CsrGraph::validate`] to check them.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `adjacent` | \(O(1)\) | Returns the neighbor slice of a node |
/// | `degree` | \(O(1)\) | Row length |
/// | `validate` | \(O(n + m)\) | Offsets shape + neighbor bounds |
/// | `to_metis_parts` | \(O(n + m)\) | Narrows to 32-bit indices |
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CsrGraph {
    #[serde(rename = "xadj")]
    offsets: Vec<usize>,
    #[serde(rename = "adjncy")]
    neighbors: Vec<usize>,
}

impl CsrGraph {
    /// Wraps a caller-supplied CSR pair without validating it.
    pub fn from_parts(offsets: Vec<usize>, neighbors: Vec<usize>) -> Self {
        Self { offsets, neighbors }
    }

    /// The offsets array (`xadj`).
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The flattened neighbor array (`adjncy`).
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Splits the graph back into `(offsets, neighbors)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.offsets, self.neighbors)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` when well formed.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of stored (directed) edge entries.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node`, in the order they were supplied.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()` or the offsets are malformed.
    #[inline]
    pub fn adjacent(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "node {node} out of bounds");
        &self.neighbors[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Number of neighbor entries of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()`.
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Iterates over each node's neighbor slice in node order.
    ///
    /// # Panics
    ///
    /// The iterator panics if the offsets are malformed; run
    /// [`CsrGraph::validate`] first on untrusted pairs.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.neighbors[w[0]..w[1]])
    }

    /// Checks the CSR shape rules and the neighbor bounds invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::MalformedOffsets`] if `offsets` is empty, does not
    /// start at zero, decreases, or does not end at `neighbors.len()`, and
    /// [`CsrError::OutOfBoundsNeighbor`] for the first neighbor id `>= n`.
    pub fn validate(&self) -> Result<(), CsrError> {
        let Some(&last) = self.offsets.last() else {
            return Err(CsrError::MalformedOffsets("offsets must have length n+1"));
        };
        if self.offsets[0] != 0 {
            return Err(CsrError::MalformedOffsets("offsets must start at 0"));
        }
        if self.offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(CsrError::MalformedOffsets("offsets must be monotone"));
        }
        if last != self.neighbors.len() {
            return Err(CsrError::MalformedOffsets(
                "offsets last must equal neighbors length",
            ));
        }

        let n = self.node_count();
        for (node, row) in self.rows().enumerate() {
            if let Some(&v) = row.iter().find(|&&v| v >= n) {
                return Err(CsrError::OutOfBoundsNeighbor {
                    node,
                    neighbor: v as i128,
                    node_count: n,
                });
            }
        }
        Ok(())
    }

    /// Narrows both arrays to METIS 32-bit `idx_t` values.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::IndexOverflow`] for the first value above `i32::MAX`.
    pub fn to_metis_parts(&self) -> Result<(Vec<i32>, Vec<i32>), CsrError> {
        fn narrow(values: &[usize]) -> Result<Vec<i32>, CsrError> {
            values
                .iter()
                .map(|&value| i32::try_from(value).map_err(|_| CsrError::IndexOverflow { value }))
                .collect()
        }
        Ok((narrow(&self.offsets)?, narrow(&self.neighbors)?))
    }
}

/// Prints `offsets` then `neighbors`, one list per line.
impl fmt::Display for CsrGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.offsets)?;
        write!(f, "{:?}", self.neighbors)
    }
}

impl From<CsrGraph> for (Vec<usize>, Vec<usize>) {
    fn from(graph: CsrGraph) -> Self {
        graph.into_parts()
    }
}

#[cfg(test)]
mod tests;
