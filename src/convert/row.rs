//! Row shapes accepted as adjacency-list entries.

use num_traits::PrimInt;

use crate::error::CsrError;

/// One node's entry in an adjacency list.
///
/// A row is either absent (`None`) or an ordered run of neighbor ids of any
/// primitive integer type. Absent and empty rows contribute no neighbors.
pub trait AdjacencyRow {
    /// Integer type of the neighbor ids.
    type Id: PrimInt;

    /// The neighbor ids, or `None` if the row is absent.
    fn ids(&self) -> Option<&[Self::Id]>;
}

impl<T: PrimInt> AdjacencyRow for Vec<T> {
    type Id = T;

    #[inline]
    fn ids(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: PrimInt> AdjacencyRow for Option<Vec<T>> {
    type Id = T;

    #[inline]
    fn ids(&self) -> Option<&[T]> {
        self.as_deref()
    }
}

impl<'a, T: PrimInt> AdjacencyRow for &'a [T] {
    type Id = T;

    #[inline]
    fn ids(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<'a, T: PrimInt> AdjacencyRow for Option<&'a [T]> {
    type Id = T;

    #[inline]
    fn ids(&self) -> Option<&[T]> {
        *self
    }
}

impl<T: PrimInt, const N: usize> AdjacencyRow for [T; N] {
    type Id = T;

    #[inline]
    fn ids(&self) -> Option<&[T]> {
        Some(self)
    }
}

/// Coerces `id` to a node index, checking it against `[0, node_count)`.
#[inline]
pub(crate) fn coerce_id<T: PrimInt>(node: usize, id: T, node_count: usize) -> Result<usize, CsrError> {
    match id.to_usize() {
        Some(v) if v < node_count => Ok(v),
        _ => Err(CsrError::OutOfBoundsNeighbor {
            node,
            neighbor: id.to_i128().unwrap_or(i128::MAX),
            node_count,
        }),
    }
}

/// Number of neighbor ids a row contributes.
#[inline]
pub(crate) fn row_len<R: AdjacencyRow>(row: &R) -> usize {
    row.ids().map_or(0, <[R::Id]>::len)
}
