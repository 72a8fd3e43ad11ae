//! # `adjacency_csr` - Adjacency lists to CSR
//!
//! Converts a per-node adjacency list of an undirected graph into the
//! Compressed Sparse Row pair consumed by graph partitioners such as METIS:
//! an offsets array (`xadj`, length `n + 1`) and a flattened neighbor array
//! (`adjncy`).
//!
//! ## Input modes
//!
//! [`GraphInput`] carries exactly one of:
//! - an adjacency list (`&[R]` where each row implements [`AdjacencyRow`]),
//!   which is bounds-checked and flattened, or
//! - a pre-built [`CsrGraph`], which is returned unchanged.
//!
//! [`convert_parts`] keeps the three-optional-argument calling convention and
//! reports [`CsrError::InputModeViolation`] for a bad combination.
//!
//! ## Guarantees
//!
//! For every adjacency list that converts successfully:
//! - `offsets.len() == n + 1`, `offsets[0] == 0`, `offsets[n] == neighbors.len()`
//! - `offsets` is non-decreasing
//! - `neighbors[offsets[i]..offsets[i + 1]]` is row `i`, in its original order
//! - every neighbor id lies in `[0, n)`
//!
//! No other graph property is checked: self-loops, duplicate entries and
//! missing reciprocal edges pass through untouched.
//!
//! ## Features
//!
//! - `parallel`: [`convert_adjacency_par`] on the rayon pool
//! - `tracing`: debug/warn events from the converter
//!
//! ## Example
//!
//! ```rust
//! use adjacency_csr::convert_adjacency;
//!
//! let adjacency = vec![vec![1u32], vec![0]];
//! let graph = convert_adjacency(&adjacency).unwrap();
//!
//! assert_eq!(graph.offsets(), &[0, 1, 2]);
//! assert_eq!(graph.neighbors(), &[1, 0]);
//! assert_eq!(graph.adjacent(1), &[0]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod convert;
pub mod csr;
pub mod error;
pub mod sample;

#[cfg(feature = "parallel")]
pub use convert::convert_adjacency_par;
pub use convert::{convert, convert_adjacency, convert_parts, AdjacencyRow, GraphInput};
pub use csr::CsrGraph;
pub use error::CsrError;

// The converter is meant to be shared freely across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CsrGraph>();
    assert_send_sync::<CsrError>();
};
