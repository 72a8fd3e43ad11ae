//! Error type shared by the converter and the CSR container.

/// The error type for CSR conversion and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// The supplied arguments match neither input mode: either an adjacency
    /// list together with CSR parts, or an incomplete CSR pair.
    InputModeViolation,
    /// A neighbor id falls outside `[0, node_count)`.
    OutOfBoundsNeighbor {
        /// Node whose row holds the offending id.
        node: usize,
        /// The offending id, widened so signed inputs keep their sign.
        neighbor: i128,
        /// Total node count the id was checked against.
        node_count: usize,
    },
    /// A CSR offsets array violates its shape rules.
    MalformedOffsets(&'static str),
    /// A value does not fit in a 32-bit METIS index.
    IndexOverflow {
        /// The value that overflowed.
        value: usize,
    },
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InputModeViolation => f.write_str(
                "exactly one of an adjacency list or a complete (offsets, neighbors) pair must be supplied",
            ),
            Self::OutOfBoundsNeighbor {
                node,
                neighbor,
                node_count,
            } => write!(
                f,
                "node {node} has neighbor {neighbor} out of bounds for n={node_count}"
            ),
            Self::MalformedOffsets(reason) => write!(f, "malformed offsets: {reason}"),
            Self::IndexOverflow { value } => {
                write!(f, "value {value} does not fit in a 32-bit index")
            }
        }
    }
}

impl std::error::Error for CsrError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_node_and_id() {
        let err = CsrError::OutOfBoundsNeighbor {
            node: 3,
            neighbor: -1,
            node_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "node 3 has neighbor -1 out of bounds for n=5"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CsrError>();
    }
}
