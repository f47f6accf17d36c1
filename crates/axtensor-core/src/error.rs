//! Error types for `axtensor-core`.

use thiserror::Error;

/// All errors returned by `axtensor-core`.
///
/// Every variant reports a contract violation at the call that caused it;
/// no operation is retryable and no failure leaves a tensor partially
/// mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A shape specification is empty or contains a zero extent.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// The offending shape.
        shape: Vec<usize>,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A reshape (or buffer adoption) would change the element count.
    #[error("size mismatch: tensor holds {expected} elements, target holds {got}")]
    SizeMismatch {
        /// Element count of the existing tensor.
        expected: usize,
        /// Element count implied by the request.
        got: usize,
    },

    /// The wrong number of indices was supplied for the tensor's rank.
    #[error("tensor requires {expected} indices, {got} provided")]
    RankMismatch {
        /// The tensor's rank.
        expected: usize,
        /// How many indices were supplied.
        got: usize,
    },

    /// An axis index is at or beyond the extent of its axis.
    #[error("index {index} out of range for axis {axis} with extent {extent}")]
    IndexOutOfRange {
        /// Which axis was being indexed.
        axis: usize,
        /// The supplied index.
        index: usize,
        /// The extent of that axis.
        extent: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("operand shapes {lhs:?} and {rhs:?} are incompatible")]
    ShapeMismatch {
        /// Left operand shape.
        lhs: Vec<usize>,
        /// Right operand shape.
        rhs: Vec<usize>,
    },

    /// Indexing was attempted past a fully resolved element.
    #[error("cannot index into a fully resolved scalar")]
    ScalarIndexing,

    /// A parameter is malformed (bad range, bad distribution parameter).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

/// Convenience alias used throughout `axtensor-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CoreError::RankMismatch {
            expected: 3,
            got: 1,
        };
        assert_eq!(e.to_string(), "tensor requires 3 indices, 1 provided");

        let e = CoreError::IndexOutOfRange {
            axis: 1,
            index: 4,
            extent: 2,
        };
        assert_eq!(
            e.to_string(),
            "index 4 out of range for axis 1 with extent 2"
        );
    }

    #[test]
    fn test_variants_compare() {
        assert_eq!(CoreError::ScalarIndexing, CoreError::ScalarIndexing);
        assert_ne!(
            CoreError::ScalarIndexing,
            CoreError::InvalidArgument { reason: "x" }
        );
    }
}
