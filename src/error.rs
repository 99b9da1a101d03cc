use thiserror::Error;

/// Error type for vector operations.
///
/// Every variant is a usage error. It is returned at the point of violation
/// and callers never observe a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("{op}: expected at least one vector")]
    Arity { op: &'static str },

    #[error("{op}: expected a vector of length {expected}, but got one of length {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

#[test]
fn test_error_messages() {
    let err = VectorError::Arity { op: "add" };
    assert_eq!(err.to_string(), "add: expected at least one vector");

    let err = VectorError::DimensionMismatch {
        op: "subtract",
        expected: 2,
        actual: 1,
    };
    assert_eq!(
        err.to_string(),
        "subtract: expected a vector of length 2, but got one of length 1"
    );
}
