#[derive(thiserror::Error, Debug)]
pub enum ArithGroupError {
    /// The parent is not an arithmetic subgroup, or the matrix is not a member of it.
    #[error("TypeMismatch: {0}")]
    TypeMismatch(String),
    /// Entry access outside of the 2×2 index range.
    #[error("IndexOutOfRange: ({row}, {col}) is not a valid 2x2 matrix index")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Congruence subgroup level must be positive, got {0}")]
    InvalidLevel(u64),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("ZeroDivision: {0}")]
    ZeroDivision(String),

    #[error("UnreadablePayload: {0}")]
    UnreadablePayload(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
