use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompleteErrorKind {
    /// A closing bracket or brace arrived with no matching opener on the
    /// mirror stack, or with an opener of the other type.
    #[error("closing `{found}` matches no open container")]
    StructuralMismatch { found: char },
    /// A quote arrived in a position that is none of the recognized states
    /// (object key open/close, object value open/close, array element
    /// open/close).
    #[error("quote outside any recognized key or value position")]
    InvalidQuoteContext,
    /// Completed output failed to parse. Only produced by the serde adapter;
    /// indicates the completer was fed past a prior error.
    #[error("{0}")]
    Parse(String),
}

/// An unrecoverable structural error. Once returned, the received prefix is
/// not a prefix of any valid JSON document and further `append`/`complete`
/// calls on the same completer are not meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct CompleteError {
    pub kind: CompleteErrorKind,
    /// Byte offset of the offending input byte in the overall stream.
    pub position: usize,
}

impl CompleteError {
    pub fn new(kind: CompleteErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
