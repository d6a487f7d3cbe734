//! Error types for strict registry lookups.

use thiserror::Error;

pub type SniffResult<T> = Result<T, SniffError>;

/// Errors surfaced by strict lookups.
///
/// Only [`TypeDb::canonical`](crate::TypeDb::canonical) returns these.
/// Convenience queries (equality, descendant checks, predicates) treat an
/// unknown name as a normal occurrence and degrade to `false`/`None`
/// instead of propagating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SniffError {
    #[error("unknown media type: {0}")]
    UnknownType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_displays_the_name() {
        let err = SniffError::UnknownType("application/x-missing".to_string());
        assert_eq!(err.to_string(), "unknown media type: application/x-missing");
    }
}
