//! Error types for pagination props validation.

/// Errors raised when externally supplied pagination props cannot be used.
///
/// These are configuration errors reported to the owner of the state. They
/// never escape as panics, and navigation requests are never turned into
/// errors (a rejected request simply emits nothing).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// `per_page` must be at least 1.
    #[error("invalid per-page value {per_page}: must be at least 1")]
    InvalidPerPage { per_page: i64 },

    /// `total` must not be negative.
    #[error("invalid total {total}: must not be negative")]
    NegativeTotal { total: i64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = PaginationError::InvalidPerPage { per_page: 0 };
        assert_eq!(err.to_string(), "invalid per-page value 0: must be at least 1");

        let err = PaginationError::NegativeTotal { total: -5 };
        assert_eq!(err.to_string(), "invalid total -5: must not be negative");
    }
}
