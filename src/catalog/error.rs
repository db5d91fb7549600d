//! Catalog error taxonomy.
//!
//! Every variant is a caller mistake that leaves the catalog untouched.
//! Not-found and age-gated outcomes are not errors; they come back as
//! `false` or `None` from the relevant operation.

use thiserror::Error;

/// Longest runtime accepted for a single item
pub const MAX_LENGTH_MINUTES: u32 = 600;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Title cannot be blank")]
    BlankTitle,

    #[error("Genre is required")]
    MissingGenre,

    #[error("Length must be positive: {minutes} min")]
    NonPositiveLength { minutes: i32 },

    #[error("Length is too long: {minutes} min > {max} min")]
    LengthTooLong { minutes: i32, max: u32 },

    #[error("Age rating cannot be negative: {rating}")]
    NegativeRating { rating: i32 },

    #[error("Not a recognized age rating: {rating} (expected one of 0, 7, 11, 15, 18)")]
    UnknownRating { rating: i32 },

    #[error("User age cannot be negative: {age}")]
    NegativeAge { age: i32 },

    #[error("Invalid argument {name}: {value}")]
    InvalidArgument { name: &'static str, value: i64 },
}

/// Coarse failure categories, one per kind of bad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTitle,
    InvalidGenre,
    InvalidLength,
    InvalidRating,
    InvalidAge,
    InvalidArgument,
}

impl CatalogError {
    /// Which category this error falls into
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::BlankTitle => ErrorKind::InvalidTitle,
            CatalogError::MissingGenre => ErrorKind::InvalidGenre,
            CatalogError::NonPositiveLength { .. } | CatalogError::LengthTooLong { .. } => {
                ErrorKind::InvalidLength
            }
            CatalogError::NegativeRating { .. } | CatalogError::UnknownRating { .. } => {
                ErrorKind::InvalidRating
            }
            CatalogError::NegativeAge { .. } => ErrorKind::InvalidAge,
            CatalogError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        assert_eq!(CatalogError::BlankTitle.kind(), ErrorKind::InvalidTitle);
        assert_eq!(CatalogError::MissingGenre.kind(), ErrorKind::InvalidGenre);
        assert_eq!(
            CatalogError::NonPositiveLength { minutes: 0 }.kind(),
            ErrorKind::InvalidLength
        );
        assert_eq!(
            CatalogError::LengthTooLong { minutes: 601, max: MAX_LENGTH_MINUTES }.kind(),
            ErrorKind::InvalidLength
        );
        assert_eq!(
            CatalogError::NegativeRating { rating: -1 }.kind(),
            ErrorKind::InvalidRating
        );
        assert_eq!(
            CatalogError::UnknownRating { rating: 12 }.kind(),
            ErrorKind::InvalidRating
        );
        assert_eq!(CatalogError::NegativeAge { age: -1 }.kind(), ErrorKind::InvalidAge);
        assert_eq!(
            CatalogError::InvalidArgument { name: "n", value: 0 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_messages_carry_offending_value() {
        let err = CatalogError::LengthTooLong { minutes: 601, max: 600 };
        assert_eq!(err.to_string(), "Length is too long: 601 min > 600 min");

        let err = CatalogError::UnknownRating { rating: 12 };
        assert!(err.to_string().contains("12"));
    }
}
