//! Input validation errors.

use thiserror::Error;

/// Which user-entered field a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    KegType,
    AvailableProduct,
    KegsFilled,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KegType => "keg_type",
            Self::AvailableProduct => "available_product",
            Self::KegsFilled => "kegs_filled",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a calculation before anything is computed or recorded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: Field, value: String },

    #[error("{0} must be a finite number")]
    NotFinite(Field),

    #[error("available_product must be greater than 0 (got {0})")]
    NonPositiveProduct(f64),

    #[error("kegs_filled must not be negative (got {0})")]
    NegativeKegCount(i64),

    #[error("kegs_filled is too large (got {0})")]
    KegCountTooLarge(i64),

    #[error("unknown keg type: {0:?}")]
    UnknownKegType(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
