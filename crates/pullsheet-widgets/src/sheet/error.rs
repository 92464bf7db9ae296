#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building or mounting a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SheetError {
    #[error("sheet height must be finite and greater than zero, got {0}")]
    InvalidHeight(f64),
    #[error("rest fraction must be within [0, 1], got {0}")]
    InvalidRestFraction(f64),
    #[error("close threshold must be finite and non-negative, got {0}")]
    InvalidCloseThreshold(f64),
    #[error("boundary epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
    #[error("sheet was already mounted or dismissed")]
    AlreadyMounted,
}

pub type Result<T> = std::result::Result<T, SheetError>;
