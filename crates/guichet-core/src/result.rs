//! Convenience result type alias for Guichet.

use crate::error::AppError;

/// A specialized `Result` type for Guichet operations.
pub type AppResult<T> = Result<T, AppError>;
