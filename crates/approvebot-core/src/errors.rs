//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`approvebot_ghapi_interface::ApiError`].
    ///
    /// Displayed as is, so GitHub's own message reaches the operator.
    #[error("{source}")]
    ApiError {
        source: approvebot_ghapi_interface::ApiError,
    },
}

impl From<approvebot_ghapi_interface::ApiError> for DomainError {
    fn from(e: approvebot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
