//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::IdentityError;

/// Failure to bind an identity to a connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindIdentityError {
    #[error("Unknown identity '{0}'")]
    UnknownIdentity(String),

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<IdentityError> for BindIdentityError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::NotFound(token) => BindIdentityError::UnknownIdentity(token),
            IdentityError::Upstream(reason) => BindIdentityError::ProviderUnavailable(reason),
        }
    }
}

/// Failure to read the chat history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadHistoryError {
    #[error("History store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Failure to look up a username
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupUsernameError {
    #[error("User '{0}' not found")]
    NotFound(String),

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<IdentityError> for LookupUsernameError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::NotFound(token) => LookupUsernameError::NotFound(token),
            IdentityError::Upstream(reason) => LookupUsernameError::ProviderUnavailable(reason),
        }
    }
}
