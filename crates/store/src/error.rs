use std::time::Duration;

use nexdrive_core::error::CoreError;

use crate::backend::StoreError;

/// Everything a gateway call can resolve to besides success.
///
/// Each variant is a distinct, user-displayable outcome; none are swallowed
/// and none panic. `Timeout` is messaged to the user the same way as
/// `Unavailable` but stays a separate kind for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Save attempted with no resolved, signed-in principal.
    #[error("Sign in first to save builds")]
    Unauthenticated,

    /// A stored document references a key outside the fixed domains.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The store call failed (network/service error).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store call did not complete within the configured deadline.
    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => GatewayError::Unavailable(msg),
        }
    }
}
