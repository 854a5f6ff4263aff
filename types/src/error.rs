use thiserror::Error;

/// Shown when the login endpoint rejects the request without a usable `detail`.
pub const LOGIN_FAILED_MESSAGE: &str = "Error al iniciar sesión";

/// Shown for any non-success response from the analytics endpoint.
pub const DASHBOARD_FAILED_MESSAGE: &str = "Error al cargar datos del dashboard";

/// Bad credentials or an unreachable auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for AuthError {
    fn default() -> Self {
        Self::new(LOGIN_FAILED_MESSAGE)
    }
}

/// Unreachable or failing analytics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FetchError {
    fn default() -> Self {
        Self::new(DASHBOARD_FAILED_MESSAGE)
    }
}

/// The persisted storage refused a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no se pudo guardar la sesión: {message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        Self::new(err.to_string())
    }
}
