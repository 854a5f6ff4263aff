use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::secret_string;

/// Credentials for a single login submission. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Successful login response. Other fields the backend sends are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}
