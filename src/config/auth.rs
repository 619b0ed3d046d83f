//! Login gate configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// The single crew login accepted by the gate
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__USERNAME"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> SecretString {
    SecretString::new(DEFAULT_PASSWORD.to_string())
}
