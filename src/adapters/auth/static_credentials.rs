//! StaticCredentialVerifier - single configured username/password pair.
//!
//! This is a demo gate, not authentication: there is no hashing, no rate
//! limiting and no session token. The password is held in a `SecretString`
//! so it stays out of debug output, and compared in constant time.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{AuthError, CrewMember, CrewMemberId};
use crate::ports::CredentialVerifier;

/// Default crew login for the demo.
pub const DEFAULT_USERNAME: &str = "vyomanaut";
pub const DEFAULT_PASSWORD: &str = "gagan2025";

#[derive(Debug)]
pub struct StaticCredentialVerifier {
    username: String,
    password: SecretString,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, SecretString::new(DEFAULT_PASSWORD.to_string()))
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<CrewMember, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user_ok: bool = username.as_bytes().ct_eq(self.username.as_bytes()).into();
        let pass_ok: bool = password
            .as_bytes()
            .ct_eq(self.password.expose_secret().as_bytes())
            .into();

        if !(user_ok && pass_ok) {
            tracing::info!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let id = CrewMemberId::new(username).map_err(|_| AuthError::MissingCredentials)?;
        tracing::info!(username, "crew member logged in");
        Ok(CrewMember::new(id))
    }
}
