//! LoginHandler - Command handler for the login gate.

use std::sync::Arc;

use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::foundation::{AuthError, CrewMember, Timestamp};
use crate::ports::CredentialVerifier;

/// Command to sign a crew member in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub member: CrewMember,
    pub dashboard: DashboardSnapshot,
}

/// Handler for logging in.
pub struct LoginHandler {
    verifier: Arc<dyn CredentialVerifier>,
}

impl LoginHandler {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Verifies credentials and builds the dashboard as of `now`.
    pub async fn handle(&self, cmd: LoginCommand, now: Timestamp) -> Result<LoginResult, AuthError> {
        let member = self.verifier.verify(&cmd.username, &cmd.password).await?;
        Ok(LoginResult {
            member,
            dashboard: DashboardSnapshot::build(now),
        })
    }
}
