//! CredentialVerifier port - the login gate.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CrewMember};

/// Verifies a username/password pair.
///
/// # Contract
///
/// Implementations must:
/// - Return the crew member on a match
/// - Return `AuthError::MissingCredentials` if either field is blank
/// - Return `AuthError::InvalidCredentials` otherwise
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<CrewMember, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CrewMemberId;

    struct AcceptAll;

    #[async_trait]
    impl CredentialVerifier for AcceptAll {
        async fn verify(&self, username: &str, _password: &str) -> Result<CrewMember, AuthError> {
            let id = CrewMemberId::new(username).map_err(|_| AuthError::MissingCredentials)?;
            Ok(CrewMember::new(id))
        }
    }

    #[tokio::test]
    async fn verifier_usable_behind_dyn() {
        let verifier: Box<dyn CredentialVerifier> = Box::new(AcceptAll);
        let member = verifier.verify("vyomanaut", "x").await.unwrap();
        assert_eq!(member.id.as_str(), "vyomanaut");
        assert_eq!(
            verifier.verify("", "x").await.unwrap_err(),
            AuthError::MissingCredentials
        );
    }
}
