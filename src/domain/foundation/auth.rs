//! Authentication types for the domain layer.
//!
//! The login gate is a stub: a signed-in [`CrewMember`] only proves that a
//! literal username/password pair matched. There are no tokens or sessions.

use super::CrewMemberId;
use thiserror::Error;

/// Crew member who passed the login gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    /// Login name.
    pub id: CrewMemberId,

    /// Name shown in greetings.
    pub display_name: String,
}

impl CrewMember {
    /// Creates a crew member whose display name is the login name.
    pub fn new(id: CrewMemberId) -> Self {
        let display_name = id.as_str().to_string();
        Self { id, display_name }
    }

    /// Overrides the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// Login failures, shown inline on the login page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Username and password are required.")]
    MissingCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_member_defaults_display_name_to_login() {
        let member = CrewMember::new(CrewMemberId::new("vyomanaut").unwrap());
        assert_eq!(member.display_name, "vyomanaut");
    }

    #[test]
    fn crew_member_display_name_can_be_overridden() {
        let member = CrewMember::new(CrewMemberId::new("vyomanaut").unwrap())
            .with_display_name("Commander");
        assert_eq!(member.display_name, "Commander");
    }

    #[test]
    fn invalid_credentials_message_matches_login_page_text() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Please try again."
        );
    }
}
