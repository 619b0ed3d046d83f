//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the MAITRI check-in domain.

mod auth;
mod check_in_phase;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, CrewMember};
pub use check_in_phase::CheckInPhase;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CheckInId, CrewMemberId, QuestionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
