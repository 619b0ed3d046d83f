//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle enums (such as [`CheckInPhase`](super::CheckInPhase)) a
//! single vocabulary for checking and performing transitions.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define the valid transitions and get a validated
/// `transition_to` for free.
///
/// ```ignore
/// let next = CheckInPhase::Capturing.transition_to(CheckInPhase::Evaluating)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
