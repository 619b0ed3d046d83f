//! CheckInPhase enum for the capture -> evaluation -> report lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Where the signed-in crew member is in the current check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckInPhase {
    /// No check-in running.
    #[default]
    Idle,
    /// Capture window open, countdown running.
    Capturing,
    /// Questionnaire in progress.
    Evaluating,
    /// Report generated for the last evaluation.
    Reported,
}

impl CheckInPhase {
    /// Returns true while a capture window is open.
    pub fn is_capturing(&self) -> bool {
        matches!(self, CheckInPhase::Capturing)
    }

    /// Returns true while answers may be recorded.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, CheckInPhase::Evaluating)
    }
}

impl StateMachine for CheckInPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CheckInPhase::*;
        matches!(
            (self, target),
            (Idle, Capturing)
                | (Capturing, Evaluating)
                | (Capturing, Idle)
                | (Evaluating, Reported)
                | (Evaluating, Capturing)
                | (Evaluating, Idle)
                | (Reported, Capturing)
                | (Reported, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CheckInPhase::*;
        match self {
            Idle => vec![Capturing],
            Capturing => vec![Evaluating, Idle],
            Evaluating => vec![Reported, Capturing, Idle],
            Reported => vec![Capturing, Idle],
        }
    }
}

impl fmt::Display for CheckInPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckInPhase::Idle => "Idle",
            CheckInPhase::Capturing => "Capturing",
            CheckInPhase::Evaluating => "Evaluating",
            CheckInPhase::Reported => "Reported",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(CheckInPhase::default(), CheckInPhase::Idle);
    }

    #[test]
    fn capture_must_precede_evaluation() {
        assert!(CheckInPhase::Idle.transition_to(CheckInPhase::Evaluating).is_err());
        assert_eq!(
            CheckInPhase::Capturing.transition_to(CheckInPhase::Evaluating),
            Ok(CheckInPhase::Evaluating)
        );
    }

    #[test]
    fn capturing_cannot_restart_itself() {
        assert!(!CheckInPhase::Capturing.can_transition_to(&CheckInPhase::Capturing));
    }

    #[test]
    fn every_phase_can_reach_idle_except_idle() {
        for phase in [
            CheckInPhase::Capturing,
            CheckInPhase::Evaluating,
            CheckInPhase::Reported,
        ] {
            assert!(phase.can_transition_to(&CheckInPhase::Idle));
        }
        assert!(!CheckInPhase::Idle.can_transition_to(&CheckInPhase::Idle));
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for phase in [
            CheckInPhase::Idle,
            CheckInPhase::Capturing,
            CheckInPhase::Evaluating,
            CheckInPhase::Reported,
        ] {
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn only_evaluating_accepts_answers() {
        assert!(CheckInPhase::Evaluating.accepts_answers());
        assert!(!CheckInPhase::Reported.accepts_answers());
        assert!(CheckInPhase::Capturing.is_capturing());
    }
}
