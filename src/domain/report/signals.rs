//! Stress signals read from an answer set.
//!
//! Any single signal is enough to move an assessment out of the Normal tier.

use super::Emotion;
use crate::domain::questionnaire::catalog::ids;
use crate::domain::questionnaire::AnswerSet;

/// Sleep-quality ratings below this value count as a stress signal.
pub const DEFAULT_SLEEP_QUALITY_THRESHOLD: i64 = 4;

/// Which stress signals fired for one assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StressSignals {
    pub negative_emotion: bool,
    pub overwhelmed: bool,
    pub poor_sleep_quality: bool,
    pub trouble_sleeping: bool,
}

impl StressSignals {
    /// Evaluates the answers and detected emotion against the trigger rules.
    ///
    /// Unanswered questions never trigger.
    pub fn evaluate(answers: &AnswerSet, emotion: Emotion, sleep_quality_threshold: i64) -> Self {
        Self {
            negative_emotion: emotion.is_negative(),
            overwhelmed: answers.is_yes(ids::OVERWHELMED),
            poor_sleep_quality: answers
                .number(ids::SLEEP_QUALITY)
                .is_some_and(|q| q < sleep_quality_threshold),
            trouble_sleeping: answers.is_yes(ids::TROUBLE_SLEEPING),
        }
    }

    pub fn any(&self) -> bool {
        self.negative_emotion || self.overwhelmed || self.poor_sleep_quality || self.trouble_sleeping
    }
}
