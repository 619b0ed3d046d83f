//! Emotion label shown at the top of a report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of emotions a report can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Neutral,
    Sad,
    Angry,
    Anxious,
    Tired,
    Thoughtful,
}

impl Emotion {
    /// Every emotion, in display order.
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Happy,
            Emotion::Neutral,
            Emotion::Sad,
            Emotion::Angry,
            Emotion::Anxious,
            Emotion::Tired,
            Emotion::Thoughtful,
        ]
    }

    /// Negative emotions force a stress assessment on their own.
    pub fn is_negative(&self) -> bool {
        matches!(self, Emotion::Sad | Emotion::Angry | Emotion::Anxious)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Neutral => "Neutral",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Anxious => "Anxious",
            Emotion::Tired => "Tired",
            Emotion::Thoughtful => "Thoughtful",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_seven_distinct_emotions() {
        let all = Emotion::all();
        assert_eq!(all.len(), 7);
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn only_sad_angry_and_anxious_are_negative() {
        let negative: Vec<_> = Emotion::all().iter().filter(|e| e.is_negative()).collect();
        assert_eq!(negative, vec![&Emotion::Sad, &Emotion::Angry, &Emotion::Anxious]);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Emotion::Thoughtful.to_string(), "Thoughtful");
    }
}
