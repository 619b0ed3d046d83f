//! ReportGenerator port - turns collected answers into a report.
//!
//! The shipped adapter is a randomized placeholder. A real affect model
//! would implement the same trait without touching the check-in flow.

use crate::domain::questionnaire::AnswerSet;
use crate::domain::report::Report;

/// Port for producing an evaluation report.
///
/// Implementations must:
/// - Accept any answer set, including an empty one
/// - Return a report whose recommendation matches its risk tier
pub trait ReportGenerator: Send + Sync {
    fn generate(&self, answers: &AnswerSet) -> Report;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{Emotion, RiskTier};

    struct FixedGenerator(RiskTier);

    impl ReportGenerator for FixedGenerator {
        fn generate(&self, _answers: &AnswerSet) -> Report {
            Report::new(Emotion::Neutral, self.0)
        }
    }

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ReportGenerator) {}

    #[test]
    fn generator_usable_behind_dyn() {
        let generator: Box<dyn ReportGenerator> = Box::new(FixedGenerator(RiskTier::Stressed));
        let report = generator.generate(&AnswerSet::new());
        assert_eq!(report.risk_tier(), RiskTier::Stressed);
    }
}
