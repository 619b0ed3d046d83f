//! SubmitEvaluationHandler - Command handler for finishing the questionnaire.

use std::sync::Arc;

use crate::domain::questionnaire::{AnswerSet, QuestionnaireEngine, QuestionnaireError, RawInputs};
use crate::domain::report::Report;
use crate::ports::ReportGenerator;

/// Command to submit the evaluation with the last batch's inputs.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvaluationCommand {
    pub final_inputs: RawInputs,
}

/// Result of a submitted evaluation.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationResult {
    pub report: Report,
    pub answers: AnswerSet,
}

/// Handler for submitting evaluations.
pub struct SubmitEvaluationHandler {
    generator: Arc<dyn ReportGenerator>,
}

impl SubmitEvaluationHandler {
    pub fn new(generator: Arc<dyn ReportGenerator>) -> Self {
        Self { generator }
    }

    /// Records the on-screen batch, then generates the report.
    ///
    /// Nothing is generated if the final inputs are rejected.
    pub fn handle(
        &self,
        engine: &mut QuestionnaireEngine,
        cmd: SubmitEvaluationCommand,
    ) -> Result<SubmitEvaluationResult, QuestionnaireError> {
        let answers = engine.record_current_batch_answers(&cmd.final_inputs)?.clone();
        let report = self.generator.generate(&answers);

        tracing::info!(
            answered = answers.len(),
            risk_tier = %report.risk_tier(),
            "evaluation submitted"
        );
        Ok(SubmitEvaluationResult { report, answers })
    }

    /// Generates a report from whatever has been answered so far.
    pub fn latest(&self, answers: &AnswerSet) -> Report {
        self.generator.generate(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{Emotion, RiskTier};
    use std::sync::Mutex;

    /// Records the answer sets it was asked to evaluate.
    #[derive(Default)]
    struct RecordingGenerator {
        seen: Mutex<Vec<AnswerSet>>,
    }

    impl ReportGenerator for RecordingGenerator {
        fn generate(&self, answers: &AnswerSet) -> Report {
            self.seen.lock().unwrap().push(answers.clone());
            Report::new(Emotion::Thoughtful, RiskTier::Normal)
        }
    }

    fn inputs(pairs: &[(&str, &str)]) -> RawInputs {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn engine_on_last_batch() -> QuestionnaireEngine {
        let mut engine = QuestionnaireEngine::standard().unwrap();
        while engine.advance() {}
        engine
    }

    #[test]
    fn submit_records_final_batch_before_generating() {
        let generator = Arc::new(RecordingGenerator::default());
        let handler = SubmitEvaluationHandler::new(generator.clone());
        let mut engine = engine_on_last_batch();

        let result = handler
            .handle(&mut engine, SubmitEvaluationCommand {
                final_inputs: inputs(&[("trouble-sleeping", "yes")]),
            })
            .unwrap();

        assert!(result.answers.is_yes("trouble-sleeping"));
        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_yes("trouble-sleeping"));
    }

    #[test]
    fn invalid_final_inputs_generate_nothing() {
        let generator = Arc::new(RecordingGenerator::default());
        let handler = SubmitEvaluationHandler::new(generator.clone());
        let mut engine = engine_on_last_batch();

        let result = handler.handle(&mut engine, SubmitEvaluationCommand {
            final_inputs: inputs(&[("trouble-sleeping", "maybe")]),
        });

        assert!(matches!(result, Err(QuestionnaireError::InvalidAnswer { .. })));
        assert!(generator.seen.lock().unwrap().is_empty());
    }
}
