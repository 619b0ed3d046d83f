//! QuestionnaireEngine - batch navigation and answer recording.
//!
//! Owns the ordered batches, the index of the batch on screen, and the
//! answers collected so far. All navigation goes through this type.
//!
//! # Navigation
//!
//! ```ignore
//! let mut engine = QuestionnaireEngine::standard()?;
//! engine.record_current_batch_answers(&inputs)?;
//! engine.advance();                 // true, now on batch 2 of 4
//! assert_eq!(engine.progress().value(), 50);
//! engine.retreat();                 // back to batch 1, answers kept
//! ```

use std::collections::HashSet;

use super::{AnswerSet, AnswerValue, Question, QuestionBatch, QuestionnaireError, RawInputs};
use crate::domain::foundation::Percentage;

/// State of one questionnaire: batches, position, and answers.
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    batches: Vec<QuestionBatch>,
    current_index: usize,
    answers: AnswerSet,
    restore_previous_answers: bool,
}

impl QuestionnaireEngine {
    /// Creates an engine positioned on the first batch with no answers.
    ///
    /// # Errors
    ///
    /// `NoBatches` if `batches` is empty, `DuplicateQuestion` if two
    /// questions share an id anywhere in the questionnaire.
    pub fn new(batches: Vec<QuestionBatch>) -> Result<Self, QuestionnaireError> {
        if batches.is_empty() {
            return Err(QuestionnaireError::NoBatches);
        }

        let mut seen = HashSet::new();
        for question in batches.iter().flat_map(|b| b.questions()) {
            if !seen.insert(question.id().as_str()) {
                return Err(QuestionnaireError::DuplicateQuestion(question.id().to_string()));
            }
        }

        Ok(Self {
            batches,
            current_index: 0,
            answers: AnswerSet::new(),
            restore_previous_answers: true,
        })
    }

    /// Controls whether re-rendered batches pre-select recorded answers.
    pub fn with_answer_restoration(mut self, enabled: bool) -> Self {
        self.restore_previous_answers = enabled;
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Position
    // ───────────────────────────────────────────────────────────────

    /// The batch currently on screen.
    pub fn current_batch(&self) -> &QuestionBatch {
        &self.batches[self.current_index]
    }

    /// 0-based index of the batch on screen.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    pub fn batches(&self) -> &[QuestionBatch] {
        &self.batches
    }

    /// True on the first batch (hides the back control).
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// True on the last batch (swaps next for submit).
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.batches.len()
    }

    /// `(current_index + 1) / batch_count` as a percentage.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.current_index + 1, self.batches.len())
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves to the next batch. Returns false (and does nothing) on the last.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous batch. Returns false (and does nothing) on the first.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Starts a new evaluation: first batch, no answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
    }

    // ───────────────────────────────────────────────────────────────
    // Answers
    // ───────────────────────────────────────────────────────────────

    /// Records the on-screen inputs of the current batch.
    ///
    /// Every supplied input is parsed against its question; the answer set is
    /// only touched once all of them are valid. Questions without an input
    /// keep whatever value they already had.
    ///
    /// # Errors
    ///
    /// `QuestionNotInBatch` for an id outside the current batch,
    /// `InvalidAnswer` for an input that does not fit its question.
    pub fn record_current_batch_answers(
        &mut self,
        inputs: &RawInputs,
    ) -> Result<&AnswerSet, QuestionnaireError> {
        let batch = &self.batches[self.current_index];

        if let Some(foreign) = inputs.keys().find(|id| !batch.contains(id)) {
            return Err(QuestionnaireError::QuestionNotInBatch(foreign.clone()));
        }

        let mut parsed = Vec::with_capacity(inputs.len());
        for question in batch.questions() {
            if let Some(raw) = inputs.get(question.id().as_str()) {
                parsed.push((question.id().clone(), question.parse_answer(raw)?));
            }
        }

        for (id, value) in parsed {
            self.answers.insert(id, value);
        }
        Ok(&self.answers)
    }

    /// Answers collected so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Value a re-rendered input should start with.
    ///
    /// The recorded answer when restoration is enabled, otherwise the kind's
    /// default (slider start value, picker color), otherwise nothing.
    pub fn prefill(&self, question: &Question) -> Option<AnswerValue> {
        if self.restore_previous_answers {
            if let Some(value) = self.answers.get(question.id().as_str()) {
                return Some(value.clone());
            }
        }
        question.kind().default_value()
    }

    /// Finds a question anywhere in the questionnaire with its batch index.
    pub fn find_question(&self, id: &str) -> Option<(usize, &Question)> {
        self.batches
            .iter()
            .enumerate()
            .find_map(|(idx, batch)| batch.question(id).map(|q| (idx, q)))
    }
}
