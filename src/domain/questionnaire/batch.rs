//! QuestionBatch - questions presented together as one screening step.

use serde::{Deserialize, Serialize};

use super::{Question, QuestionDefinition, QuestionnaireError};

/// Raw batch as written in a questionnaire definition.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDefinition {
    pub items: Vec<QuestionDefinition>,
}

/// An ordered, non-empty group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBatch {
    questions: Vec<Question>,
}

impl QuestionBatch {
    /// Creates a batch. `index` is only used for error reporting.
    pub fn new(index: usize, questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        if questions.is_empty() {
            return Err(QuestionnaireError::EmptyBatch { index });
        }
        Ok(Self { questions })
    }

    /// Builds a batch from its raw definition, validating every question.
    pub fn from_definition(index: usize, def: BatchDefinition) -> Result<Self, QuestionnaireError> {
        let questions = def
            .items
            .into_iter()
            .map(Question::from_definition)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(index, questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question of this batch by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.question(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(id: &str) -> QuestionDefinition {
        QuestionDefinition {
            id: id.to_string(),
            kind: "yes-no".to_string(),
            text: "Question?".to_string(),
            options: Vec::new(),
            min: None,
            max: None,
            value: None,
            default: None,
        }
    }

    #[test]
    fn empty_batch_is_rejected_with_its_index() {
        let result = QuestionBatch::from_definition(2, BatchDefinition { items: vec![] });
        assert_eq!(result, Err(QuestionnaireError::EmptyBatch { index: 2 }));
    }

    #[test]
    fn invalid_question_fails_the_whole_batch() {
        let mut bad = yes_no("mood");
        bad.kind = "hologram".to_string();
        let result = QuestionBatch::from_definition(0, BatchDefinition {
            items: vec![yes_no("overwhelmed"), bad],
        });
        assert!(matches!(result, Err(QuestionnaireError::UnknownKind { .. })));
    }

    #[test]
    fn lookup_by_id_finds_member_questions_only() {
        let batch = QuestionBatch::from_definition(0, BatchDefinition {
            items: vec![yes_no("overwhelmed"), yes_no("trouble-sleeping")],
        })
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert!(batch.contains("trouble-sleeping"));
        assert!(!batch.contains("sleep-quality"));
    }
}
