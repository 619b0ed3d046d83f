//! Error types for the questionnaire.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building a questionnaire or recording answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("Question '{question}' has unrecognized kind '{kind}'")]
    UnknownKind { question: String, kind: String },

    #[error("Invalid definition for question '{question}': {reason}")]
    InvalidDefinition { question: String, reason: String },

    #[error("Batch {index} has no questions")]
    EmptyBatch { index: usize },

    #[error("Questionnaire has no batches")]
    NoBatches,

    #[error("Question id '{0}' appears more than once")]
    DuplicateQuestion(String),

    #[error("Question '{0}' is not part of the current batch")]
    QuestionNotInBatch(String),

    #[error("Invalid answer for '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("Questionnaire definition could not be parsed: {0}")]
    Parse(String),
}

impl QuestionnaireError {
    pub(crate) fn invalid_definition(question: impl Into<String>, reason: impl Into<String>) -> Self {
        QuestionnaireError::InvalidDefinition {
            question: question.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_answer(question: impl Into<String>, reason: impl Into<String>) -> Self {
        QuestionnaireError::InvalidAnswer {
            question: question.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors that make a questionnaire unusable.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            QuestionnaireError::QuestionNotInBatch(_) | QuestionnaireError::InvalidAnswer { .. }
        )
    }
}

impl From<QuestionnaireError> for DomainError {
    fn from(err: QuestionnaireError) -> Self {
        let code = match &err {
            QuestionnaireError::UnknownKind { .. } => ErrorCode::UnknownQuestionKind,
            QuestionnaireError::QuestionNotInBatch(_) => ErrorCode::QuestionNotInBatch,
            QuestionnaireError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
