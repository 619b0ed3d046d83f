//! Questionnaire module - screening questions, answers and navigation.

mod answers;
mod batch;
pub mod catalog;
mod engine;
mod errors;
mod question;

pub use answers::{AnswerSet, AnswerValue, RawInputs};
pub use batch::{BatchDefinition, QuestionBatch};
pub use engine::QuestionnaireEngine;
pub use errors::QuestionnaireError;
pub use question::{Question, QuestionDefinition, QuestionKind, DEFAULT_COLOR};
