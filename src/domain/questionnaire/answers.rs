//! Answer values and the per-evaluation answer set.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Raw on-screen input state for one batch: question id -> entered text.
pub type RawInputs = HashMap<String, String>;

/// A recorded answer: free text / selected option, or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
}

impl AnswerValue {
    /// Creates a text answer.
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// Returns the text value, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a number answer.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }

    /// Returns true for an affirmative yes/no answer.
    pub fn is_yes(&self) -> bool {
        self.as_text() == Some("Yes")
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Answers collected during one evaluation, at most one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous value for the same question.
    pub fn insert(&mut self, question: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.values.insert(question, value)
    }

    /// Returns the value recorded for a question.
    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        self.values.get(question)
    }

    /// Returns true if the question has a recorded value.
    pub fn contains(&self, question: &str) -> bool {
        self.values.contains_key(question)
    }

    /// Shorthand for a yes/no answer being `Yes`.
    pub fn is_yes(&self, question: &str) -> bool {
        self.get(question).is_some_and(AnswerValue::is_yes)
    }

    /// Returns a numeric answer.
    pub fn number(&self, question: &str) -> Option<i64> {
        self.get(question).and_then(AnswerValue::as_number)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
