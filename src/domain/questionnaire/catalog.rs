//! Questionnaire definitions in YAML form.
//!
//! The standard screening ships embedded in the binary. Definitions are
//! parsed through the same validating constructors as hand-built batches, so
//! an unrecognized question kind fails here rather than rendering nothing.

use serde::Deserialize;

use super::{BatchDefinition, QuestionBatch, QuestionnaireEngine, QuestionnaireError};

const STANDARD_QUESTIONNAIRE: &str = include_str!("standard_questionnaire.yaml");

/// Ids of the standard questions that feed the report policy.
pub mod ids {
    pub const OVERWHELMED: &str = "overwhelmed";
    pub const SLEEP_QUALITY: &str = "sleep-quality";
    pub const TROUBLE_SLEEPING: &str = "trouble-sleeping";
}

#[derive(Debug, Deserialize)]
struct QuestionnaireDefinition {
    batches: Vec<BatchDefinition>,
}

/// Parses a YAML questionnaire into validated batches.
pub fn parse_yaml(source: &str) -> Result<Vec<QuestionBatch>, QuestionnaireError> {
    let def: QuestionnaireDefinition =
        serde_yaml::from_str(source).map_err(|e| QuestionnaireError::Parse(e.to_string()))?;

    def.batches
        .into_iter()
        .enumerate()
        .map(|(index, batch)| QuestionBatch::from_definition(index, batch))
        .collect()
}

/// The built-in four-batch screening.
pub fn standard_batches() -> Result<Vec<QuestionBatch>, QuestionnaireError> {
    parse_yaml(STANDARD_QUESTIONNAIRE)
}

impl QuestionnaireEngine {
    /// Engine over the built-in screening.
    pub fn standard() -> Result<Self, QuestionnaireError> {
        Self::new(standard_batches()?)
    }

    /// Engine over a YAML definition.
    pub fn from_yaml(source: &str) -> Result<Self, QuestionnaireError> {
        Self::new(parse_yaml(source)?)
    }
}
