//! Question definitions and per-kind answer parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AnswerValue, QuestionnaireError};
use crate::domain::foundation::QuestionId;

/// Color pre-selected by the color picker.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// The closed set of input kinds a question can use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Drop-down single choice.
    Mcq { options: Vec<String> },
    /// Button group single choice.
    Choice { options: Vec<String> },
    /// Ordered button group single choice.
    Scale { options: Vec<String> },
    /// Emoji picker.
    Emoji { options: Vec<String> },
    /// Image picker; options are image labels.
    Image { options: Vec<String> },
    /// Weather-symbol picker.
    Weather { options: Vec<String> },
    /// Free integer entry within bounds.
    Number { min: i64, max: i64 },
    /// Integer slider within bounds.
    Slider { min: i64, max: i64, default: i64 },
    /// `#rrggbb` color picker.
    Color { default: String },
    /// Yes / No buttons.
    YesNo,
}

impl QuestionKind {
    /// The wire tag used in questionnaire definitions.
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::Mcq { .. } => "mcq",
            QuestionKind::Choice { .. } => "choice",
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::Emoji { .. } => "emoji",
            QuestionKind::Image { .. } => "image",
            QuestionKind::Weather { .. } => "weather",
            QuestionKind::Number { .. } => "number",
            QuestionKind::Slider { .. } => "slider",
            QuestionKind::Color { .. } => "color",
            QuestionKind::YesNo => "yes-no",
        }
    }

    /// Options offered by single-choice kinds; yes/no reports its two buttons.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::Mcq { options }
            | QuestionKind::Choice { options }
            | QuestionKind::Scale { options }
            | QuestionKind::Emoji { options }
            | QuestionKind::Image { options }
            | QuestionKind::Weather { options } => Some(options),
            QuestionKind::YesNo => Some(yes_no_options()),
            _ => None,
        }
    }

    /// Returns true for kinds answered by picking one option.
    pub fn is_single_select(&self) -> bool {
        self.options().is_some()
    }

    /// Bounds for numeric kinds.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match self {
            QuestionKind::Number { min, max } | QuestionKind::Slider { min, max, .. } => {
                Some((*min, *max))
            }
            _ => None,
        }
    }

    /// The value an untouched input shows.
    pub fn default_value(&self) -> Option<AnswerValue> {
        match self {
            QuestionKind::Slider { default, .. } => Some(AnswerValue::Number(*default)),
            QuestionKind::Color { default } => Some(AnswerValue::text(default.clone())),
            _ => None,
        }
    }
}

fn yes_no_options() -> &'static [String] {
    use std::sync::OnceLock;
    static OPTIONS: OnceLock<[String; 2]> = OnceLock::new();
    OPTIONS.get_or_init(|| ["Yes".to_string(), "No".to_string()])
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Raw question as written in a questionnaire definition.
///
/// `kind` is kept as a string so that unrecognized kinds can be reported
/// instead of failing inside the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub value: Option<i64>,
    pub default: Option<String>,
}

/// A validated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    /// Creates a question from already-typed parts.
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Result<Self, QuestionnaireError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionnaireError::invalid_definition(id.as_str(), "prompt text is empty"));
        }
        validate_kind(id.as_str(), &kind)?;
        Ok(Self { id, text, kind })
    }

    /// Builds a question from its raw definition.
    ///
    /// # Errors
    ///
    /// `UnknownKind` for a kind outside the closed set, `InvalidDefinition`
    /// for missing options, missing or inverted bounds, or a bad id.
    pub fn from_definition(def: QuestionDefinition) -> Result<Self, QuestionnaireError> {
        let id = QuestionId::new(def.id.clone())
            .map_err(|e| QuestionnaireError::invalid_definition(&def.id, e.to_string()))?;

        let bounds = |def: &QuestionDefinition| -> Result<(i64, i64), QuestionnaireError> {
            match (def.min, def.max) {
                (Some(min), Some(max)) => Ok((min, max)),
                _ => Err(QuestionnaireError::invalid_definition(
                    &def.id,
                    format!("kind '{}' requires min and max", def.kind),
                )),
            }
        };

        let kind = match def.kind.as_str() {
            "mcq" => QuestionKind::Mcq { options: def.options.clone() },
            "choice" => QuestionKind::Choice { options: def.options.clone() },
            "scale" => QuestionKind::Scale { options: def.options.clone() },
            "emoji" => QuestionKind::Emoji { options: def.options.clone() },
            "image" => QuestionKind::Image { options: def.options.clone() },
            "weather" => QuestionKind::Weather { options: def.options.clone() },
            "number" => {
                let (min, max) = bounds(&def)?;
                QuestionKind::Number { min, max }
            }
            "slider" => {
                let (min, max) = bounds(&def)?;
                QuestionKind::Slider {
                    min,
                    max,
                    default: def.value.unwrap_or(min),
                }
            }
            "color" => QuestionKind::Color {
                default: def.default.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            },
            "yes-no" => QuestionKind::YesNo,
            other => {
                return Err(QuestionnaireError::UnknownKind {
                    question: def.id.clone(),
                    kind: other.to_string(),
                })
            }
        };

        Self::new(id, def.text, kind)
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Parses the on-screen input for this question into an answer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAnswer` when the input does not fit the kind.
    pub fn parse_answer(&self, raw: &str) -> Result<AnswerValue, QuestionnaireError> {
        let raw = raw.trim();
        let question = self.id.as_str();

        match &self.kind {
            QuestionKind::YesNo => match raw.to_ascii_lowercase().as_str() {
                "yes" | "y" => Ok(AnswerValue::text("Yes")),
                "no" | "n" => Ok(AnswerValue::text("No")),
                _ => Err(QuestionnaireError::invalid_answer(question, "expected Yes or No")),
            },
            QuestionKind::Number { min, max } | QuestionKind::Slider { min, max, .. } => {
                let n: i64 = raw.parse().map_err(|_| {
                    QuestionnaireError::invalid_answer(question, format!("'{}' is not a whole number", raw))
                })?;
                if n < *min || n > *max {
                    return Err(QuestionnaireError::invalid_answer(
                        question,
                        format!("{} is outside {}..={}", n, min, max),
                    ));
                }
                Ok(AnswerValue::Number(n))
            }
            QuestionKind::Color { .. } => {
                if is_hex_color(raw) {
                    Ok(AnswerValue::text(raw.to_ascii_lowercase()))
                } else {
                    Err(QuestionnaireError::invalid_answer(question, "expected a color as #rrggbb"))
                }
            }
            kind => {
                let options = kind.options().unwrap_or(&[]);
                options
                    .iter()
                    .find(|option| option.as_str() == raw)
                    .map(|option| AnswerValue::text(option.clone()))
                    .ok_or_else(|| {
                        QuestionnaireError::invalid_answer(
                            question,
                            format!("'{}' is not one of the offered options", raw),
                        )
                    })
            }
        }
    }
}

fn validate_kind(id: &str, kind: &QuestionKind) -> Result<(), QuestionnaireError> {
    match kind {
        QuestionKind::Number { min, max } if min > max => Err(QuestionnaireError::invalid_definition(
            id,
            format!("min {} exceeds max {}", min, max),
        )),
        QuestionKind::Slider { min, max, default } => {
            if min > max {
                return Err(QuestionnaireError::invalid_definition(
                    id,
                    format!("min {} exceeds max {}", min, max),
                ));
            }
            if default < min || default > max {
                return Err(QuestionnaireError::invalid_definition(
                    id,
                    format!("default {} is outside {}..={}", default, min, max),
                ));
            }
            Ok(())
        }
        QuestionKind::Color { default } if !is_hex_color(default) => Err(
            QuestionnaireError::invalid_definition(id, format!("default color '{}' is not #rrggbb", default)),
        ),
        QuestionKind::YesNo => Ok(()),
        other => match other.options() {
            Some(options) if options.is_empty() => Err(QuestionnaireError::invalid_definition(
                id,
                format!("kind '{}' requires at least one option", other.tag()),
            )),
            _ => Ok(()),
        },
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, kind: &str) -> QuestionDefinition {
        QuestionDefinition {
            id: id.to_string(),
            kind: kind.to_string(),
            text: format!("Prompt for {}", id),
            options: Vec::new(),
            min: None,
            max: None,
            value: None,
            default: None,
        }
    }

    fn slider(min: i64, max: i64, value: i64) -> Question {
        Question::from_definition(QuestionDefinition {
            min: Some(min),
            max: Some(max),
            value: Some(value),
            ..def("sleep-quality", "slider")
        })
        .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // construction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unknown_kind_is_rejected_at_construction() {
        let result = Question::from_definition(def("mood", "hologram"));
        assert_eq!(
            result,
            Err(QuestionnaireError::UnknownKind {
                question: "mood".to_string(),
                kind: "hologram".to_string(),
            })
        );
    }

    #[test]
    fn choice_kinds_require_options() {
        for kind in ["mcq", "choice", "scale", "emoji", "image", "weather"] {
            let result = Question::from_definition(def("q", kind));
            assert!(
                matches!(result, Err(QuestionnaireError::InvalidDefinition { .. })),
                "kind {} accepted without options",
                kind
            );
        }
    }

    #[test]
    fn numeric_kinds_require_bounds() {
        assert!(Question::from_definition(def("sleep-hours", "number")).is_err());
        assert!(Question::from_definition(def("rested", "slider")).is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let result = Question::from_definition(QuestionDefinition {
            min: Some(10),
            max: Some(1),
            ..def("sleep-hours", "number")
        });
        assert!(matches!(result, Err(QuestionnaireError::InvalidDefinition { .. })));
    }

    #[test]
    fn slider_default_must_be_within_bounds() {
        let result = Question::from_definition(QuestionDefinition {
            min: Some(1),
            max: Some(10),
            value: Some(11),
            ..def("rested", "slider")
        });
        assert!(result.is_err());
    }

    #[test]
    fn color_defaults_to_picker_blue() {
        let q = Question::from_definition(def("mood-color", "color")).unwrap();
        assert_eq!(q.kind().default_value(), Some(AnswerValue::text(DEFAULT_COLOR)));
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let result = Question::from_definition(QuestionDefinition {
            text: "  ".to_string(),
            ..def("overwhelmed", "yes-no")
        });
        assert!(result.is_err());
    }

    // ───────────────────────────────────────────────────────────────
    // parse_answer
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn yes_no_accepts_case_insensitive_input() {
        let q = Question::from_definition(def("overwhelmed", "yes-no")).unwrap();
        assert_eq!(q.parse_answer("YES").unwrap(), AnswerValue::text("Yes"));
        assert_eq!(q.parse_answer(" n ").unwrap(), AnswerValue::text("No"));
        assert!(q.parse_answer("maybe").is_err());
    }

    #[test]
    fn slider_enforces_bounds() {
        let q = slider(1, 10, 5);
        assert_eq!(q.parse_answer("3").unwrap(), AnswerValue::Number(3));
        assert!(q.parse_answer("0").is_err());
        assert!(q.parse_answer("11").is_err());
        assert!(q.parse_answer("five").is_err());
    }

    #[test]
    fn choice_requires_exact_option() {
        let q = Question::from_definition(QuestionDefinition {
            options: vec!["Withdraw".into(), "Seek Support".into()],
            ..def("coping-style", "choice")
        })
        .unwrap();
        assert_eq!(q.parse_answer("Seek Support").unwrap(), AnswerValue::text("Seek Support"));
        assert!(q.parse_answer("Run").is_err());
    }

    #[test]
    fn color_normalizes_to_lowercase() {
        let q = Question::from_definition(def("mood-color", "color")).unwrap();
        assert_eq!(q.parse_answer("#FFAA00").unwrap(), AnswerValue::text("#ffaa00"));
        assert!(q.parse_answer("orange").is_err());
    }

    #[test]
    fn yes_no_reports_its_buttons_as_options() {
        let q = Question::from_definition(def("overwhelmed", "yes-no")).unwrap();
        assert_eq!(q.kind().options().unwrap(), &["Yes".to_string(), "No".to_string()]);
        assert!(q.kind().is_single_select());
    }
}
