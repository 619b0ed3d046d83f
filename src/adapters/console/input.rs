//! Console command parsing.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::questionnaire::{Question, QuestionKind};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    View(String),
    /// 1-based dashboard shortcut number.
    Shortcut(usize),
    Start,
    Finish,
    Answer { question: String, value: String },
    Next,
    Back,
    Submit,
    Report,
    Export,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(username), Some(password), None) => Ok(Command::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err(InputError::Usage("login <username> <password>")),
                }
            }
            "logout" => Ok(Command::Logout),
            "view" if !rest.is_empty() => Ok(Command::View(rest.to_string())),
            "view" => Err(InputError::Usage("view <dashboard|upcoming|history|resources>")),
            "shortcut" => rest
                .parse()
                .map(Command::Shortcut)
                .map_err(|_| InputError::Usage("shortcut <1-4>")),
            "start" => Ok(Command::Start),
            "finish" => Ok(Command::Finish),
            "answer" => match rest.split_once(char::is_whitespace) {
                Some((question, value)) if !value.trim().is_empty() => Ok(Command::Answer {
                    question: question.to_string(),
                    value: value.trim().to_string(),
                }),
                _ => Err(InputError::Usage("answer <question-id> <value>")),
            },
            "next" => Ok(Command::Next),
            "back" => Ok(Command::Back),
            "submit" => Ok(Command::Submit),
            "report" => Ok(Command::Report),
            "export" => Ok(Command::Export),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

/// Maps a 1-based option number onto the option text for choice kinds.
///
/// Anything else passes through untouched and is validated by the question.
pub fn resolve_answer(question: &Question, raw: &str) -> String {
    let Some(options) = question.kind().options() else {
        return raw.to_string();
    };
    if matches!(question.kind(), QuestionKind::YesNo) {
        return raw.to_string();
    }

    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .cloned()
        .unwrap_or_else(|| raw.to_string())
}
