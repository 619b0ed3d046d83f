//! Terminal front end: command parsing, page rendering and the event loop.

mod app;
mod input;
pub mod render;

pub use app::{ConsoleApp, Reply};
pub use input::{resolve_answer, Command, InputError};
