//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

mod login;
mod start_session;
mod submit_evaluation;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
pub use submit_evaluation::{
    SubmitEvaluationCommand, SubmitEvaluationHandler, SubmitEvaluationResult,
};
