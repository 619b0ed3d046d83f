//! Application layer - Commands, handlers and the check-in flow.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `CheckInFlow` is the only stateful service; handlers are stateless.

pub mod check_in_flow;
pub mod handlers;
pub mod session_timer;

pub use check_in_flow::{
    CheckInFlow, FlowDependencies, FlowError, FlowEvent, FlowSettings, FlowUpdate,
    DEFAULT_CAPTURE_SECS,
};
pub use handlers::{
    LoginCommand, LoginHandler, LoginResult, StartSessionCommand, StartSessionHandler,
    StartSessionResult, SubmitEvaluationCommand, SubmitEvaluationHandler, SubmitEvaluationResult,
};
pub use session_timer::{
    start_repeating, CountdownTimer, TimerEvent, TimerHandle, MIN_TICK_INTERVAL,
};
