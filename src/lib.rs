//! MAITRI - Crew Wellness Check-In
//!
//! A single-operator check-in: a stub login gate, a timed capture session,
//! a four-step screening questionnaire and a placeholder risk report. The
//! report is randomized; nothing here analyzes audio or video.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
