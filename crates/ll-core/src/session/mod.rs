//! Session domain module.
//!
//! This module defines the session state record and its pure state machine.

pub mod state;
pub mod state_machine;

pub use state::{AppRoute, Screen, SessionPhase, SessionState};
pub use state_machine::{SessionEvent, SessionStateMachine};
