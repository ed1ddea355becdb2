//! Little Lemon session core: bootstrap and command-line harness.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use commands::{run_command, StatusView};
