//! # CLI Layer
//!
//! This module is **one possible client** of the library. It is the only
//! place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides exit codes
//! - Handles argument parsing
//! - Installs a log subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: [`setup`] turns shell arguments into typed commands via clap
//! 2. **Dispatch**: [`commands`] opens the file and runs the command
//! 3. **Output Formatting**: [`render`] builds the text and JSON views

mod commands;
mod render;
mod setup;

pub use commands::run;
