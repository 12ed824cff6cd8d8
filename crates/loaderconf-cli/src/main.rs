//! # loaderconf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and turns the outcome into an exit status.
//!
//! ## Workspace Structure
//!
//! - `crates/loaderconf/` — library with the parser, document model and
//!   load/save policy
//! - `crates/loaderconf-cli/` — this CLI tool, depends on the library
//!
//! Everything in the library is UI agnostic. The CLI layer is responsible for
//! **all** user-facing concerns: argument parsing, log setup, dispatch, error
//! reporting, and rendering.
//!
//! ## Exit Status
//!
//! - `0` — success
//! - `1` — error (unknown attribute, invalid value, unreadable or unwritable file)
//! - `2` — the file could not be written for lack of permission; nothing changed

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
