//! # Skinmatch CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file
//! only invokes `cli::run()` and maps the outcome to an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/skinmatch-cli/src/cli/)                  │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - config + catalog wiring, dispatch (commands.rs)          │
//! │  - terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/skinmatch/src/api.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward returns plain Rust values. Argument parsing,
//! log setup, printing, and exit codes all happen here.

use std::process::ExitCode;

use colored::Colorize;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
