//! pwstash — A minimal, local password generator and saved-password list.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Dispatching subcommands
//! - Exiting with appropriate status codes
//!
//! All command implementations live in `commands/` and all user interaction
//! helpers live in `ui.rs`.

use clap::Parser;

mod cli;
mod commands;
mod generator;
mod store;
mod ui;

fn main() {
    let cli = cli::Cli::parse();
    commands::dispatch(cli);
}
