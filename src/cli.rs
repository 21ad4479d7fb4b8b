//! Command-line interface definitions for pwstash.
//!
//! This module defines the public CLI surface of pwstash using `clap`.
//! It contains no application logic and exists solely to describe how
//! users interact with the program from the terminal.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pwstash",
    version = "0.1",
    about = "A minimal, local password generator and saved-password list",
    long_about = r#"
pwstash is a small, local-first password generator with a saved list.

Generated passwords can be printed, copied to the clipboard, and kept in
a plain list stored in a single file in the working directory. pwstash
does not use the network, does not run background services, and does not
depend on external infrastructure.

Typical usage:
  pwstash gen
  pwstash gen --save --copy
  pwstash list
  pwstash clear

Notes:
- Passwords are sampled from the OS random source
- The saved list is stored in plain text; treat the file accordingly
- Saving the same password twice keeps a single copy
"#,
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random password
    ///
    /// By default, generates a 12-character password using letters,
    /// digits, and symbols. At least one character class must remain
    /// enabled.
    Gen {
        /// Length of the generated password
        #[arg(short, long, default_value_t = crate::generator::DEFAULT_LENGTH)]
        length: usize,

        /// Exclude letters (A-Z, a-z)
        #[arg(long)]
        no_letters: bool,

        /// Exclude digits (0-9)
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols (!@#$%^&*())
        #[arg(long)]
        no_symbols: bool,

        /// Add the generated password to the saved list
        #[arg(short, long)]
        save: bool,

        /// Copy the generated password to the clipboard for 10 seconds
        #[arg(short, long)]
        copy: bool,
    },

    /// Add a password to the saved list
    ///
    /// The saved list preserves insertion order and keeps a single
    /// copy of each value; saving a password that is already in the
    /// list is a no-op.
    Save {
        /// Password to save
        password: String,
    },

    /// List all saved passwords
    ///
    /// Passwords are printed in the order they were saved.
    List,

    /// Delete all saved passwords
    ///
    /// Removes the saved list from disk. This action cannot be undone.
    Clear {
        /// Delete without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}
