//! Random password generation.
//!
//! This module is the generation core of pwstash. It knows nothing about
//! the terminal, the clipboard, or persistence: callers pass in a
//! [`Config`] describing which character classes are enabled and get back
//! a freshly sampled password or an error.
//!
//! Responsibilities:
//! - Building the candidate alphabet from the enabled character classes
//! - Sampling each character uniformly from that alphabet
//! - Rejecting configurations with no enabled class
//!
//! Randomness comes from the operating system CSPRNG.

use rand::Rng;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()";

/// Default length of a generated password.
pub const DEFAULT_LENGTH: usize = 12;

/// Character classes enabled for generation.
///
/// Each flag is independent. At least one must be set for [`generate`]
/// to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Include letters (A-Z and a-z)
    pub letters: bool,

    /// Include digits (0-9)
    pub digits: bool,

    /// Include symbols (!@#$%^&*())
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letters: true,
            digits: true,
            symbols: true,
        }
    }
}

impl Config {
    /// Concatenate the enabled character classes into the sampling
    /// alphabet.
    ///
    /// Class order is fixed: letters, then digits, then symbols. The
    /// result is empty when every flag is disabled.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.letters {
            alphabet.push_str(LETTERS);
        }
        if self.digits {
            alphabet.push_str(DIGITS);
        }
        if self.symbols {
            alphabet.push_str(SYMBOLS);
        }
        alphabet
    }
}

/// Errors from password generation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Every character class is disabled, leaving nothing to sample from.
    #[error("no character classes enabled")]
    EmptyAlphabet,
}

/// Generate a random password of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from the alphabet
/// described by `config`, sampling with replacement. The draw uses the
/// OS random source via an unbiased range sample.
///
/// # Arguments
///
/// - `config` — The enabled character classes
/// - `length` — Number of characters to generate
///
/// # Errors
///
/// Returns [`GeneratorError::EmptyAlphabet`] if no character class is
/// enabled. Callers must handle this explicitly; an empty password is
/// never returned.
pub fn generate(config: &Config, length: usize) -> Result<String, GeneratorError> {
    let alphabet = config.alphabet();
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }

    // every class is ASCII, so byte indexing is safe
    let bytes = alphabet.as_bytes();
    let mut rng = rand::rngs::OsRng;

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.gen_range(0..bytes.len());
        out.push(bytes[idx] as char);
    }
    Ok(out)
}
