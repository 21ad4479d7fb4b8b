//! Generate a random password.

use crate::generator::{self, Config, GeneratorError};
use crate::store::{FileStore, SaveOutcome, SavedPasswords};
use crate::ui;

pub fn run(
    length: usize,
    use_letters: bool,
    use_digits: bool,
    use_symbols: bool,
    save: bool,
    copy: bool,
) {
    let config = Config {
        letters: use_letters,
        digits: use_digits,
        symbols: use_symbols,
    };

    let pwd = match generator::generate(&config, length) {
        Ok(pwd) => pwd,
        Err(GeneratorError::EmptyAlphabet) => {
            println!("At least one character class must be enabled.");
            return;
        }
    };

    println!("{}", pwd);

    if save {
        let mut list = SavedPasswords::load(FileStore::new(super::STORE_DIR));
        match list.save(&pwd) {
            Ok(SaveOutcome::Saved) => println!("Added to the saved list."),
            Ok(SaveOutcome::Duplicate) => println!("Already in the saved list."),
            Ok(SaveOutcome::EmptyCandidate) => println!("Nothing to save."),
            Err(e) => {
                println!("Failed to save password: {}", e);
                std::process::exit(1);
            }
        }
    }

    if copy {
        if let Err(e) = ui::copy_to_clipboard_with_timeout(&pwd, 10) {
            println!("Failed to copy to clipboard: {}", e);
        }
    }
}
