//! Add a password to the saved list.

use crate::store::{FileStore, SaveOutcome, SavedPasswords};

pub fn run(password: String) {
    let mut list = SavedPasswords::load(FileStore::new(super::STORE_DIR));

    match list.save(&password) {
        Ok(SaveOutcome::Saved) => println!("Saved."),
        Ok(SaveOutcome::Duplicate) => println!("Already in the saved list."),
        Ok(SaveOutcome::EmptyCandidate) => println!("Nothing to save."),
        Err(e) => {
            println!("Failed to save password: {}", e);
            std::process::exit(1);
        }
    }
}
