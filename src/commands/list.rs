//! List all saved passwords.

use crate::store::{FileStore, SavedPasswords};

pub fn run() {
    let list = SavedPasswords::load(FileStore::new(super::STORE_DIR));

    if list.passwords().is_empty() {
        println!("No saved passwords.");
        return;
    }

    println!("Saved passwords:");
    for pwd in list.passwords() {
        println!("- {}", pwd);
    }
}
