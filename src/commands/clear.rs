//! Delete all saved passwords.

use crate::store::{FileStore, SavedPasswords};
use crate::ui;

pub fn run(force: bool) {
    if !force && !ui::prompt_yes("Delete all saved passwords?") {
        println!("Aborted.");
        return;
    }

    let mut list = SavedPasswords::load(FileStore::new(super::STORE_DIR));
    if let Err(e) = list.clear() {
        println!("Failed to clear saved passwords: {}", e);
        std::process::exit(1);
    }

    println!("Saved passwords deleted.");
}
