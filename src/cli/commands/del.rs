use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(id: &str, yes: bool, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg);
    let board = store
        .get(id)
        .ok_or_else(|| AppError::BoardNotFound(id.to_string()))?;

    let prompt = format!(
        "Delete board \"{}\" ({} characters)? This action is irreversible.",
        board.title,
        board.characters.len()
    );

    if !yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    if store.delete(id)? {
        success(format!("Board \"{}\" has been deleted.", board.title));
    }
    Ok(())
}
