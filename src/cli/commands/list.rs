use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

/// Show a table of the boards saved in the store.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let boards = store.list();

    if boards.is_empty() {
        info("No boards saved yet. Create one to get started.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Title", 28),
        Column::new("Characters", 10),
        Column::new("Id", 36),
        Column::new("Created", 24),
    ]);

    for (i, board) in boards.iter().enumerate() {
        let created = if board.created_at.is_empty() {
            "-"
        } else {
            board.created_at.as_str()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            board.title.clone(),
            board.characters.len().to_string(),
            board.id.clone(),
            colorize_optional(created),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
