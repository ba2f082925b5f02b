use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::export::read_board;
use crate::core::ids::IdGenerator;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Load a board file into the store.
///
/// Boards without an id or creation date get fresh ones. An existing board
/// with the same id is only replaced with `force`.
pub fn handle(file: &str, force: bool, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg);
    let mut board = read_board(&expand_tilde(file), store.defaults())?;

    if board.characters.is_empty() {
        return Err(AppError::EmptyBoard("importing"));
    }

    let mut ids = IdGenerator::system();
    match (board.id.is_empty(), board.created_at.is_empty()) {
        (true, true) => {
            let (id, created_at) = ids.board_identity(&board.title);
            board.id = id;
            board.created_at = created_at;
        }
        (true, false) => board.id = ids.board_id(&board.title),
        (false, true) => board.created_at = ids.created_at(),
        (false, false) => {}
    }

    if !force && store.get(&board.id).is_some() {
        return Err(AppError::InvalidArgument(format!(
            "board '{}' already exists (use --force to replace it)",
            board.id
        )));
    }

    store.save(&board)?;
    success(format!(
        "Imported \"{}\" with {} character(s) as {}",
        board.title,
        board.characters.len(),
        board.id
    ));
    Ok(())
}
