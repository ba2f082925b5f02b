use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::export::write_board;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(id: &str, dir: Option<&str>, force: bool, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let board = store
        .get(id)
        .ok_or_else(|| AppError::BoardNotFound(id.to_string()))?;

    let target = dir.map(expand_tilde).unwrap_or_else(|| cfg.export_path());
    let path = write_board(&board, &target, force)?;

    success(format!("JSON file downloaded: {}", path.display()));
    Ok(())
}
