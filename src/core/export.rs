//! Board JSON files: download and import.

use super::ids::slugify;
use crate::errors::{AppError, AppResult};
use crate::models::normalize::{Defaults, parse_board};
use crate::models::Board;
use std::fs;
use std::path::{Path, PathBuf};

/// `<slugified title>.json`, or `board.json` when the title has no usable characters.
pub fn export_file_name(title: &str) -> String {
    format!("{}.json", slugify(title))
}

/// Write the board pretty-printed into `dir`. Existing files are only
/// overwritten with `force`.
pub fn write_board(board: &Board, dir: &Path, force: bool) -> AppResult<PathBuf> {
    let path = dir.join(export_file_name(&board.title));

    if path.exists() && !force {
        return Err(AppError::FileExists(path.display().to_string()));
    }

    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(board)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Load a board file and normalize it.
pub fn read_board(path: &Path, defaults: &Defaults) -> AppResult<Board> {
    let content = fs::read_to_string(path)?;
    Ok(parse_board(&content, defaults)?)
}
