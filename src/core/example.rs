use crate::errors::{AppError, AppResult};
use crate::models::normalize::{Defaults, parse_board};
use crate::models::Board;
use std::fs;
use std::path::PathBuf;

/// Selection value that stands for the bundled example.
pub const EXAMPLE_SENTINEL: &str = "example:default";

const BUNDLED_EXAMPLE: &str = include_str!("../../assets/example-board.json");

/// Where the example board comes from. Read-only in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleSource {
    Bundled,
    File(PathBuf),
}

/// Load the example board. Any failure is reported as `ExampleBoard`.
pub fn load_example(source: &ExampleSource, defaults: &Defaults) -> AppResult<Board> {
    let content = match source {
        ExampleSource::Bundled => BUNDLED_EXAMPLE.to_string(),
        ExampleSource::File(path) => fs::read_to_string(path)
            .map_err(|e| AppError::ExampleBoard(format!("{}: {}", path.display(), e)))?,
    };

    parse_board(&content, defaults).map_err(|e| AppError::ExampleBoard(e.to_string()))
}
