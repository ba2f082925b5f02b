use super::character::Character;
use serde::Serialize;

pub const UNTITLED_BOARD: &str = "Untitled board";

/// A named, ordered collection of characters: the unit of persistence and play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub characters: Vec<Character>,
}

impl Board {
    /// `Title (N characters)`, as shown in board pickers.
    pub fn label(&self) -> String {
        format!("{} ({} characters)", self.title, self.characters.len())
    }
}
