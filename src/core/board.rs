use super::ids::IdGenerator;
use crate::models::board::UNTITLED_BOARD;
use crate::models::character::placeholder_name;
use crate::models::{Board, Character};

/// Trimmed title, or the default when blank.
pub fn board_title(input: Option<&str>) -> String {
    match input.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => UNTITLED_BOARD.to_string(),
    }
}

/// Build a fresh board from the builder's characters.
///
/// Returns `None` when there is nothing to save. The inputs are copied,
/// never modified; blank names become `Person N`.
pub fn build_board(
    title_input: Option<&str>,
    characters: &[Character],
    ids: &mut IdGenerator,
) -> Option<Board> {
    if characters.is_empty() {
        return None;
    }

    let title = board_title(title_input);
    let (id, created_at) = ids.board_identity(&title);

    Some(Board {
        id,
        title,
        created_at,
        characters: characters
            .iter()
            .enumerate()
            .map(|(i, c)| Character {
                id: c.id.clone(),
                name: match c.name.trim() {
                    "" => placeholder_name(i),
                    _ => c.name.clone(),
                },
                image: c.image.clone(),
                crop: c.crop,
            })
            .collect(),
    })
}
