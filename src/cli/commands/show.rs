use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(id: &str, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let board = store
        .get(id)
        .ok_or_else(|| AppError::BoardNotFound(id.to_string()))?;

    header(&board.title);
    println!("{}• Id:{} {}", CYAN, RESET, board.id);
    println!("{}• Created:{} {}", CYAN, RESET, board.created_at);
    println!("{}• Characters:{} {}\n", CYAN, RESET, board.characters.len());

    for (i, c) in board.characters.iter().enumerate() {
        println!(
            "{:>3}. [{}] {:<20} zoom {} · {}  {}",
            i + 1,
            c.initial(),
            c.name,
            c.crop.zoom,
            c.crop.position_label(),
            c.image_label()
        );
    }
    Ok(())
}
