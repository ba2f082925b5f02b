//! Game sessions: a loaded board plus transient elimination flags.

use super::example::{EXAMPLE_SENTINEL, ExampleSource, load_example};
use super::shuffle::shuffle_in_place;
use crate::errors::{AppError, AppResult};
use crate::models::{Board, Character};
use crate::store::{BoardStore, KeyValueStore};
use rand::Rng;
use std::io::Write;
use url::Url;

/// Where the board to play comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Stored(String),
    Example,
}

impl BoardSource {
    /// Map a picker value: blank means nothing chosen.
    pub fn from_selection(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            EXAMPLE_SENTINEL => Some(BoardSource::Example),
            id => Some(BoardSource::Stored(id.to_string())),
        }
    }

    /// Read the `boardId` query parameter of a play link. Relative links
    /// such as `play.html?boardId=abc` are accepted.
    pub fn from_link(link: &str) -> AppResult<Option<Self>> {
        let url = match Url::parse(link) {
            Ok(u) => u,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse("file:///")?;
                base.join(link)?
            }
            Err(e) => return Err(e.into()),
        };

        Ok(url
            .query_pairs()
            .find(|(k, _)| k == "boardId")
            .and_then(|(_, v)| Self::from_selection(&v)))
    }
}

/// Resolve a source to a board. Unknown ids are `BoardNotFound`.
pub fn load_board<S: KeyValueStore>(
    source: &BoardSource,
    store: &BoardStore<S>,
    example: &ExampleSource,
) -> AppResult<Board> {
    match source {
        BoardSource::Stored(id) => store
            .get(id)
            .ok_or_else(|| AppError::BoardNotFound(id.clone())),
        BoardSource::Example => load_example(example, store.defaults()),
    }
}

/// Called every time a card flips.
pub trait FlipHook {
    fn on_flip(&mut self, card: &Card);
}

/// No sound at all.
pub struct SilentFlip;

impl FlipHook for SilentFlip {
    fn on_flip(&mut self, _card: &Card) {}
}

/// Rings the terminal bell.
pub struct TerminalBell;

impl FlipHook for TerminalBell {
    fn on_flip(&mut self, _card: &Card) {
        print!("\x07");
        std::io::stdout().flush().ok();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub character: Character,
    pub eliminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub eliminated: bool,
    pub remaining: usize,
    /// Set only when this toggle took the board from two candidates to one.
    pub won: bool,
}

pub struct GameSession {
    board_id: String,
    title: String,
    cards: Vec<Card>,
    hook: Box<dyn FlipHook>,
}

impl GameSession {
    pub fn new(board: &Board) -> Self {
        Self {
            board_id: board.id.clone(),
            title: board.title.clone(),
            cards: board
                .characters
                .iter()
                .map(|c| Card {
                    character: c.clone(),
                    eliminated: false,
                })
                .collect(),
            hook: Box::new(SilentFlip),
        }
    }

    pub fn with_hook(mut self, hook: Box<dyn FlipHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.iter().filter(|c| !c.eliminated).count()
    }

    /// The last card standing, if only one is left.
    pub fn winner(&self) -> Option<&Card> {
        match self.remaining() {
            1 => self.cards.iter().find(|c| !c.eliminated),
            _ => None,
        }
    }

    /// Flip the card at `index` (0-based, display order).
    pub fn toggle(&mut self, index: usize) -> AppResult<ToggleOutcome> {
        let before = self.remaining();
        let card = self
            .cards
            .get_mut(index)
            .ok_or_else(|| AppError::InvalidArgument(format!("no card #{}", index + 1)))?;

        card.eliminated = !card.eliminated;
        let eliminated = card.eliminated;
        self.hook.on_flip(card);

        let remaining = self.remaining();
        Ok(ToggleOutcome {
            eliminated,
            remaining,
            won: before == 2 && remaining == 1,
        })
    }

    pub fn toggle_character(&mut self, id: &str) -> AppResult<ToggleOutcome> {
        let index = self
            .cards
            .iter()
            .position(|c| c.character.id == id)
            .ok_or_else(|| AppError::InvalidArgument(format!("no character '{}'", id)))?;
        self.toggle(index)
    }

    /// Reorder the cards. Elimination flags travel with their cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_in_place(&mut self.cards, rng);
    }

    pub fn restart(&mut self) {
        for card in &mut self.cards {
            card.eliminated = false;
        }
    }
}
