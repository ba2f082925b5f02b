//! Builder session: the slots a user fills with pictures before saving.

use super::board::build_board;
use super::capture::CapturedImage;
use super::editor::CropEditor;
use super::export;
use super::ids::IdGenerator;
use super::shuffle::shuffle_in_place;
use crate::errors::{AppError, AppResult};
use crate::models::character::placeholder_name;
use crate::models::{Board, Character, Crop};
use crate::store::{BoardStore, KeyValueStore};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What happens to a slot's framing when its picture is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropOnReplace {
    Reset,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLayout {
    /// A fixed grid of empty tiles.
    Fixed(usize),
    /// Slots are appended as pictures are added.
    Unbounded,
}

#[derive(Debug, Clone, Copy)]
pub struct BuilderSettings {
    pub layout: SlotLayout,
    pub crop_on_replace: CropOnReplace,
    pub default_y: f64,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            layout: SlotLayout::Fixed(20),
            crop_on_replace: CropOnReplace::Reset,
            default_y: crate::models::crop::DEFAULT_Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Empty,
    Filled(Character),
}

impl Slot {
    pub fn character(&self) -> Option<&Character> {
        match self {
            Slot::Filled(c) => Some(c),
            Slot::Empty => None,
        }
    }
}

pub struct BuilderSession {
    title: String,
    slots: Vec<Slot>,
    characters: Vec<Character>,
    settings: BuilderSettings,
    ids: IdGenerator,
}

impl BuilderSession {
    pub fn new(settings: BuilderSettings, ids: IdGenerator) -> Self {
        let slots = match settings.layout {
            SlotLayout::Fixed(n) => vec![Slot::Empty; n],
            SlotLayout::Unbounded => Vec::new(),
        };
        Self {
            title: String::new(),
            slots,
            characters: Vec::new(),
            settings,
            ids,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Filled slots in slot order, or in shuffled order after `randomize`.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Put a captured picture into `slot`.
    ///
    /// An empty slot gets a new id and the `Person N` placeholder name.
    /// A filled slot keeps its name, gets a new id, and keeps or resets
    /// its framing according to `crop_on_replace`.
    pub fn fill(&mut self, slot: usize, image: CapturedImage) -> AppResult<&Character> {
        self.check_slot(slot)?;
        if slot == self.slots.len() {
            self.slots.push(Slot::Empty);
        }

        let id = self.ids.character_id(slot);
        let fresh = Crop::new(self.settings.default_y);

        let next = match &self.slots[slot] {
            Slot::Empty => Character {
                id,
                name: placeholder_name(slot),
                image: image.data_uri,
                crop: fresh,
            },
            Slot::Filled(prev) => Character {
                id,
                name: prev.name.clone(),
                image: image.data_uri,
                crop: match self.settings.crop_on_replace {
                    CropOnReplace::Reset => fresh,
                    CropOnReplace::Keep => prev.crop,
                },
            },
        };

        self.slots[slot] = Slot::Filled(next);
        self.refresh();

        self.slots[slot].character().ok_or(AppError::EmptySlot(slot))
    }

    /// Fill the first empty slot (or append, when unbounded).
    pub fn add(&mut self, image: CapturedImage) -> AppResult<usize> {
        let slot = match self.settings.layout {
            SlotLayout::Fixed(n) => self
                .slots
                .iter()
                .position(|s| matches!(s, Slot::Empty))
                .ok_or_else(|| AppError::InvalidArgument(format!("all {} slots are filled", n)))?,
            SlotLayout::Unbounded => self.slots.len(),
        };
        self.fill(slot, image)?;
        Ok(slot)
    }

    /// Blank names fall back to the slot placeholder.
    pub fn rename(&mut self, slot: usize, name: &str) -> AppResult<()> {
        let character = self.filled_mut(slot)?;
        character.name = match name.trim() {
            "" => placeholder_name(slot),
            _ => name.to_string(),
        };
        self.refresh();
        Ok(())
    }

    /// Empty a slot. Unbounded layouts drop it, shifting later slots.
    pub fn clear(&mut self, slot: usize) -> AppResult<()> {
        self.filled_mut(slot)?;
        match self.settings.layout {
            SlotLayout::Fixed(_) => self.slots[slot] = Slot::Empty,
            SlotLayout::Unbounded => {
                self.slots.remove(slot);
            }
        }
        self.refresh();
        Ok(())
    }

    /// Start a crop edit for one filled slot.
    pub fn open_editor(&self, slot: usize) -> AppResult<CropEditor> {
        match self.slots.get(slot) {
            Some(Slot::Filled(c)) if c.has_image() => Ok(CropEditor::open(slot, c)),
            Some(_) => Err(AppError::EmptySlot(slot)),
            None => Err(AppError::InvalidSlot(slot)),
        }
    }

    /// Used by [`CropEditor::commit`]; the slot must still hold `character_id`.
    pub(crate) fn apply_crop(&mut self, slot: usize, character_id: &str, crop: Crop) -> AppResult<()> {
        let character = self.filled_mut(slot)?;
        if character.id != character_id {
            return Err(AppError::InvalidArgument(format!(
                "slot {} changed while its crop was being edited",
                slot
            )));
        }
        character.crop = crop;
        self.refresh();
        Ok(())
    }

    /// Shuffle the derived character list. Slots keep their order.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_in_place(&mut self.characters, rng);
    }

    /// Board for the current state, or `EmptyBoard` naming the action.
    pub fn build(&mut self, action: &'static str) -> AppResult<Board> {
        build_board(Some(&self.title), &self.characters, &mut self.ids)
            .ok_or(AppError::EmptyBoard(action))
    }

    pub fn save<S: KeyValueStore>(&mut self, store: &mut BoardStore<S>) -> AppResult<Board> {
        let board = self.build("saving")?;
        store.save(&board)?;
        Ok(board)
    }

    pub fn download(&mut self, dir: &Path, force: bool) -> AppResult<(Board, PathBuf)> {
        let board = self.build("downloading")?;
        let path = export::write_board(&board, dir, force)?;
        Ok((board, path))
    }

    fn check_slot(&self, slot: usize) -> AppResult<()> {
        let limit = match self.settings.layout {
            SlotLayout::Fixed(n) => n,
            SlotLayout::Unbounded => self.slots.len() + 1,
        };
        if slot < limit {
            Ok(())
        } else {
            Err(AppError::InvalidSlot(slot))
        }
    }

    fn filled_mut(&mut self, slot: usize) -> AppResult<&mut Character> {
        match self.slots.get_mut(slot) {
            Some(Slot::Filled(c)) => Ok(c),
            Some(Slot::Empty) => Err(AppError::EmptySlot(slot)),
            None => Err(AppError::InvalidSlot(slot)),
        }
    }

    fn refresh(&mut self) {
        self.characters = self
            .slots
            .iter()
            .filter_map(Slot::character)
            .cloned()
            .collect();
    }
}
