use super::builder::BuilderSession;
use crate::errors::AppResult;
use crate::models::crop::{self, Crop};
use crate::models::Character;

/// Pending crop edits for one slot.
///
/// The editor owns its draft values; nothing reaches the builder until
/// [`commit`](Self::commit), and [`cancel`](Self::cancel) drops them.
#[derive(Debug, Clone)]
pub struct CropEditor {
    slot: usize,
    character_id: String,
    draft: Crop,
}

impl CropEditor {
    pub(crate) fn open(slot: usize, character: &Character) -> Self {
        Self {
            slot,
            character_id: character.id.clone(),
            draft: character.crop,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn draft(&self) -> Crop {
        self.draft
    }

    /// 1 to 3, step 0.1
    pub fn set_zoom(&mut self, zoom: f64) {
        let z = crop::clamp_zoom(zoom, self.draft.zoom);
        self.draft.zoom = crop::snap(z, crop::ZOOM_MIN, crop::ZOOM_STEP);
    }

    /// 0 to 100, step 1
    pub fn set_x(&mut self, x: f64) {
        let v = crop::clamp_pos(x, self.draft.x);
        self.draft.x = crop::snap(v, crop::POS_MIN, crop::POS_STEP);
    }

    /// 0 to 100, step 1
    pub fn set_y(&mut self, y: f64) {
        let v = crop::clamp_pos(y, self.draft.y);
        self.draft.y = crop::snap(v, crop::POS_MIN, crop::POS_STEP);
    }

    pub fn cancel(self) {}

    /// Write zoom, x and y to the slot in one step.
    pub fn commit(self, session: &mut BuilderSession) -> AppResult<Crop> {
        session.apply_crop(self.slot, &self.character_id, self.draft)?;
        Ok(self.draft)
    }
}
