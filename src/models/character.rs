use super::crop::Crop;
use serde::Serialize;

/// One playable card of a board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Embedded `data:` URI or a path relative to the board file.
    pub image: String,
    #[serde(flatten)]
    pub crop: Crop,
}

impl Character {
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    /// Glyph shown in place of the picture: first letter of the name.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .find(|c| !c.is_whitespace())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Short human description of the image binding.
    pub fn image_label(&self) -> String {
        if let Some(rest) = self.image.strip_prefix("data:") {
            let mime = rest.split(';').next().unwrap_or("image");
            format!("embedded {} ({} bytes)", mime, self.image.len())
        } else if self.has_image() {
            self.image.clone()
        } else {
            "(no image)".to_string()
        }
    }
}

/// Placeholder used for blank names: `Person 1`, `Person 2`, ...
pub fn placeholder_name(index: usize) -> String {
    format!("Person {}", index + 1)
}
