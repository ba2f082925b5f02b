use serde::Serialize;

pub const ZOOM_MIN: f64 = 1.0;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;
pub const POS_MIN: f64 = 0.0;
pub const POS_MAX: f64 = 100.0;
pub const POS_STEP: f64 = 1.0;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_X: f64 = 50.0;
pub const DEFAULT_Y: f64 = 50.0;

/// How a character image is framed inside its card.
///
/// `x` and `y` are the focal point in percent of the image size,
/// `zoom` is the scale factor applied on top of a cover fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crop {
    pub zoom: f64,
    pub x: f64,
    pub y: f64,
}

impl Crop {
    pub fn new(default_y: f64) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            x: DEFAULT_X,
            y: clamp_pos(default_y, DEFAULT_Y),
        }
    }

    /// Build a crop from optional raw values, falling back to defaults for
    /// anything missing or non-finite and clamping the rest into range.
    pub fn from_parts(zoom: Option<f64>, x: Option<f64>, y: Option<f64>, default_y: f64) -> Self {
        let base = Self::new(default_y);
        Self {
            zoom: zoom.map_or(base.zoom, |z| clamp_zoom(z, base.zoom)),
            x: x.map_or(base.x, |v| clamp_pos(v, base.x)),
            y: y.map_or(base.y, |v| clamp_pos(v, base.y)),
        }
    }

    /// CSS-like `object-position` value, e.g. `50% 20%`.
    pub fn position_label(&self) -> String {
        format!("{}% {}%", self.x, self.y)
    }
}

impl Default for Crop {
    fn default() -> Self {
        Self::new(DEFAULT_Y)
    }
}

pub(crate) fn clamp_zoom(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(ZOOM_MIN, ZOOM_MAX)
    } else {
        fallback
    }
}

pub(crate) fn clamp_pos(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(POS_MIN, POS_MAX)
    } else {
        fallback
    }
}

/// Snap a value to the nearest multiple of `step` counted from `min`.
pub(crate) fn snap(value: f64, min: f64, step: f64) -> f64 {
    let steps = ((value - min) / step).round();
    // keep one decimal for the zoom slider, avoids 1.2000000000000002
    ((min + steps * step) * 10.0).round() / 10.0
}
