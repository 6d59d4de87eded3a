use crate::config::{DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH, PEN_WIDTH_MAX, PEN_WIDTH_MIN};
use egui::Color32;

/// User preferences restored between runs.
///
/// We derive Deserialize/Serialize so eframe can persist them on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub pen_color: Color32,
    pub pen_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pen_color: DEFAULT_PEN_COLOR,
            pen_width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl Settings {
    /// Restore settings from eframe storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default()
            .sanitized()
    }

    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Clamp values a hand-edited or stale storage file may have put out of range.
    pub fn sanitized(mut self) -> Self {
        self.pen_width = self.pen_width.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX);
        self
    }
}
