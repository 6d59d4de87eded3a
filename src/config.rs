use egui::Color32;

/// Window title, also used as the title of the pen width and save prompts.
pub const APP_TITLE: &str = "DrawBoard";

/// Initial inner size of the main window, in points.
pub const INITIAL_WINDOW_SIZE: [f32; 2] = [500.0, 500.0];

pub const PEN_WIDTH_MIN: u32 = 1;
pub const PEN_WIDTH_MAX: u32 = 50;

pub const DEFAULT_PEN_WIDTH: u32 = 1;
pub const DEFAULT_PEN_COLOR: Color32 = Color32::BLUE;

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

/// Base name of the file suggested by the save dialog.
pub const UNTITLED_BASE_NAME: &str = "untitled";

/// Format used when the user picks "Save" in the unsaved-changes prompt.
///
/// Quick-save always uses this encoding, never the format the image was
/// loaded from or last saved as.
pub const QUICK_SAVE_FORMAT: &str = "png";
