mod commands;
mod registry;

pub use commands::{Command, CommandId};
pub use registry::{
    ActionRegistry, FormatCatalog, Menu, MenuItem, build_format_actions, build_static_actions,
    CLEAR_SCREEN_SHORTCUT, EXIT_SHORTCUT, NEW_IMAGE_SHORTCUT, OPEN_SHORTCUT,
};
