use egui::KeyboardShortcut;

/// Identifies what a command does when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    NewImage,
    Open,
    /// Save in the format carried by the command's payload.
    SaveAs,
    Print,
    Exit,
    PenColor,
    PenWidth,
    ClearScreen,
    About,
}

/// A user-triggerable action, as shown in the menus.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    id: CommandId,
    label: String,
    shortcut: Option<KeyboardShortcut>,
    payload: Option<String>,
}

impl Command {
    pub fn new(id: CommandId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            shortcut: None,
            payload: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: KeyboardShortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shortcut(&self) -> Option<&KeyboardShortcut> {
        self.shortcut.as_ref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}
