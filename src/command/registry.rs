use super::{Command, CommandId};
use egui::{Key, KeyboardShortcut, Modifiers};
use image::ImageFormat;

pub const NEW_IMAGE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
pub const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
pub const EXIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);
pub const CLEAR_SCREEN_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::L);

/// Encoders that reject images larger than the initial canvas (ICO caps sides at 256).
const SIZE_LIMITED_FORMATS: [ImageFormat; 1] = [ImageFormat::Ico];

/// File extension naming `format` in menus and save paths.
///
/// PNM writes RGBA as PAM, so it is named after that subtype rather than
/// its first listed extension.
fn format_id(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Pnm => Some("pam"),
        _ => format.extensions_str().first().copied(),
    }
}

/// Ordered list of image formats the app can save to, named by file extension.
///
/// The order is the codec library's and is kept as-is for menu display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatCatalog {
    formats: Vec<String>,
}

impl FormatCatalog {
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Every format the `image` crate was built with an encoder for, minus
    /// those whose size limits the canvas cannot meet.
    pub fn from_codecs() -> Self {
        Self::new(
            ImageFormat::all()
                .filter(|format| format.writing_enabled())
                .filter(|format| !SIZE_LIMITED_FORMATS.contains(format))
                .filter_map(format_id),
        )
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

/// The fixed commands, in no particular display order.
pub fn build_static_actions() -> Vec<Command> {
    vec![
        Command::new(CommandId::NewImage, "New Image...").with_shortcut(NEW_IMAGE_SHORTCUT),
        Command::new(CommandId::Open, "Open...").with_shortcut(OPEN_SHORTCUT),
        Command::new(CommandId::Print, "Print..."),
        Command::new(CommandId::Exit, "Exit").with_shortcut(EXIT_SHORTCUT),
        Command::new(CommandId::PenColor, "Pen Color..."),
        Command::new(CommandId::PenWidth, "Pen Width..."),
        Command::new(CommandId::ClearScreen, "Clear Screen").with_shortcut(CLEAR_SCREEN_SHORTCUT),
        Command::new(CommandId::About, "About"),
    ]
}

/// One save command per format, labelled `"PNG..."` etc., in catalog order.
pub fn build_format_actions(catalog: &FormatCatalog) -> Vec<Command> {
    catalog
        .formats()
        .iter()
        .map(|format| {
            Command::new(CommandId::SaveAs, format!("{}...", format.to_uppercase()))
                .with_payload(format.as_str())
        })
        .collect()
}

/// A single entry of a top-level menu.
#[derive(Debug, Clone, Copy)]
pub enum MenuItem<'a> {
    Command(&'a Command),
    Submenu {
        title: &'static str,
        commands: &'a [Command],
        enabled: bool,
    },
    Separator,
}

#[derive(Debug, Clone)]
pub struct Menu<'a> {
    pub title: &'static str,
    pub items: Vec<MenuItem<'a>>,
}

/// Every command the user can trigger, built once at startup.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Vec<Command>,
    save_as: Vec<Command>,
}

impl ActionRegistry {
    pub fn new(catalog: &FormatCatalog) -> Self {
        Self {
            actions: build_static_actions(),
            save_as: build_format_actions(catalog),
        }
    }

    /// Look up a fixed command. Save-as commands share an id, so use
    /// [`Self::save_as_actions`] for those.
    pub fn get(&self, id: CommandId) -> Option<&Command> {
        self.actions.iter().find(|command| command.id() == id)
    }

    pub fn save_as_actions(&self) -> &[Command] {
        &self.save_as
    }

    /// The Save As submenu is disabled when no encoder is available.
    pub fn save_as_enabled(&self) -> bool {
        !self.save_as.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.actions.iter().chain(self.save_as.iter())
    }

    pub fn with_shortcuts(&self) -> impl Iterator<Item = (&Command, &KeyboardShortcut)> {
        self.commands()
            .filter_map(|command| command.shortcut().map(|shortcut| (command, shortcut)))
    }

    /// File, Options and Help menus, in menu bar order.
    pub fn menus(&self) -> Vec<Menu<'_>> {
        let item = |id| self.get(id).map(MenuItem::Command);

        let file = [
            item(CommandId::NewImage),
            item(CommandId::Open),
            Some(MenuItem::Submenu {
                title: "Save As",
                commands: &self.save_as,
                enabled: self.save_as_enabled(),
            }),
            item(CommandId::Print),
            Some(MenuItem::Separator),
            item(CommandId::Exit),
        ];
        let options = [
            item(CommandId::PenColor),
            item(CommandId::PenWidth),
            Some(MenuItem::Separator),
            item(CommandId::ClearScreen),
        ];
        let help = [item(CommandId::About)];

        vec![
            Menu {
                title: "File",
                items: file.into_iter().flatten().collect(),
            },
            Menu {
                title: "Options",
                items: options.into_iter().flatten().collect(),
            },
            Menu {
                title: "Help",
                items: help.into_iter().flatten().collect(),
            },
        ]
    }
}
