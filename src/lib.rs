#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod error;
pub mod lifecycle;
pub mod panels;
pub mod print;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod stroke;

pub use app::DrawBoardApp;
pub use canvas::Canvas;
pub use command::{ActionRegistry, Command, CommandId, FormatCatalog};
pub use document::ImageDocument;
pub use lifecycle::{DocumentLifecycle, Prompter, SaveDecision};
pub use renderer::Renderer;
pub use settings::Settings;
pub use stroke::Pen;
