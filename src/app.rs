use crate::canvas::Canvas;
use crate::command::{ActionRegistry, Command, CommandId, FormatCatalog};
use crate::dialogs::{DialogOutcome, Dialogs};
use crate::document::ImageDocument;
use crate::lifecycle::{DocumentLifecycle, Prompter};
use crate::panels;
use crate::prompt::NativePrompter;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::stroke::Pen;

/// The main window: menu bar over a drawing canvas.
#[derive(Debug)]
pub struct DrawBoardApp {
    canvas: Canvas,
    registry: ActionRegistry,
    lifecycle: DocumentLifecycle,
    renderer: Renderer,
    dialogs: Dialogs,
    /// Set by the Exit command; turned into a window close request next frame.
    exit_requested: bool,
}

impl DrawBoardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load(cc.storage);
        let catalog = FormatCatalog::from_codecs();
        log::info!("Save formats: {}", catalog.formats().join(", "));

        Self::with_parts(settings, catalog, DocumentLifecycle::from_current_dir())
    }

    pub fn with_parts(settings: Settings, catalog: FormatCatalog, lifecycle: DocumentLifecycle) -> Self {
        Self {
            canvas: Canvas::new(Pen::new(settings.pen_color, settings.pen_width)),
            registry: ActionRegistry::new(&catalog),
            lifecycle,
            renderer: Renderer::new(),
            dialogs: Dialogs::default(),
            exit_requested: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn dialogs(&self) -> &Dialogs {
        &self.dialogs
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn settings(&self) -> Settings {
        Settings {
            pen_color: self.canvas.pen_color(),
            pen_width: self.canvas.pen_width(),
        }
    }

    /// Run the handler for `command`.
    pub fn dispatch(&mut self, command: &Command, prompter: &mut dyn Prompter) {
        log::debug!("Dispatching {:?}", command.id());

        match command.id() {
            CommandId::NewImage | CommandId::ClearScreen => self.canvas.clear(),
            CommandId::Open => {
                self.lifecycle.open(&mut self.canvas, prompter);
            }
            CommandId::SaveAs => match command.payload() {
                Some(format) => {
                    self.lifecycle.request_save_as(&mut self.canvas, prompter, format);
                }
                None => log::warn!("Save command without a format: {}", command.label()),
            },
            CommandId::Print => self.canvas.print(),
            CommandId::Exit => self.exit_requested = true,
            CommandId::PenColor => self.dialogs.open_pen_color(self.canvas.pen_color()),
            CommandId::PenWidth => self.dialogs.open_pen_width(self.canvas.pen_width()),
            CommandId::About => self.dialogs.open_about(),
        }
    }

    /// Dispatch commands picked from the menu bar or keyboard this frame.
    /// Nothing is dispatched while a dialog is open.
    pub fn dispatch_triggered(&mut self, commands: &[Command], prompter: &mut dyn Prompter) {
        if self.dialogs.is_open() {
            if !commands.is_empty() {
                log::debug!("Ignoring {} command(s) while a dialog is open", commands.len());
            }
            return;
        }
        for command in commands {
            self.dispatch(command, prompter);
        }
    }

    /// The window wants to close. Returns `false` to veto it.
    pub fn on_close_requested(&mut self, prompter: &mut dyn Prompter) -> bool {
        self.lifecycle.confirm_discardable(&mut self.canvas, prompter)
    }

    pub fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::PenColor(color) => self.canvas.set_pen_color(color),
            DialogOutcome::PenWidth(width) => self.canvas.set_pen_width(width),
        }
    }

    fn triggered_shortcuts(&self, ctx: &egui::Context) -> Vec<Command> {
        ctx.input_mut(|input| {
            self.registry
                .with_shortcuts()
                .filter(|(_, shortcut)| input.consume_shortcut(shortcut))
                .map(|(command, _)| command.clone())
                .collect()
        })
    }
}

impl eframe::App for DrawBoardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings().store(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let mut prompter = NativePrompter::new(&*frame);

        let accepting_commands = !self.dialogs.is_open();
        let mut triggered = if accepting_commands {
            self.triggered_shortcuts(ctx)
        } else {
            Vec::new()
        };
        triggered.extend(panels::menu_bar(&self.registry, ctx, accepting_commands));
        self.dispatch_triggered(&triggered, &mut prompter);

        if let Some(outcome) = self.dialogs.show(ctx) {
            self.apply_dialog_outcome(outcome);
        }

        let interactive = !self.dialogs.is_open();
        panels::central_panel(&mut self.canvas, &mut self.renderer, ctx, interactive);

        if std::mem::take(&mut self.exit_requested) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.on_close_requested(&mut prompter)
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }
}
