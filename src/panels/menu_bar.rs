use crate::command::{ActionRegistry, Command, MenuItem};

/// Draw the File/Options/Help menu bar. Returns the command the user picked this frame.
///
/// With `enabled` false the bar is greyed out and never returns a command.
pub fn menu_bar(registry: &ActionRegistry, ctx: &egui::Context, enabled: bool) -> Option<Command> {
    let mut triggered = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            egui::menu::bar(ui, |ui| {
                for menu in registry.menus() {
                    ui.menu_button(menu.title, |ui| {
                        for item in &menu.items {
                            match *item {
                                MenuItem::Command(command) => {
                                    if command_button(ui, command) {
                                        triggered = Some(command.clone());
                                    }
                                }
                                MenuItem::Submenu {
                                    title,
                                    commands,
                                    enabled,
                                } => {
                                    ui.add_enabled_ui(enabled, |ui| {
                                        ui.menu_button(title, |ui| {
                                            for command in commands {
                                                if command_button(ui, command) {
                                                    triggered = Some(command.clone());
                                                }
                                            }
                                        });
                                    });
                                }
                                MenuItem::Separator => {
                                    ui.separator();
                                }
                            }
                        }
                    });
                }
            });
        });
    });

    triggered
}

fn command_button(ui: &mut egui::Ui, command: &Command) -> bool {
    let mut button = egui::Button::new(command.label());
    if let Some(shortcut) = command.shortcut() {
        button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
    }

    let clicked = ui.add(button).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}
