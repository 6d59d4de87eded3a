use crate::config::{APP_TITLE, PEN_WIDTH_MAX, PEN_WIDTH_MIN};
use egui::color_picker::{self, Alpha};
use egui::{Align2, Color32, RichText};

/// A value confirmed in one of the pen dialogs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    PenColor(Color32),
    PenWidth(u32),
}

/// At most one dialog is open at a time. The edited value lives here
/// until the user confirms or cancels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Dialog {
    #[default]
    None,
    PenColor(Color32),
    PenWidth(u32),
    About,
}

#[derive(Debug, Default)]
pub struct Dialogs {
    open: Dialog,
}

enum Answer {
    Pending,
    Accepted,
    Dismissed,
}

impl Dialogs {
    pub fn open_pen_color(&mut self, current: Color32) {
        self.open = Dialog::PenColor(current);
    }

    pub fn open_pen_width(&mut self, current: u32) {
        self.open = Dialog::PenWidth(current.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX));
    }

    pub fn open_about(&mut self) {
        self.open = Dialog::About;
    }

    pub fn current(&self) -> Dialog {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open != Dialog::None
    }

    /// Draw the open dialog, if any. Returns a value once the user presses OK.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let (answer, outcome) = match &mut self.open {
            Dialog::None => return None,
            Dialog::PenColor(color) => {
                let answer = modal(ctx, "Select Color", |ui| {
                    color_picker::color_picker_color32(ui, color, Alpha::Opaque);
                    ok_cancel(ui)
                });
                (answer, Some(DialogOutcome::PenColor(*color)))
            }
            Dialog::PenWidth(width) => {
                let answer = modal(ctx, APP_TITLE, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Select pen width:");
                        ui.add(
                            egui::DragValue::new(width)
                                .range(PEN_WIDTH_MIN..=PEN_WIDTH_MAX)
                                .speed(1.0),
                        );
                    });
                    ok_cancel(ui)
                });
                (answer, Some(DialogOutcome::PenWidth(*width)))
            }
            Dialog::About => {
                let answer = modal(ctx, "About DrawBoard", |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label("The ");
                        ui.label(RichText::new("DrawBoard").strong());
                        ui.label(" is an app made by Team Tuci for some of the finest scrubs.");
                    });
                    ui.label(RichText::new("Enjoy!").strong());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        Answer::Dismissed
                    } else {
                        Answer::Pending
                    }
                });
                (answer, None)
            }
        };

        match answer {
            Answer::Pending => None,
            Answer::Dismissed => {
                self.open = Dialog::None;
                None
            }
            Answer::Accepted => {
                self.open = Dialog::None;
                outcome
            }
        }
    }
}

fn modal(ctx: &egui::Context, title: &str, body: impl FnOnce(&mut egui::Ui) -> Answer) -> Answer {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, body)
        .and_then(|response| response.inner)
        .unwrap_or(Answer::Pending)
}

fn ok_cancel(ui: &mut egui::Ui) -> Answer {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let ok = ui.button("OK").clicked();
        let cancel = ui.button("Cancel").clicked();
        match (ok, cancel) {
            (true, _) => Answer::Accepted,
            (false, true) => Answer::Dismissed,
            (false, false) => Answer::Pending,
        }
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_width_dialog_starts_from_clamped_width() {
        let mut dialogs = Dialogs::default();
        assert!(!dialogs.is_open());

        dialogs.open_pen_width(80);
        assert_eq!(dialogs.current(), Dialog::PenWidth(PEN_WIDTH_MAX));
        assert!(dialogs.is_open());
    }

    #[test]
    fn opening_a_dialog_replaces_the_previous_one() {
        let mut dialogs = Dialogs::default();
        dialogs.open_pen_color(Color32::RED);
        dialogs.open_about();
        assert_eq!(dialogs.current(), Dialog::About);
    }
}
