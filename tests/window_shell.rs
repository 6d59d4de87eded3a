use drawboard::app::DrawBoardApp;
use drawboard::command::{CommandId, FormatCatalog};
use drawboard::dialogs::{Dialog, DialogOutcome};
use drawboard::document::ImageDocument;
use drawboard::lifecycle::{DocumentLifecycle, Prompter, SaveDecision};
use drawboard::settings::Settings;
use egui::{Color32, pos2};
use std::path::{Path, PathBuf};

/// Prompter with one canned answer per question.
struct CannedPrompter {
    decision: SaveDecision,
    save_location: Option<PathBuf>,
    asked: usize,
}

impl CannedPrompter {
    fn new(decision: SaveDecision, save_location: Option<PathBuf>) -> Self {
        Self {
            decision,
            save_location,
            asked: 0,
        }
    }
}

impl Prompter for CannedPrompter {
    fn confirm_unsaved_changes(&mut self) -> SaveDecision {
        self.asked += 1;
        self.decision
    }

    fn choose_save_location(&mut self, _suggested: &Path, _format: &str) -> Option<PathBuf> {
        self.save_location.clone()
    }

    fn choose_open_location(&mut self, _directory: &Path) -> Option<PathBuf> {
        None
    }
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir()
}

fn app_with(formats: &[&str]) -> DrawBoardApp {
    DrawBoardApp::with_parts(
        Settings::default(),
        FormatCatalog::new(formats.iter().copied()),
        DocumentLifecycle::new(scratch_dir()),
    )
}

fn scribble(app: &mut DrawBoardApp) {
    let canvas = app.canvas_mut();
    canvas.begin_stroke(pos2(5.0, 5.0));
    canvas.end_stroke(Some(pos2(50.0, 50.0)));
    assert!(canvas.is_modified());
}

fn command(app: &DrawBoardApp, id: CommandId) -> drawboard::Command {
    app.registry().get(id).cloned().expect("registered command")
}

#[test]
fn test_close_dirty_document_with_successful_save_is_accepted() {
    let mut app = app_with(&["png"]);
    scribble(&mut app);

    let target = scratch_dir().join(format!("drawboard-shell-{}.png", std::process::id()));
    let mut prompter = CannedPrompter::new(SaveDecision::Save, Some(target.clone()));

    assert!(app.on_close_requested(&mut prompter));
    assert_eq!(prompter.asked, 1);
    assert!(!app.canvas().is_modified());
    assert!(target.exists());

    let _ = std::fs::remove_file(target);
}

#[test]
fn test_close_dirty_document_with_cancel_is_vetoed() {
    let mut app = app_with(&["png"]);
    scribble(&mut app);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    assert!(!app.on_close_requested(&mut prompter));
    assert!(app.canvas().is_modified());
}

#[test]
fn test_close_clean_document_never_prompts() {
    let mut app = app_with(&["png"]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    assert!(app.on_close_requested(&mut prompter));
    assert_eq!(prompter.asked, 0);
}

#[test]
fn test_exit_requests_close_instead_of_quitting() {
    let mut app = app_with(&["png"]);
    scribble(&mut app);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    app.dispatch(&command(&app, CommandId::Exit), &mut prompter);

    assert!(app.exit_requested());
    // The unsaved-changes prompt belongs to the close request, not to Exit itself.
    assert_eq!(prompter.asked, 0);
}

#[test]
fn test_clear_and_new_reset_the_canvas() {
    let mut app = app_with(&["png"]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    for id in [CommandId::ClearScreen, CommandId::NewImage] {
        scribble(&mut app);
        app.dispatch(&command(&app, id), &mut prompter);
        assert!(!app.canvas().is_modified());
    }
    assert_eq!(prompter.asked, 0);
}

#[test]
fn test_save_as_command_uses_its_format() {
    let mut app = app_with(&["png", "bmp"]);
    scribble(&mut app);

    let target = scratch_dir().join(format!("drawboard-shell-{}.bmp", std::process::id()));
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, Some(target.clone()));
    let bmp = app.registry().save_as_actions()[1].clone();
    assert_eq!(bmp.payload(), Some("bmp"));

    app.dispatch(&bmp, &mut prompter);

    assert!(!app.canvas().is_modified());
    let saved = image::open(&target).expect("saved bitmap");
    assert_eq!(saved.width(), app.canvas().size()[0]);

    let _ = std::fs::remove_file(target);
}

#[test]
fn test_cancelled_save_as_keeps_document_dirty() {
    let mut app = app_with(&["png"]);
    scribble(&mut app);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);
    let png = app.registry().save_as_actions()[0].clone();

    app.dispatch(&png, &mut prompter);

    assert!(app.canvas().is_modified());
}

#[test]
fn test_pen_dialogs_apply_only_confirmed_values() {
    let mut app = app_with(&["png"]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    app.dispatch(&command(&app, CommandId::PenWidth), &mut prompter);
    assert_eq!(app.dialogs().current(), Dialog::PenWidth(1));
    assert_eq!(app.canvas().pen_width(), 1);

    app.apply_dialog_outcome(DialogOutcome::PenWidth(12));
    assert_eq!(app.canvas().pen_width(), 12);

    app.dispatch(&command(&app, CommandId::PenColor), &mut prompter);
    assert_eq!(app.dialogs().current(), Dialog::PenColor(Color32::BLUE));

    app.apply_dialog_outcome(DialogOutcome::PenColor(Color32::RED));
    assert_eq!(app.canvas().pen_color(), Color32::RED);

    let settings = app.settings();
    assert_eq!(settings.pen_width, 12);
    assert_eq!(settings.pen_color, Color32::RED);
}

#[test]
fn test_about_opens_dialog() {
    let mut app = app_with(&[]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);

    app.dispatch(&command(&app, CommandId::About), &mut prompter);

    assert_eq!(app.dialogs().current(), Dialog::About);
}

#[test]
fn test_commands_are_ignored_while_a_dialog_is_open() {
    let mut app = app_with(&["png"]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);
    scribble(&mut app);

    app.dispatch(&command(&app, CommandId::About), &mut prompter);
    let triggered = [
        command(&app, CommandId::ClearScreen),
        command(&app, CommandId::Exit),
    ];
    app.dispatch_triggered(&triggered, &mut prompter);

    assert!(app.canvas().is_modified());
    assert!(!app.exit_requested());
    assert_eq!(app.dialogs().current(), Dialog::About);
}

#[test]
fn test_triggered_commands_run_when_no_dialog_is_open() {
    let mut app = app_with(&["png"]);
    let mut prompter = CannedPrompter::new(SaveDecision::Cancel, None);
    scribble(&mut app);

    let triggered = [command(&app, CommandId::ClearScreen)];
    app.dispatch_triggered(&triggered, &mut prompter);

    assert!(!app.canvas().is_modified());
}

#[test]
fn test_app_with_empty_catalog_has_no_save_commands() {
    let app = app_with(&[]);

    assert!(app.registry().save_as_actions().is_empty());
    assert!(!app.registry().save_as_enabled());
}

#[test]
fn test_settings_seed_the_pen() {
    let app = DrawBoardApp::with_parts(
        Settings {
            pen_color: Color32::GREEN,
            pen_width: 9,
        },
        FormatCatalog::default(),
        DocumentLifecycle::new(scratch_dir()),
    );

    assert_eq!(app.canvas().pen_color(), Color32::GREEN);
    assert_eq!(app.canvas().pen_width(), 9);
}
