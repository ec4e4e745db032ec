use std::fs;
use std::path::Path;

use stickynote::core::action::{Action, Effect, update};
use stickynote::core::geometry::Point;
use stickynote::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs an action and carries out a `Save` effect the way the window does.
fn step(app: &mut App, action: Action) -> Effect {
    let effect = update(app, action);
    if effect == Effect::Save {
        app.save().unwrap();
    }
    effect
}

/// Types `text` as a series of edits, each followed by a key release.
fn type_text(app: &mut App, text: &str) {
    let mut typed = app.buffer.text().to_string();
    for c in text.chars() {
        typed.push(c);
        step(app, Action::TextEdited(typed.clone()));
        step(app, Action::KeyReleased);
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_first_launch_type_and_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_sauvegarde.txt");

    let mut app = App::load(&path).unwrap();
    assert!(app.buffer.is_empty());
    assert!(!path.exists());

    type_text(&mut app, "Buy milk");
    assert_eq!(read(&path), "Buy milk");
    assert_eq!(step(&mut app, Action::Close), Effect::Close);
    drop(app);

    let relaunched = App::load(&path).unwrap();
    assert_eq!(relaunched.buffer.text(), "Buy milk");
}

#[test]
fn test_trailing_space_is_trimmed_on_disk_but_kept_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    let mut app = App::load(&path).unwrap();
    type_text(&mut app, "Buy ");
    assert_eq!(app.buffer.text(), "Buy ");
    assert_eq!(read(&path), "Buy");
}

#[test]
fn test_only_the_last_flush_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    let mut app = App::load(&path).unwrap();
    type_text(&mut app, "abc");
    // Edit lands in the buffer but no key release follows.
    step(&mut app, Action::TextEdited("abcdef".into()));
    assert!(app.unsaved);
    drop(app);

    assert_eq!(App::load(&path).unwrap().buffer.text(), "abc");
}

#[test]
fn test_unreadable_save_file_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, [0xc3, 0x28]).unwrap();
    assert!(App::load(&path).is_err());
}

// ============================================================================
// Selection Delete
// ============================================================================

#[test]
fn test_backspace_over_selection_then_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "Buy milk\nCall Bob").unwrap();

    let mut app = App::load(&path).unwrap();
    step(&mut app, Action::SelectionChanged(Some(8..17)));
    assert_eq!(step(&mut app, Action::DeleteSelection), Effect::CursorMoved(8));
    step(&mut app, Action::KeyReleased);
    assert_eq!(read(&path), "Buy milk");
}

#[test]
fn test_delete_without_selection_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "Buy milk").unwrap();

    let mut app = App::load(&path).unwrap();
    assert_eq!(step(&mut app, Action::DeleteSelection), Effect::None);
    assert_eq!(app.buffer.text(), "Buy milk");
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn test_drag_from_frame_moves_window() {
    let mut app = App::new("unused.txt");
    step(
        &mut app,
        Action::BeginDrag {
            local: Point::new(50.0, 10.0),
            over_text_area: false,
        },
    );
    assert_eq!(app.drag.anchor, Some(Point::new(50.0, 10.0)));

    let moves: Vec<Effect> = [(300.0, 200.0), (310.0, 205.0)]
        .into_iter()
        .map(|(x, y)| {
            step(
                &mut app,
                Action::Drag {
                    pointer_screen: Point::new(x, y),
                },
            )
        })
        .collect();
    assert_eq!(
        moves,
        vec![
            Effect::MoveWindow(Point::new(250.0, 190.0)),
            Effect::MoveWindow(Point::new(260.0, 195.0)),
        ]
    );
}
