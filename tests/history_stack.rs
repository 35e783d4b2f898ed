use image::Rgb;
use raster_paint::renderer;
use raster_paint::stroke::StrokeStyle;
use raster_paint::surface::WHITE;
use raster_paint::{History, HistoryError, Point, Surface, ToolMode};

// Helper to commit an edit the way the draw session does: checkpoint first, then mutate
fn commit_line(history: &mut History, surface: &mut Surface, i: i32) {
    history.checkpoint(surface);
    let style = StrokeStyle::new(Rgb([i as u8 * 20, 0, 0]), 2, false);
    renderer::render(
        surface,
        ToolMode::Line,
        Point::new(i * 5, 0),
        Point::new(i * 5, 49),
        &style,
        WHITE,
    );
}

#[test]
fn test_n_undos_restore_initial_surface() {
    let mut history = History::new();
    let mut surface = Surface::new(50, 50, WHITE);
    let initial = surface.clone();

    for i in 1..=6 {
        commit_line(&mut history, &mut surface, i);
    }
    assert_eq!(history.undo_depth(), 6);
    assert!(surface != initial);

    for _ in 0..6 {
        surface = history.undo(&surface).unwrap();
    }
    assert!(surface == initial);
    assert_eq!(history.redo_depth(), 6);
    assert_eq!(history.undo(&surface).unwrap_err(), HistoryError::EmptyHistory);
}

#[test]
fn test_undo_then_redo_is_bit_identical() {
    let mut history = History::new();
    let mut surface = Surface::new(50, 50, WHITE);
    commit_line(&mut history, &mut surface, 1);
    commit_line(&mut history, &mut surface, 2);
    let before_undo = surface.clone();

    surface = history.undo(&surface).unwrap();
    surface = history.redo(&surface).unwrap();

    assert_eq!(surface.as_raw(), before_undo.as_raw());
    assert_eq!(history.undo_depth(), 2);
    assert!(!history.can_redo());
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut history = History::new();
    let mut surface = Surface::new(50, 50, WHITE);
    commit_line(&mut history, &mut surface, 1);
    commit_line(&mut history, &mut surface, 2);

    surface = history.undo(&surface).unwrap();
    assert!(history.can_redo());

    commit_line(&mut history, &mut surface, 3);
    assert!(!history.can_redo());
    assert_eq!(history.redo(&surface).unwrap_err(), HistoryError::EmptyHistory);
}

#[test]
fn test_empty_history() {
    let mut history = History::new();
    let surface = Surface::new(4, 4, WHITE);

    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo(&surface).unwrap_err(), HistoryError::EmptyHistory);
    assert_eq!(history.redo(&surface).unwrap_err(), HistoryError::EmptyHistory);
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_snapshots_are_independent_clones() {
    let mut history = History::new();
    let mut surface = Surface::new(10, 10, WHITE);

    history.checkpoint(&surface);
    surface.fill(Rgb([1, 2, 3]));

    assert!(history.peek_undo().unwrap().is_uniform(WHITE));
}

#[test]
fn test_clear_drops_both_stacks() {
    let mut history = History::new();
    let mut surface = Surface::new(10, 10, WHITE);
    commit_line(&mut history, &mut surface, 1);
    commit_line(&mut history, &mut surface, 1);
    let _ = history.undo(&surface).unwrap();

    history.clear();
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}
