use std::path::PathBuf;

use image::Rgb;
use raster_paint::renderer;
use raster_paint::state::BlankCanvas;
use raster_paint::stroke::StrokeStyle;
use raster_paint::surface::WHITE;
use raster_paint::{
    CodecError, DrawSession, FileStore, Persistence, PersistenceError, Point, SessionConfig,
    Surface, ToolMode,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("raster_paint_{}_{}", uuid::Uuid::new_v4(), name))
}

fn busy_surface() -> Surface {
    let mut surface = Surface::new(64, 48, WHITE);
    let shapes = [
        (ToolMode::Rectangle, (4, 4), (30, 20), Rgb([200, 10, 10]), true),
        (ToolMode::Ellipse, (40, 24), (50, 30), Rgb([10, 200, 10]), false),
        (ToolMode::Line, (0, 47), (63, 0), Rgb([10, 10, 200]), false),
    ];
    for (mode, a, b, color, filled) in shapes {
        let style = StrokeStyle::new(color, 3, filled);
        renderer::render(&mut surface, mode, Point::from(a), Point::from(b), &style, WHITE);
    }
    surface
}

#[test]
fn test_encode_decode_is_pixel_exact() {
    let surface = busy_surface();
    let bytes = surface.encode().unwrap();
    let decoded = Surface::decode(&bytes).unwrap();

    assert_eq!(decoded.dimensions(), surface.dimensions());
    assert_eq!(decoded.as_raw(), surface.as_raw());
}

#[test]
fn test_decode_rejects_malformed_bytes() {
    assert!(matches!(Surface::decode(b"definitely not a png"), Err(CodecError::Image(_))));
    assert!(Surface::decode(&[]).is_err());

    let mut truncated = busy_surface().encode().unwrap();
    truncated.truncate(truncated.len() / 2);
    assert!(Surface::decode(&truncated).is_err());
}

#[test]
fn test_zero_extent_image_is_rejected() {
    let empty = image::RgbImage::new(0, 5);
    assert!(matches!(
        Surface::from_image(empty),
        Err(CodecError::ZeroDimensions { width: 0, height: 5 })
    ));
}

#[test]
fn test_save_and_load_through_filesystem() {
    let save = temp_path("saved.png");
    let autosave = temp_path("autosave.png");
    let mut persistence = Persistence::new(FileStore, &save, &autosave);
    let surface = busy_surface();

    assert_eq!(persistence.save(&surface).unwrap(), save);
    let loaded = persistence.load(&save).unwrap();
    assert!(loaded == surface);
    assert!(!autosave.exists());

    std::fs::remove_file(&save).unwrap();
}

#[test]
fn test_save_to_unwritable_path_is_reported() {
    let dir = temp_path("missing_dir");
    let mut persistence = Persistence::new(FileStore, dir.join("a.png"), dir.join("b.png"));

    let err = persistence.save(&busy_surface()).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
}

#[test]
fn test_session_survives_failed_save() {
    let dir = temp_path("missing_dir");
    let persistence = Persistence::new(FileStore, dir.join("a.png"), dir.join("b.png"));
    let mut session = DrawSession::new(
        Surface::new(20, 20, WHITE),
        SessionConfig::default(),
        persistence,
        WHITE,
    );

    assert!(session.save().is_err());
    assert!(session.status().unwrap().starts_with("Save failed"));

    // auto-save failure is logged, never fatal
    session.exit();
    assert!(session.has_exited());
}

#[test]
fn test_corrupt_start_image_falls_back_to_blank() {
    let path = temp_path("corrupt.png");
    std::fs::write(&path, b"\x89PNG garbage").unwrap();

    let persistence = Persistence::new(FileStore, temp_path("s.png"), temp_path("a.png"));
    let blank = BlankCanvas {
        width: 30,
        height: 20,
        background: WHITE,
    };
    let surface = persistence.load_or_blank(Some(&path), Some((800, 600)), blank);

    assert_eq!(surface.dimensions(), (30, 20));
    assert!(surface.is_uniform(WHITE));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_autosave_file_matches_surface() {
    let autosave = temp_path("autosave.png");
    let persistence = Persistence::new(FileStore, temp_path("saved.png"), &autosave);
    let mut session = DrawSession::new(busy_surface(), SessionConfig::default(), persistence, WHITE);

    session.exit();
    session.exit();

    let written = Surface::decode(&std::fs::read(&autosave).unwrap()).unwrap();
    assert!(written == busy_surface());

    std::fs::remove_file(&autosave).unwrap();
}
