//! Integration tests for undo/redo editing sessions.

use retouch::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("retouch=trace,retouch_ops=debug"))
        .with_test_writer()
        .try_init();
}

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let level = ((x * 255) / width.max(1)) as u8;
            img.set(x, y, Argb::new(255 - (y * 20) as u8, level, 255 - level, (x ^ y) as u8 * 16));
        }
    }
    img
}

fn all_operations() -> Vec<Operation> {
    let mut ops: Vec<Operation> = (0..8).map(Operation::emboss).collect();
    ops.extend([
        Operation::contrast_brightness(0.0, 0.0),
        Operation::contrast_brightness(50.0, -25.0),
        Operation::contrast_brightness(-100.0, 100.0),
        Operation::contrast_brightness(100.0, -100.0),
    ]);
    ops
}

#[test]
fn test_apply_then_undo_is_bit_identical() {
    init_logging();
    for op in all_operations() {
        let mut image = EditableImage::new();
        image.load(gradient(9, 6));
        image.apply(Operation::contrast_brightness(15.0, 5.0)).unwrap();
        let before = image.current().unwrap().clone();

        image.apply(op).unwrap();
        image.undo().unwrap();
        assert_eq!(image.current().unwrap(), &before, "{op:?}");
    }
}

#[test]
fn test_undo_then_redo_is_bit_identical() {
    init_logging();
    for op in all_operations() {
        let mut image = EditableImage::new();
        image.load(gradient(7, 7));
        image.apply(op).unwrap();
        let after = image.current().unwrap().clone();

        image.undo().unwrap();
        image.redo().unwrap();
        assert_eq!(image.current().unwrap(), &after, "{op:?}");
    }
}

#[test]
fn test_current_is_replay_of_undo_sequence() {
    init_logging();
    let mut image = EditableImage::new();
    image.load(gradient(10, 4));

    let script = [
        Operation::contrast_brightness(30.0, 0.0),
        Operation::emboss(1),
        Operation::contrast_brightness(-10.0, 20.0),
        Operation::emboss(6),
    ];
    for op in script {
        image.apply(op).unwrap();
    }
    image.undo().unwrap();
    image.undo().unwrap();
    image.redo().unwrap();

    let expected = image
        .operations()
        .iter()
        .fold(image.original().unwrap().clone(), |img, op| op.apply(&img));
    assert_eq!(image.current().unwrap(), &expected);
    assert_eq!(image.operations(), &script[..3]);
    assert_eq!(image.undone_operations(), &script[3..]);
}

#[test]
fn test_new_edit_after_undo_discards_redo_branch() {
    let mut image = EditableImage::new();
    image.load(gradient(5, 5));
    image.apply(Operation::emboss(2)).unwrap();
    image.apply(Operation::emboss(3)).unwrap();
    image.undo().unwrap();
    image.undo().unwrap();
    assert_eq!(image.redo_len(), 2);

    image.apply(Operation::contrast_brightness(5.0, 5.0)).unwrap();
    assert_eq!(image.redo_len(), 0);
    let current = image.current().unwrap().clone();
    assert!(matches!(image.redo(), Err(EditError::NothingToRedo)));
    assert_eq!(image.current().unwrap(), &current);
}

#[test]
fn test_state_machine_transitions() {
    let mut image = EditableImage::new();
    assert_eq!(image.state(), EditState::Empty);

    image.load(gradient(3, 3));
    assert_eq!(image.state(), EditState::Loaded);

    image.apply(Operation::emboss(0)).unwrap();
    image.apply(Operation::emboss(4)).unwrap();
    assert_eq!(image.state(), EditState::Edited);

    image.undo().unwrap();
    assert_eq!(image.state(), EditState::Redoable);
    assert!(image.can_undo() && image.can_redo());

    image.redo().unwrap();
    assert_eq!(image.state(), EditState::Edited);

    image.load(gradient(2, 2));
    assert_eq!(image.state(), EditState::Loaded);
}

#[test]
fn test_emboss_white_square_through_editor() {
    let mut image = EditableImage::new();
    image.load(PixelBuffer::filled(3, 3, Argb::WHITE));
    image.apply(Emboss::with_direction(EmbossDirection::East)).unwrap();

    let current = image.current().unwrap();
    assert_eq!(current.dimensions(), (3, 3));
    assert!(current.pixels().iter().all(|px| px.channels() == (255, 127, 127, 127)));
}

#[test]
fn test_shared_image_drives_same_session() {
    let shared = SharedImage::new(EditableImage::new());
    shared.load(gradient(4, 4));
    shared.apply(ContrastBrightness::new(0.0, 100.0)).unwrap();
    shared.undo().unwrap();
    assert_eq!(shared.snapshot().unwrap(), gradient(4, 4));
    shared.redo().unwrap();
    assert_eq!(shared.state(), EditState::Edited);
}
