use egui::{Color32, Pos2, pos2};
use fingerpaint::document::Document;
use fingerpaint::hand::{Hand, HandInput, classify};
use fingerpaint::tools::{DrawStrokeTool, EraserTool};

// A hand holding the OK gesture with the index tip at `pos`.
fn ok_hand(pos: Pos2) -> Hand {
    Hand {
        index_tip: pos,
        thumb_tip: pos2(pos.x + 10.0, pos.y + 10.0),
    }
}

#[test]
fn test_two_hand_frame_commits_the_in_progress_stroke() {
    let mut document = Document::new();
    let mut tool = DrawStrokeTool::new();

    // Draw for a few frames with one hand...
    for i in 0..5 {
        let frame = [ok_hand(pos2(200.0 + i as f32, 200.0))];
        match classify(&frame) {
            HandInput::One(pointer) => {
                assert!(pointer.ok);
                tool.pen_down(pointer.pos);
            }
            other => panic!("expected a single hand, got {other:?}"),
        }
    }
    assert_eq!(tool.points().len(), 5);

    // ...then a second hand appears: commit and reset.
    let frame = [ok_hand(pos2(0.0, 0.0)), ok_hand(pos2(600.0, 0.0))];
    match classify(&frame) {
        HandInput::Many => tool.pen_up(&mut document, Color32::BLUE),
        other => panic!("expected the commit signal, got {other:?}"),
    }

    assert_eq!(document.stroke_count(), 1);
    assert_eq!(document.strokes()[0].points().len(), 5);
    assert!(tool.points().is_empty());
    assert!(!tool.is_drawing());
}

#[test]
fn test_empty_detection_frames_do_not_reset_the_gesture() {
    let mut tool = DrawStrokeTool::new();
    tool.pen_down(pos2(100.0, 100.0));

    // Zero hands: no positional input, and nothing is committed or reset.
    assert!(matches!(classify(&[]), HandInput::None));
    assert!(tool.is_drawing());
    assert_eq!(tool.points().len(), 1);

    tool.pen_down(pos2(104.0, 100.0));
    assert_eq!(tool.points().len(), 2);
}

#[test]
fn test_erasing_removes_nearby_points_and_the_emptied_stroke() {
    let mut document = Document::new();
    let mut tool = DrawStrokeTool::new();
    tool.pen_down(pos2(100.0, 100.0));
    tool.pen_down(pos2(100.0, 104.0));
    tool.pen_up(&mut document, Color32::BLUE);
    assert_eq!(document.stroke_count(), 1);

    // Both points sit within the 25 px radius of the fingertip, so the
    // stroke disappears from the store entirely.
    let eraser = EraserTool::new();
    let removed = eraser.erase_at(&mut document, pos2(100.0, 100.0));
    assert_eq!(removed, 2);
    assert_eq!(document.stroke_count(), 0);

    // Erasing over nothing is a normal, silent frame.
    assert_eq!(eraser.erase_at(&mut document, pos2(100.0, 100.0)), 0);
}

#[test]
fn test_smoothing_filters_a_jittery_gesture() {
    let mut tool = DrawStrokeTool::new();
    tool.pen_down(pos2(100.0, 100.0));

    // Raw fingertip jitters around the hold point; the recorded points
    // stay strictly inside the jitter envelope.
    let jitter = [
        pos2(108.0, 96.0),
        pos2(94.0, 103.0),
        pos2(105.0, 106.0),
        pos2(97.0, 95.0),
    ];
    for raw in jitter {
        tool.pen_down(raw);
    }
    for point in tool.points() {
        assert!(point.x > 94.0 && point.x < 108.0);
        assert!(point.y > 95.0 && point.y < 106.0);
    }
}
