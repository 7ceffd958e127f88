use approx::assert_abs_diff_eq;
use glam::Vec2;
use segment_sketch::app::handlers::{draw_tool, pointer};
use segment_sketch::{
    AppState, DrawToolKind, PointerButton, PointerEvent, Segment, SegmentIntersector,
    SweepLineIntersection,
};

fn make_state() -> AppState {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut state = AppState::new();
    draw_tool::select(&mut state, DrawToolKind::LineSegment);
    state
}

fn click(state: &mut AppState, button: PointerButton, x: f32, y: f32) {
    pointer::pointer_event(
        state,
        PointerEvent::Down {
            button,
            pos: Vec2::new(x, y),
        },
    )
    .expect("Event-Verarbeitung erwartet");
}

fn pointer_move(state: &mut AppState, x: f32, y: f32) {
    pointer::pointer_event(
        state,
        PointerEvent::Move {
            button: PointerButton::Primary,
            pos: Vec2::new(x, y),
        },
    )
    .expect("Event-Verarbeitung erwartet");
}

#[test]
fn test_two_clicks_commit_single_segment() {
    let mut state = make_state();

    click(&mut state, PointerButton::Primary, 0.0, 0.0);
    click(&mut state, PointerButton::Primary, 10.0, 0.0);

    assert_eq!(
        state.sketch.segments(),
        &[Segment::new(Vec2::ZERO, Vec2::new(10.0, 0.0))]
    );
    assert!(state.sketch.temp_segment().is_none());
    assert!(state.sketch.intersection_points().is_empty());
}

#[test]
fn test_crossing_segments_yield_intersection() {
    let mut state = make_state();

    click(&mut state, PointerButton::Primary, 0.0, 0.0);
    click(&mut state, PointerButton::Primary, 10.0, 0.0);
    click(&mut state, PointerButton::Primary, 5.0, -5.0);
    click(&mut state, PointerButton::Primary, 5.0, 5.0);

    let points = state.sketch.intersection_points();
    assert_eq!(points.len(), 1);
    assert_abs_diff_eq!(points[0].x, 5.0, epsilon = 0.001);
    assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 0.001);
}

#[test]
fn test_secondary_click_cancels_gesture() {
    let mut state = make_state();

    click(&mut state, PointerButton::Primary, 0.0, 0.0);
    pointer_move(&mut state, 1.0, 1.0);
    click(&mut state, PointerButton::Secondary, 1.0, 1.0);

    assert!(state.sketch.temp_segment().is_none());
    assert!(state.sketch.segments().is_empty());
}

#[test]
fn test_tool_switch_discards_pending_gesture() {
    let mut state = make_state();

    click(&mut state, PointerButton::Primary, 0.0, 0.0);
    pointer_move(&mut state, 4.0, 4.0);
    draw_tool::select(&mut state, DrawToolKind::ArcSegment);

    assert!(state.sketch.temp_segment().is_none());
    assert!(state.sketch.segments().is_empty());

    draw_tool::select(&mut state, DrawToolKind::LineSegment);
    click(&mut state, PointerButton::Primary, 8.0, 8.0);
    let temp = state
        .sketch
        .temp_segment()
        .expect("Frische Geste erwartet");
    assert_eq!(temp.start, Vec2::new(8.0, 8.0));
}

#[test]
fn test_intersections_are_order_independent() {
    let engine = SweepLineIntersection::new();
    let a = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let b = Segment::new(Vec2::new(5.0, -5.0), Vec2::new(5.0, 5.0));

    let forward = engine.intersections(&[a, b]).expect("Reihenfolge a, b");
    let backward = engine.intersections(&[b, a]).expect("Reihenfolge b, a");
    assert_eq!(forward, backward);
}

#[test]
fn test_rejected_commit_surfaces_error() {
    let mut state = make_state();

    click(&mut state, PointerButton::Primary, 0.0, 0.0);
    let result = pointer::pointer_event(
        &mut state,
        PointerEvent::Down {
            button: PointerButton::Primary,
            pos: Vec2::new(f32::NAN, 0.0),
        },
    );

    assert!(result.is_err(), "NaN-Klick muss als Fehler auftauchen");
    assert!(state.sketch.segments().is_empty());
}
