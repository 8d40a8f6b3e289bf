use remora_core::path::{build_jump_path, parse_path_points};
use remora_core::{BridgeOptions, Crossing, Point, SegmentCrossings};

fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn crossing_at(x: f64, y: f64, t: f64) -> Crossing {
    Crossing {
        point: pt(x, y),
        t,
    }
}

#[test]
fn parse_absolute_move_and_line_commands() {
    let points = parse_path_points("M0,0 L10,0 L10,20");
    assert_eq!(points, vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 20.0)]);
}

#[test]
fn parse_relative_commands_offset_the_cursor() {
    let points = parse_path_points("m5,5 l10,0 h5 v10 H40 V40");
    assert_eq!(
        points,
        vec![
            pt(5.0, 5.0),
            pt(15.0, 5.0),
            pt(20.0, 5.0),
            pt(20.0, 15.0),
            pt(40.0, 15.0),
            pt(40.0, 40.0),
        ]
    );
}

#[test]
fn parse_treats_close_as_a_no_op() {
    let points = parse_path_points("M0,0 L10,0 Z");
    assert_eq!(points, vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
}

#[test]
fn parse_rejects_every_curve_command() {
    for d in [
        "M0,0 C1,1 2,2 3,3",
        "M0,0 S2,2 3,3",
        "M0,0 Q1,1 3,3",
        "M0,0 T3,3",
        "M0,0 A5,5 0 0 1 10,10",
        "M0,0 c1,1 2,2 3,3",
        "M0,0 s2,2 3,3",
        "M0,0 q1,1 3,3",
        "M0,0 t3,3",
        "M0,0 a5,5 0 0 1 10,10",
    ] {
        assert!(
            parse_path_points(d).is_empty(),
            "expected curve path {d:?} to be rejected"
        );
    }
}

#[test]
fn parse_rejects_malformed_data() {
    assert!(parse_path_points("M0,0 Lfoo").is_empty());
    assert!(parse_path_points("not a path").is_empty());
}

#[test]
fn build_without_crossings_round_trips_the_polyline() {
    let d = "M0,0 L10,0 L10,20 L35.5,20";
    let points = parse_path_points(d);
    let rebuilt = build_jump_path(&points, &SegmentCrossings::new(), &BridgeOptions::default());
    assert_eq!(parse_path_points(&rebuilt), points);
}

#[test]
fn build_inserts_a_semicircular_arc_at_a_crossing() {
    let points = vec![pt(0.0, 0.0), pt(100.0, 0.0)];
    let mut crossings = SegmentCrossings::new();
    crossings.insert(0, vec![crossing_at(50.0, 0.0, 0.5)]);

    let d = build_jump_path(&points, &crossings, &BridgeOptions::default());
    assert_eq!(d, "M0,0 L44,0 A6,6,0,0,1,56,0 L100,0");
}

#[test]
fn build_sorts_crossings_by_parametric_offset() {
    let points = vec![pt(0.0, 0.0), pt(100.0, 0.0)];
    let mut crossings = SegmentCrossings::new();
    // Inserted out of order; the builder must emit the t=0.2 bridge first.
    crossings.insert(
        0,
        vec![crossing_at(80.0, 0.0, 0.8), crossing_at(20.0, 0.0, 0.2)],
    );

    let d = build_jump_path(&points, &crossings, &BridgeOptions::default());
    assert_eq!(d, "M0,0 L14,0 A6,6,0,0,1,26,0 L74,0 A6,6,0,0,1,86,0 L100,0");
}

#[test]
fn build_collapses_crossings_closer_than_the_minimum_spacing() {
    // Default spacing is 3 * radius = 18; these two crossings sit 10 apart.
    let points = vec![pt(0.0, 0.0), pt(100.0, 0.0)];
    let mut crossings = SegmentCrossings::new();
    crossings.insert(
        0,
        vec![crossing_at(50.0, 0.0, 0.5), crossing_at(60.0, 0.0, 0.6)],
    );

    let d = build_jump_path(&points, &crossings, &BridgeOptions::default());
    assert_eq!(d.matches('A').count(), 1, "close cluster must emit one bridge: {d}");
    assert_eq!(d, "M0,0 L44,0 A6,6,0,0,1,56,0 L100,0");
}

#[test]
fn build_keeps_crossings_farther_apart_than_the_minimum_spacing() {
    let points = vec![pt(0.0, 0.0), pt(100.0, 0.0)];
    let mut crossings = SegmentCrossings::new();
    crossings.insert(
        0,
        vec![crossing_at(30.0, 0.0, 0.3), crossing_at(70.0, 0.0, 0.7)],
    );

    let d = build_jump_path(&points, &crossings, &BridgeOptions::default());
    assert_eq!(d.matches('A').count(), 2, "spaced crossings must both bridge: {d}");
}

#[test]
fn build_only_bridges_the_segment_that_owns_the_crossing() {
    let points = vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0)];
    let mut crossings = SegmentCrossings::new();
    crossings.insert(1, vec![crossing_at(100.0, 50.0, 0.5)]);

    let d = build_jump_path(&points, &crossings, &BridgeOptions::default());
    assert_eq!(d, "M0,0 L100,0 L100,44 A6,6,0,0,1,100,56 L100,100");
}

#[test]
fn build_with_no_points_is_empty() {
    let d = build_jump_path(&[], &SegmentCrossings::new(), &BridgeOptions::default());
    assert!(d.is_empty());
}
