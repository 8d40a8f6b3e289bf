//! Straight-line SVG path codec.
//!
//! `parse_path_points` turns rendered path data into a polyline; `build_jump_path` rebuilds the
//! path data with jump arcs inserted at crossings. Only move/line commands are supported: any
//! curve command means the edge was routed as a spline and is never subjected to crossing
//! detection, so the parser reports "not processable" by returning an empty polyline.

use crate::config::BridgeOptions;
use crate::model::{Crossing, Point, SegmentCrossings};
use svgtypes::{PathParser, PathSegment};

/// Parses path data built from M/L/H/V (absolute or relative) and Z commands into the ordered
/// point sequence it traces.
///
/// Returns an empty list when the data contains a curve command (C/S/Q/T/A, either case) or
/// fails to tokenize. Z/z closes nothing here and is skipped.
pub fn parse_path_points(d: &str) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let mut cursor = Point::default();

    for seg in PathParser::from(d) {
        let Ok(seg) = seg else {
            return Vec::new();
        };
        match seg {
            PathSegment::MoveTo { abs, x, y } | PathSegment::LineTo { abs, x, y } => {
                if abs {
                    cursor = Point { x, y };
                } else {
                    cursor.x += x;
                    cursor.y += y;
                }
                points.push(cursor);
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                if abs {
                    cursor.x = x;
                } else {
                    cursor.x += x;
                }
                points.push(cursor);
            }
            PathSegment::VerticalLineTo { abs, y } => {
                if abs {
                    cursor.y = y;
                } else {
                    cursor.y += y;
                }
                points.push(cursor);
            }
            PathSegment::ClosePath { .. } => {}
            PathSegment::CurveTo { .. }
            | PathSegment::SmoothCurveTo { .. }
            | PathSegment::Quadratic { .. }
            | PathSegment::SmoothQuadratic { .. }
            | PathSegment::EllipticalArc { .. } => {
                return Vec::new();
            }
        }
    }

    points
}

/// Rebuilds path data for `points`, inserting a semicircular jump arc at each surviving
/// crossing.
///
/// Per segment the crossings are sorted by `t`; a crossing closer than
/// `spacing_factor * radius` to the previously kept one is collapsed away so overlapping
/// bridges never merge into corrupt geometry. Each surviving crossing becomes a line to an
/// approach point one radius short of the crossing, then an arc of that radius (fixed sweep)
/// to the landing point one radius past it.
pub fn build_jump_path(
    points: &[Point],
    crossings: &SegmentCrossings,
    options: &BridgeOptions,
) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut out = String::with_capacity(points.len() * 16);
    let mut buf = ryu_js::Buffer::new();

    out.push('M');
    push_coords(&mut out, &mut buf, first);

    let radius = options.radius;
    for (i, end) in points.iter().enumerate().skip(1) {
        let start = &points[i - 1];
        let segment_index = i - 1;

        if let Some(list) = crossings.get(&segment_index).filter(|l| !l.is_empty()) {
            let length = start.distance_to(end);
            if length <= f64::EPSILON {
                push_line(&mut out, &mut buf, end);
                continue;
            }
            let ux = (end.x - start.x) / length;
            let uy = (end.y - start.y) / length;

            for c in spaced_crossings(list, options.min_spacing()) {
                let approach = Point {
                    x: c.point.x - ux * radius,
                    y: c.point.y - uy * radius,
                };
                let landing = Point {
                    x: c.point.x + ux * radius,
                    y: c.point.y + uy * radius,
                };
                push_line(&mut out, &mut buf, &approach);
                out.push_str(" A");
                push_num(&mut out, &mut buf, radius);
                out.push(',');
                push_num(&mut out, &mut buf, radius);
                out.push_str(",0,0,1,");
                push_coords(&mut out, &mut buf, &landing);
            }
        }

        push_line(&mut out, &mut buf, end);
    }

    out
}

/// Sorts one segment's crossings by `t` and drops any crossing closer than `min_spacing` to the
/// previously kept one. Only the first of a close cluster survives.
fn spaced_crossings(list: &[Crossing], min_spacing: f64) -> Vec<Crossing> {
    let mut sorted: Vec<Crossing> = list.to_vec();
    sorted.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));

    let mut kept: Vec<Crossing> = Vec::with_capacity(sorted.len());
    for c in sorted {
        match kept.last() {
            Some(prev) if c.point.distance_to(&prev.point) < min_spacing => {}
            _ => kept.push(c),
        }
    }
    kept
}

fn push_line(out: &mut String, buf: &mut ryu_js::Buffer, p: &Point) {
    out.push_str(" L");
    push_coords(out, buf, p);
}

fn push_coords(out: &mut String, buf: &mut ryu_js::Buffer, p: &Point) {
    push_num(out, buf, p.x);
    out.push(',');
    push_num(out, buf, p.y);
}

fn push_num(out: &mut String, buf: &mut ryu_js::Buffer, mut v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    if v == -0.0 {
        v = 0.0;
    }
    out.push_str(buf.format_finite(v));
}
