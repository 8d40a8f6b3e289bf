//! Pairwise segment intersection between two polylines.

use crate::config::BridgeOptions;
use crate::model::{Crossing, Point, SegmentCrossings};

/// Intersects the jumper segment `p1 -> p2` with the base segment `q1 -> q2`.
///
/// Solves the 2x2 system from the segments' parametric forms. A determinant within
/// `parallel_eps` of zero means parallel (or degenerate) segments and yields no crossing.
/// Both parametric offsets must lie strictly inside `(endpoint_eps, 1 - endpoint_eps)`:
/// touches at or near segment endpoints are routing artifacts, not crossings.
///
/// The returned `t` locates the intersection on the jumper segment, recomputed by projecting
/// the intersection point onto it.
pub fn segment_intersection(
    p1: &Point,
    p2: &Point,
    q1: &Point,
    q2: &Point,
    options: &BridgeOptions,
) -> Option<Crossing> {
    let rx = p2.x - p1.x;
    let ry = p2.y - p1.y;
    let sx = q2.x - q1.x;
    let sy = q2.y - q1.y;

    let det = rx * sy - ry * sx;
    if det.abs() <= options.parallel_eps {
        return None;
    }

    let dx = q1.x - p1.x;
    let dy = q1.y - p1.y;
    let t = (dx * sy - dy * sx) / det;
    let u = (dx * ry - dy * rx) / det;

    let eps = options.endpoint_eps;
    if t <= eps || t >= 1.0 - eps || u <= eps || u >= 1.0 - eps {
        return None;
    }

    let point = Point {
        x: p1.x + t * rx,
        y: p1.y + t * ry,
    };

    Some(Crossing {
        point,
        t: project_onto_segment(p1, rx, ry, &point),
    })
}

fn project_onto_segment(p1: &Point, rx: f64, ry: f64, point: &Point) -> f64 {
    let len_sq = rx * rx + ry * ry;
    if len_sq <= f64::EPSILON {
        return 0.0;
    }
    ((point.x - p1.x) * rx + (point.y - p1.y) * ry) / len_sq
}

/// Finds every crossing of `jumper` over `base`, keyed by jumper segment index.
///
/// O(segments_jumper x segments_base); realistic diagrams keep edge segment counts small
/// enough that the quadratic pairing over a render pass stays cheap.
pub fn detect_crossings(
    jumper: &[Point],
    base: &[Point],
    options: &BridgeOptions,
) -> SegmentCrossings {
    let mut out = SegmentCrossings::new();
    if jumper.len() < 2 || base.len() < 2 {
        return out;
    }

    for (i, jw) in jumper.windows(2).enumerate() {
        for bw in base.windows(2) {
            if let Some(crossing) = segment_intersection(&jw[0], &jw[1], &bw[0], &bw[1], options) {
                out.entry(i).or_default().push(crossing);
            }
        }
    }

    out
}

/// Merges crossings from one more base edge into an accumulated per-segment map.
pub fn merge_crossings(into: &mut SegmentCrossings, from: SegmentCrossings) {
    for (segment, mut list) in from {
        into.entry(segment).or_default().append(&mut list);
    }
}
