//! Plane primitives shared by the codec and the crossing detector.
//!
//! These are intentionally lightweight and `Clone`-friendly so per-pass state can be built and
//! discarded without bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// One accepted intersection on a specific segment of the jumper polyline.
///
/// `t` is the fractional position along that segment (0 = segment start, 1 = segment end) and is
/// always strictly interior: touches at segment endpoints are not crossings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub point: Point,
    pub t: f64,
}

/// Crossings of one polyline, keyed by the index of the segment they sit on.
///
/// Segment `i` connects point `i` to point `i + 1`. A `BTreeMap` keeps segment iteration in
/// path order; the per-segment lists are sorted by `t` only when the jump path is built, since
/// crossings against several base edges arrive interleaved.
pub type SegmentCrossings = BTreeMap<usize, Vec<Crossing>>;
