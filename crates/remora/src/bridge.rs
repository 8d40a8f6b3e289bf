//! Crossing orchestrator: collect rendered edges during a pass, resolve crossings after it.
//!
//! The resolver deliberately reads each edge's *rendered* path data back through
//! [`RenderedPaths`] instead of recomputing routing: only the rendered output reflects what the
//! layout/edge-router actually produced. The two-phase protocol (collect while each edge is
//! drawn, resolve once after the whole pass) avoids read-after-write hazards against edges that
//! have not been drawn yet.

use remora_core::{BridgeOptions, Point, SegmentCrossings, crossing, path};
use rustc_hash::FxHashMap;

/// Read-back channel to the rendered output, keyed by edge identity.
///
/// In a browser this is the live DOM; in a string renderer it is a path registry. Writes happen
/// in place, overwriting the shape's path data.
pub trait RenderedPaths {
    fn path_data(&self, edge_id: &str) -> Option<&str>;
    fn set_path_data(&mut self, edge_id: &str, d: String);
}

/// In-memory [`RenderedPaths`] implementation for renderers that emit strings.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    paths: FxHashMap<String, String>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: impl Into<String>, d: impl Into<String>) {
        self.paths.insert(edge_id.into(), d.into());
    }

    pub fn get(&self, edge_id: &str) -> Option<&str> {
        self.paths.get(edge_id).map(String::as_str)
    }
}

impl RenderedPaths for PathRegistry {
    fn path_data(&self, edge_id: &str) -> Option<&str> {
        self.paths.get(edge_id).map(String::as_str)
    }

    fn set_path_data(&mut self, edge_id: &str, d: String) {
        self.paths.insert(edge_id.to_string(), d);
    }
}

/// How the edge was drawn. Curved edges never receive bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    Polyline,
    Curve,
}

#[derive(Debug, Clone)]
struct CollectedEdge {
    id: String,
    /// Position among rendered siblings within the pass. Higher means drawn later, i.e.
    /// visually on top.
    z_index: usize,
}

#[derive(Debug)]
struct ParsedEdge {
    id: String,
    z_index: usize,
    points: Vec<Point>,
}

/// Per-render-pass crossing resolver.
///
/// Call [`edge_rendered`](Self::edge_rendered) for every edge as it is drawn, then
/// [`resolve_pass`](Self::resolve_pass) once after the pass completes. Collected state is
/// cleared at the start of every resolve, so an interrupted pass never leaks into the next.
#[derive(Debug, Default)]
pub struct BridgeResolver {
    options: BridgeOptions,
    next_z: usize,
    collected: Vec<CollectedEdge>,
}

impl BridgeResolver {
    pub fn new(options: BridgeOptions) -> Self {
        Self {
            options,
            next_z: 0,
            collected: Vec::new(),
        }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// Starts a fresh render pass, dropping anything collected by an interrupted previous pass.
    ///
    /// A model update can supersede a pass before its resolve ran; collected-but-unresolved
    /// metadata must never leak into the new pass.
    pub fn begin_pass(&mut self) {
        self.collected.clear();
        self.next_z = 0;
    }

    /// Collecting phase: registers one rendered edge with its sibling z-order index.
    ///
    /// Every rendered edge advances the z counter; only straight-line edges are collected, and
    /// nothing is collected while bridging is disabled.
    pub fn edge_rendered(&mut self, id: &str, shape: EdgeShape) {
        let z_index = self.next_z;
        self.next_z += 1;

        if !self.options.enabled || shape == EdgeShape::Curve {
            return;
        }
        self.collected.push(CollectedEdge {
            id: id.to_string(),
            z_index,
        });
    }

    /// Resolving phase: reads back rendered geometry, detects crossings between every pair of
    /// collected edges, and overwrites the path data of each edge that received at least one
    /// bridge. Edges with no crossings are left byte-for-byte untouched.
    ///
    /// A failed lookup or unparsable path excludes that edge from the pass; it never aborts the
    /// pass. With fewer than two usable edges the pass is a no-op.
    pub fn resolve_pass(&mut self, paths: &mut dyn RenderedPaths) {
        let collected = std::mem::take(&mut self.collected);
        self.next_z = 0;
        if !self.options.enabled {
            return;
        }

        let mut edges: Vec<ParsedEdge> = Vec::with_capacity(collected.len());
        for c in collected {
            let Some(d) = paths.path_data(&c.id) else {
                tracing::debug!(edge = %c.id, "rendered path not found; edge excluded from pass");
                continue;
            };
            let points = path::parse_path_points(d);
            if points.len() < 2 {
                tracing::trace!(edge = %c.id, "path not processable; edge excluded from pass");
                continue;
            }
            edges.push(ParsedEdge {
                id: c.id,
                z_index: c.z_index,
                points,
            });
        }
        if edges.len() < 2 {
            return;
        }

        // Per unordered pair, the later-rendered edge is the jumper: an edge never jumps over
        // an edge drawn above it.
        let mut crossings: FxHashMap<usize, SegmentCrossings> = FxHashMap::default();
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                let (jumper, base) = if edges[i].z_index > edges[j].z_index {
                    (i, j)
                } else {
                    (j, i)
                };
                let found = crossing::detect_crossings(
                    &edges[jumper].points,
                    &edges[base].points,
                    &self.options,
                );
                if !found.is_empty() {
                    crossing::merge_crossings(crossings.entry(jumper).or_default(), found);
                }
            }
        }

        for (idx, per_segment) in crossings {
            let edge = &edges[idx];
            let d = path::build_jump_path(&edge.points, &per_segment, &self.options);
            tracing::trace!(edge = %edge.id, segments = per_segment.len(), "rewrote path with bridges");
            paths.set_path_data(&edge.id, d);
        }
    }
}
