//! Fan-out bundling: layout-engine element filtering and post-layout reconciliation.
//!
//! The external layout engine only understands point-to-point edges. Junction nodes and
//! trunk/branch edges are therefore hidden from it, while per-target proxy edges are routed as
//! if every fan-out were a set of ordinary direct edges. Once the engine is done the
//! reconciler derives junction, trunk, and branch geometry from the proxy routes and deletes
//! the proxies from the model.

use crate::model::{DiagramEdge, DiagramModel, DiagramNode, EdgeKind, NodeKind, RoutedGraph};
use remora_core::Point;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Side length of the square junction marker, centered on the junction point.
    pub junction_size: f64,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self { junction_size: 10.0 }
    }
}

/// Layout inclusion decision for one node: junctions are positioned by the reconciler, not the
/// engine.
pub fn include_node_in_layout(node: &DiagramNode) -> bool {
    node.kind != NodeKind::Junction
}

/// Layout inclusion decision for one edge: trunk and branch geometry is derived afterward, so
/// only normal and proxy edges reach the engine. The engine's own rule that both endpoints must
/// be included still applies on its side.
pub fn include_edge_in_layout(edge: &DiagramEdge) -> bool {
    !matches!(edge.kind, EdgeKind::Trunk | EdgeKind::Branch)
}

/// Collects every usable edge route in the (hierarchical) engine result, recursing through
/// child containment. Routes with fewer than two points failed layout and are not collected.
pub fn collect_routes(result: &RoutedGraph) -> FxHashMap<&str, &[Point]> {
    let mut out: FxHashMap<&str, &[Point]> = FxHashMap::default();
    collect_routes_into(result, &mut out);
    out
}

fn collect_routes_into<'a>(graph: &'a RoutedGraph, out: &mut FxHashMap<&'a str, &'a [Point]>) {
    for edge in &graph.edges {
        if edge.route.len() >= 2 {
            out.insert(edge.id.as_str(), edge.route.as_slice());
        }
    }
    for child in &graph.children {
        collect_routes_into(child, out);
    }
}

/// Derives junction, trunk, and branch geometry for every bundle from the proxy routes in
/// `result`, then strips all proxy edges from the model.
///
/// A bundle with zero usable proxy routes is skipped: its junction stays unpositioned and
/// upstream construction is left to correct itself on the next pass. A branch whose proxy
/// route is missing keeps its prior routing.
pub fn reconcile_bundles(model: &mut DiagramModel, result: &RoutedGraph, options: &BundleOptions) {
    let routes = collect_routes(result);

    for junction in model.junction_ids() {
        let Some(trunk) = model.trunk_for(&junction) else {
            tracing::debug!(%junction, "no unique trunk edge; bundle skipped");
            continue;
        };
        let trunk_id = trunk.id.clone();
        let source = trunk.source.clone();

        let branch_targets: Vec<String> = model
            .branches_for(&junction)
            .iter()
            .map(|b| b.target.clone())
            .collect();
        if branch_targets.is_empty() {
            tracing::debug!(%junction, "no branch edges; bundle skipped");
            continue;
        }

        // Proxy routes for this bundle, in model order: same source as the trunk, target among
        // the branch targets.
        let mut proxy_routes: Vec<(String, &[Point])> = Vec::new();
        for edge in &model.edges {
            if edge.kind != EdgeKind::Proxy || edge.source != source {
                continue;
            }
            if !branch_targets.contains(&edge.target) {
                continue;
            }
            if let Some(route) = routes.get(edge.id.as_str()).copied() {
                proxy_routes.push((edge.target.clone(), route));
            }
        }
        let Some((_, first)) = proxy_routes.first() else {
            tracing::debug!(%junction, "no usable proxy routes; junction left unpositioned");
            continue;
        };

        // All proxies from the same source converge near the same layer boundary, so the first
        // proxy's first bend is a good junction point; a bend-free route falls back to its
        // midpoint. Which proxy is "first" is a documented heuristic, not geometry.
        let first_route = *first;
        let junction_point = if first_route.len() >= 3 {
            first_route[1]
        } else {
            first_route[0].midpoint(&first_route[first_route.len() - 1])
        };
        let trunk_start = first_route[0];

        if let Some(node) = model.node_mut(&junction) {
            node.x = Some(junction_point.x);
            node.y = Some(junction_point.y);
            node.width = options.junction_size;
            node.height = options.junction_size;
        }
        if let Some(edge) = model.edge_mut(&trunk_id) {
            edge.points = vec![trunk_start, junction_point];
        }
        for (target, route) in &proxy_routes {
            let end = route[route.len() - 1];
            let branch = model.edges.iter_mut().find(|e| {
                e.kind == EdgeKind::Branch && e.source == junction && e.target == *target
            });
            if let Some(edge) = branch {
                edge.points = vec![junction_point, end];
            }
        }
        tracing::trace!(%junction, branches = branch_targets.len(), proxies = proxy_routes.len(), "bundle reconciled");
    }

    // Proxies are a layout-only artifact; they must never reach the renderer.
    model.edges.retain(|e| e.kind != EdgeKind::Proxy);
}
