//! Render model and external-engine result types.

use crate::{Error, Result};
use remora_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    Normal,
    /// Synthetic fan-out point rendered as a small marker; excluded from real layout.
    Junction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    Normal,
    /// Bundle source to junction; geometry derived after layout.
    Trunk,
    /// Junction to one bundle target; geometry derived after layout.
    Branch,
    /// Hidden source-to-target edge routed by the layout engine in place of the bundle; never
    /// rendered.
    Proxy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    pub kind: NodeKind,
    /// Center position; `None` until a layout or reconciliation pass assigns one.
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: String,
    pub kind: EdgeKind,
    pub source: String,
    pub target: String,
    /// Routing points, in draw order.
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramModel {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl DiagramModel {
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut DiagramNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&DiagramEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut DiagramEdge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    pub fn junction_ids(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Junction)
            .map(|n| n.id.clone())
            .collect()
    }

    /// The trunk edge feeding `junction`, if exactly one exists.
    pub fn trunk_for(&self, junction: &str) -> Option<&DiagramEdge> {
        let mut it = self
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Trunk && e.target == junction);
        let trunk = it.next()?;
        if it.next().is_some() {
            return None;
        }
        Some(trunk)
    }

    /// Branch edges fanning out of `junction`, in model order.
    pub fn branches_for(&self, junction: &str) -> Vec<&DiagramEdge> {
        self.edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Branch && e.source == junction)
            .collect()
    }

    /// Checks the bundle invariants upstream construction is supposed to guarantee: exactly one
    /// trunk and at least one branch per junction, and a proxy (same source as the trunk) for
    /// every branch target.
    pub fn validate_bundles(&self) -> Result<()> {
        for junction in self.junction_ids() {
            let trunks: Vec<&DiagramEdge> = self
                .edges
                .iter()
                .filter(|e| e.kind == EdgeKind::Trunk && e.target == junction)
                .collect();
            if trunks.len() != 1 {
                return Err(Error::TrunkCount {
                    junction,
                    found: trunks.len(),
                });
            }
            let source = trunks[0].source.as_str();

            let branches = self.branches_for(&junction);
            if branches.is_empty() {
                return Err(Error::NoBranches { junction });
            }
            for branch in branches {
                let has_proxy = self.edges.iter().any(|e| {
                    e.kind == EdgeKind::Proxy && e.source == source && e.target == branch.target
                });
                if !has_proxy {
                    return Err(Error::MissingProxy {
                        branch: branch.id.clone(),
                        target: branch.target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One edge routing computed by the external layout engine: start point, optional bend points,
/// end point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub id: String,
    pub route: Vec<Point>,
}

/// Hierarchical layout-engine result. Edge routes may appear at any nesting level and are
/// collected by walking child containment recursively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutedGraph {
    pub id: String,
    pub children: Vec<RoutedGraph>,
    pub edges: Vec<RoutedEdge>,
}
