//! Tunables for bridge geometry and intersection tolerances.

use serde::{Deserialize, Serialize};

/// Options controlling jump-arc geometry and crossing acceptance.
///
/// The epsilons are tuning constants, not protocol: diagrams at different zoom or scale factors
/// may need wider or narrower tolerance bands, so they are configuration rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgeOptions {
    /// Radius of the semicircular jump arc, in diagram units.
    pub radius: f64,
    /// Minimum separation between two bridges on the same segment, as a multiple of `radius`.
    /// Crossings closer than `spacing_factor * radius` to the previously kept crossing collapse
    /// into one bridge.
    pub spacing_factor: f64,
    /// Determinant band below which two segments are treated as parallel (no crossing).
    pub parallel_eps: f64,
    /// Exclusion band at segment endpoints: the parametric offsets must lie strictly inside
    /// `(endpoint_eps, 1 - endpoint_eps)`. Rejects near-endpoint touches that shared layout
    /// routing produces as false positives.
    pub endpoint_eps: f64,
    /// Whether bridging is active at all. When false the orchestrator collects nothing.
    pub enabled: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            radius: 6.0,
            spacing_factor: 3.0,
            parallel_eps: 1e-9,
            endpoint_eps: 1e-4,
            enabled: true,
        }
    }
}

impl BridgeOptions {
    /// Minimum euclidean distance between two kept crossings on the same segment.
    pub fn min_spacing(&self) -> f64 {
        self.spacing_factor * self.radius
    }
}
