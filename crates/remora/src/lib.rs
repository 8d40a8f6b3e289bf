#![forbid(unsafe_code)]

//! Edge-crossing bridges and fan-out bundling reconciliation for node-link diagram renderers.
//!
//! Two independent per-pass pipelines:
//!
//! - [`bridge`]: after a render pass, reads each straight-line edge's rendered path data back
//!   through the [`bridge::RenderedPaths`] seam, detects pairwise crossings, and rewrites the
//!   jumper edge's path with semicircular jump arcs. Later-rendered edges jump over
//!   earlier-rendered ones.
//! - [`bundle`]: tells an external point-to-point layout engine which synthetic fan-out
//!   elements to exclude, then derives junction, trunk, and branch geometry from the routes the
//!   engine computed for hidden proxy edges, and strips the proxies from the render model.
//!
//! The pure geometry (path codec, segment intersection, jump-path building) lives in
//! `remora-core`.

pub mod bridge;
pub mod bundle;
pub mod model;

pub use remora_core::{BridgeOptions, Crossing, Point, SegmentCrossings};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("junction `{junction}`: expected exactly one trunk edge, found {found}")]
    TrunkCount { junction: String, found: usize },
    #[error("junction `{junction}` has no branch edges")]
    NoBranches { junction: String },
    #[error("branch `{branch}` has no proxy edge for target `{target}`")]
    MissingProxy { branch: String, target: String },
}

pub type Result<T> = std::result::Result<T, Error>;
