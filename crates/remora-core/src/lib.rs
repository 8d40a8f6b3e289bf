#![forbid(unsafe_code)]

//! Pure geometry for edge-crossing bridges.
//!
//! This crate knows nothing about diagram models or rendering targets. It parses straight-line
//! SVG path data into polylines, finds pairwise segment crossings between two polylines, and
//! rebuilds path data with semicircular jump arcs inserted at the crossings. The diagram-facing
//! orchestration lives in the `remora` crate.

pub mod config;
pub mod crossing;
pub mod model;
pub mod path;

pub use config::BridgeOptions;
pub use model::{Crossing, Point, SegmentCrossings};
