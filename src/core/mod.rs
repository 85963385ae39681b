//! Core module: graph model, layout, figure building and rendering

pub mod config;
pub mod figure;
pub mod layout;
pub mod models;
pub mod notes;
pub mod render;
pub mod visualizer;

pub use visualizer::{GraphVisualizer, VisualizerSettings};

/// Returns the current version of the `zettel-viz` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
