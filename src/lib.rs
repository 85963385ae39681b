//! Library for `zkviz`
//!
//! Builds a citation graph out of a Zettelkasten, lays it out and renders an
//! interactive Plotly figure to a standalone HTML file.

pub mod core;
pub mod logger;

pub use crate::core::*;
