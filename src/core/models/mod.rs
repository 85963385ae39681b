//! Data models for `zkviz`

pub mod graph;
pub mod zettel;

pub use graph::{ZettelGraph, ZettelNode};
pub use zettel::Zettel;
