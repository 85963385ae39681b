//! CLI command handlers for `zkviz`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod render;
