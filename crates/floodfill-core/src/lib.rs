//! Floodfill Core Library
//!
//! Graph model, input parsing, flood-fill traversals and grid rendering
//! for the floodfill CLI.

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod render;
