//! Pixel graph model and flood-fill traversals
//!
//! - `types`: nodes and the image graph they form
//! - `builder`: construction of a graph from the positional text format
//! - `fill`: breadth-first and depth-first flood fill
//! - `matrix`: adjacency matrix view of the graph

pub mod builder;
pub mod fill;
pub mod matrix;
pub mod types;

pub use builder::{create_graph, decode_input, ParsedInput, SearchRequest};
pub use fill::{bfs_fill, dfs_fill, flood_fill, Algorithm, FillObserver, FillReport};
pub use matrix::AdjacencyMatrix;
pub use types::{ImageGraph, Node};
