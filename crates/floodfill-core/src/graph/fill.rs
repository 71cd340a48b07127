//! Breadth-first and depth-first flood fill
//!
//! Both traversals recolor every node reachable from the start through nodes
//! sharing the start's color, and call the observer once per recolored node.
//! They differ only in visiting order.


use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::graph::types::{ImageGraph, Node};

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// Receives a callback after every node a traversal recolors
pub trait FillObserver {
    fn on_recolor(&mut self, graph: &ImageGraph, node: usize) -> Result<()>;
}

impl<F> FillObserver for F
where
    F: FnMut(&ImageGraph, usize) -> Result<()>,
{
    fn on_recolor(&mut self, graph: &ImageGraph, node: usize) -> Result<()> {
        self(graph, node)
    }
}

/// Summary of one traversal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillReport {
    pub algorithm: Algorithm,
    pub start: usize,
    /// Color of the start node when the run began
    pub target_color: Color,
    pub fill_color: Color,
    /// Recolored nodes, in the order they were painted
    pub visit_order: Vec<usize>,
    /// DFS stack entries popped after their node was already painted
    pub skipped_pops: usize,
}

impl FillReport {
    fn new(algorithm: Algorithm, start: usize, target_color: Color, fill_color: Color) -> Self {
        Self {
            algorithm,
            start,
            target_color,
            fill_color,
            visit_order: Vec::new(),
            skipped_pops: 0,
        }
    }

    /// Number of snapshots emitted, one per recolored node
    pub fn snapshots(&self) -> usize {
        self.visit_order.len()
    }
}

fn is_fillable(node: &Node, target_color: Color) -> bool {
    !node.visited && node.color == target_color
}

fn paint(
    graph: &mut ImageGraph,
    index: usize,
    fill: Color,
    report: &mut FillReport,
    observer: &mut dyn FillObserver,
) -> Result<()> {
    graph.recolor(index, fill)?;
    report.visit_order.push(index);
    observer.on_recolor(graph, index)
}

/// Flood fill using a FIFO frontier.
///
/// Nodes are painted when they are enqueued, so each is painted exactly once.
#[tracing::instrument(skip(graph, fill, observer), fields(fill = %fill))]
pub fn bfs_fill(
    graph: &mut ImageGraph,
    start: usize,
    fill: Color,
    observer: &mut dyn FillObserver,
) -> Result<FillReport> {
    let target_color = graph.node(start)?.color;
    graph.reset_visited();

    let mut report = FillReport::new(Algorithm::Bfs, start, target_color, fill);
    let mut queue = VecDeque::new();

    paint(graph, start, fill, &mut report, observer)?;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let neighbors = graph.node(current)?.edges.clone();
        for neighbor in neighbors {
            if is_fillable(graph.node(neighbor)?, target_color) {
                paint(graph, neighbor, fill, &mut report, observer)?;
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(colored = report.snapshots(), "bfs complete");
    Ok(report)
}

/// Flood fill using a LIFO stack.
///
/// Nodes are painted when popped, not when pushed, so a node can sit on the
/// stack several times. Popping one that is already painted emits nothing,
/// but its unpainted matching neighbors are still pushed.
#[tracing::instrument(skip(graph, fill, observer), fields(fill = %fill))]
pub fn dfs_fill(
    graph: &mut ImageGraph,
    start: usize,
    fill: Color,
    observer: &mut dyn FillObserver,
) -> Result<FillReport> {
    let target_color = graph.node(start)?.color;
    graph.reset_visited();

    let mut report = FillReport::new(Algorithm::Dfs, start, target_color, fill);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if is_fillable(graph.node(current)?, target_color) {
            paint(graph, current, fill, &mut report, observer)?;
        } else {
            report.skipped_pops += 1;
            tracing::trace!(node = current, "already painted");
        }

        let neighbors = graph.node(current)?.edges.clone();
        for neighbor in neighbors {
            if is_fillable(graph.node(neighbor)?, target_color) {
                stack.push(neighbor);
            }
        }
    }

    tracing::debug!(
        colored = report.snapshots(),
        skipped = report.skipped_pops,
        "dfs complete"
    );
    Ok(report)
}

/// Run the chosen traversal
pub fn flood_fill(
    graph: &mut ImageGraph,
    algorithm: Algorithm,
    start: usize,
    fill: Color,
    observer: &mut dyn FillObserver,
) -> Result<FillReport> {
    match algorithm {
        Algorithm::Bfs => bfs_fill(graph, start, fill, observer),
        Algorithm::Dfs => dfs_fill(graph, start, fill, observer),
    }
}
