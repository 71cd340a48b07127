use crate::color::Color;
use crate::error::{FloodError, Result};

/// A pixel of the image and a vertex of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Position in the graph's node list
    pub index: usize,
    pub x: usize,
    pub y: usize,
    /// Current color
    pub color: Color,
    /// Color held before the most recent recolor
    pub prev_color: Color,
    /// Color the node was created with; `ImageGraph::restore` returns to it
    pub initial_color: Color,
    /// Neighbor indices in insertion order, duplicates included
    pub edges: Vec<usize>,
    /// Set once the current traversal has handled this node
    pub visited: bool,
}

impl Node {
    fn new(index: usize, x: usize, y: usize, color: Color) -> Self {
        Self {
            index,
            x,
            y,
            color,
            prev_color: color,
            initial_color: color,
            edges: Vec::new(),
            visited: false,
        }
    }

    fn visit_and_set_color(&mut self, color: Color) {
        self.visited = true;
        self.prev_color = self.color;
        self.color = color;

        tracing::debug!(
            node = self.index,
            from = %self.prev_color,
            to = %self.color,
            "visited node"
        );
    }
}

/// Undirected graph of colored pixels on a square image
///
/// Node indices are dense: the node at position `i` has `index == i`.
/// Every edge is stored in both endpoints' adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGraph {
    nodes: Vec<Node>,
    image_size: usize,
}

impl ImageGraph {
    pub fn new(image_size: usize) -> Self {
        Self {
            nodes: Vec::new(),
            image_size,
        }
    }

    /// Side length of the square image the nodes are drawn on
    pub fn image_size(&self) -> usize {
        self.image_size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node, failing when the index is past the end of the graph
    pub fn node(&self, index: usize) -> Result<&Node> {
        self.nodes.get(index).ok_or(FloodError::NodeOutOfRange {
            index,
            node_count: self.nodes.len(),
        })
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node> {
        let node_count = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or(FloodError::NodeOutOfRange { index, node_count })
    }

    /// Append a node and return its index
    pub fn add_node(&mut self, x: usize, y: usize, color: Color) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, x, y, color));
        index
    }

    /// Connect two existing nodes in both directions.
    ///
    /// Repeated edges are kept, so a pair connected twice appears twice in
    /// each adjacency list. A self-edge lists the node as its own neighbor twice.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.node(to)?;
        self.node_mut(from)?.edges.push(to);
        self.node_mut(to)?.edges.push(from);
        Ok(())
    }

    /// Clear every visited flag; colors are left alone
    pub fn reset_visited(&mut self) {
        for node in &mut self.nodes {
            node.visited = false;
        }
    }

    /// Return every node to the color it was created with and clear visited flags
    pub fn restore(&mut self) {
        for node in &mut self.nodes {
            node.color = node.initial_color;
            node.prev_color = node.initial_color;
            node.visited = false;
        }
    }

    /// Mark a node visited and paint it, remembering its previous color
    pub fn recolor(&mut self, index: usize, color: Color) -> Result<()> {
        self.node_mut(index)?.visit_and_set_color(color);
        Ok(())
    }

    /// Current color of every node, by index
    pub fn colors(&self) -> Vec<Color> {
        self.nodes.iter().map(|node| node.color).collect()
    }

    /// Current colors laid out on the image; unassigned pixels are black.
    ///
    /// When two nodes share a position the later one wins.
    pub fn pixels(&self) -> Vec<Vec<Color>> {
        let mut img = vec![vec![Color::Black; self.image_size]; self.image_size];
        for node in &self.nodes {
            if let Some(pixel) = img.get_mut(node.y).and_then(|row| row.get_mut(node.x)) {
                *pixel = node.color;
            }
        }
        img
    }
}
