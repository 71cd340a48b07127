use std::fmt;

use serde::Serialize;

use crate::graph::types::ImageGraph;

/// Dense 0/1 adjacency matrix of an undirected graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMatrix {
    cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Build the matrix from the graph's adjacency lists.
    ///
    /// Repeated edges collapse to a single 1.
    pub fn from_graph(graph: &ImageGraph) -> Self {
        let n = graph.len();
        let mut cells = vec![vec![0u8; n]; n];
        for node in graph.nodes() {
            for &edge in &node.edges {
                if let Some(cell) = cells.get_mut(node.index).and_then(|row| row.get_mut(edge)) {
                    *cell = 1;
                }
                if let Some(cell) = cells.get_mut(edge).and_then(|row| row.get_mut(node.index)) {
                    *cell = 1;
                }
            }
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 1 when `i` and `j` share an edge, 0 otherwise (including out of range)
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0)
    }

}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn assert_symmetric(matrix: &AdjacencyMatrix) {
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i), "cell ({}, {})", i, j);
            }
        }
    }

    fn square() -> ImageGraph {
        let mut graph = ImageGraph::new(2);
        graph.add_node(0, 0, Color::Red);
        graph.add_node(1, 0, Color::Red);
        graph.add_node(0, 1, Color::Blue);
        graph.add_node(1, 1, Color::Red);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph
    }

    #[test]
    fn test_matrix_is_symmetric_with_empty_diagonal() {
        let matrix = AdjacencyMatrix::from_graph(&square());
        assert_symmetric(&matrix);
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 0);
        }
        assert_eq!(matrix.get(0, 1), 1);
        assert_eq!(matrix.get(3, 1), 1);
        assert_eq!(matrix.get(2, 3), 0);
    }

    #[test]
    fn test_self_edge_sets_diagonal() {
        let mut graph = square();
        graph.add_edge(2, 2).unwrap();
        let matrix = AdjacencyMatrix::from_graph(&graph);
        assert_eq!(matrix.get(2, 2), 1);
        assert_symmetric(&matrix);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut graph = square();
        graph.add_edge(1, 0).unwrap();
        let matrix = AdjacencyMatrix::from_graph(&graph);
        assert_eq!(matrix.get(0, 1), 1);
        assert_eq!(matrix.get(1, 0), 1);
    }

    #[test]
    fn test_display_rows_of_digits() {
        let matrix = AdjacencyMatrix::from_graph(&square());
        assert_eq!(matrix.to_string(), "0110\n1001\n1000\n0100\n");
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let matrix = AdjacencyMatrix::from_graph(&square());
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json[0], serde_json::json!([0, 1, 1, 0]));
    }
}
