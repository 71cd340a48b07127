//! Human output: adjacency matrix, then a grid after every recolor

use std::io::Write;

use floodfill_core::error::Result;
use floodfill_core::graph::{
    flood_fill, AdjacencyMatrix, Algorithm, FillObserver, ImageGraph, ParsedInput,
};
use floodfill_core::render::Renderer;

/// Prints a snapshot of the image each time a node is recolored
struct SnapshotPrinter<'a> {
    out: &'a mut dyn Write,
    renderer: &'a Renderer,
    show_progress: bool,
}

impl FillObserver for SnapshotPrinter<'_> {
    fn on_recolor(&mut self, graph: &ImageGraph, node: usize) -> Result<()> {
        if self.show_progress {
            writeln!(self.out, "Visited node {}", node)?;
        }
        self.renderer.write_grid(self.out, graph)
    }
}

/// Print the adjacency matrix and run each traversal on a pristine copy of the image
pub fn execute(
    out: &mut dyn Write,
    parsed: ParsedInput,
    renderer: &Renderer,
    algorithms: &[Algorithm],
    show_progress: bool,
) -> Result<()> {
    let ParsedInput { mut graph, search } = parsed;

    let matrix = AdjacencyMatrix::from_graph(&graph);
    out.write_all(renderer.render_matrix(&matrix).as_bytes())?;

    for &algorithm in algorithms {
        graph.restore();

        writeln!(out, "Starting {}; initial state:", algorithm.label())?;
        renderer.write_grid(out, &graph)?;

        let mut printer = SnapshotPrinter {
            out: &mut *out,
            renderer,
            show_progress,
        };
        flood_fill(&mut graph, algorithm, search.start, search.fill, &mut printer)?;
    }

    Ok(())
}
