//! JSON output: one report covering every traversal

use std::io::Write;

use serde::Serialize;

use floodfill_core::color::Color;
use floodfill_core::error::Result;
use floodfill_core::graph::{
    flood_fill, AdjacencyMatrix, Algorithm, FillReport, ImageGraph, ParsedInput,
};

#[derive(Debug, Serialize)]
struct TraversalOutput {
    #[serde(flatten)]
    report: FillReport,
    snapshots: usize,
    final_colors: Vec<Color>,
}

#[derive(Debug, Serialize)]
struct RunOutput {
    image_size: usize,
    node_count: usize,
    adjacency_matrix: AdjacencyMatrix,
    traversals: Vec<TraversalOutput>,
}

fn build_output(parsed: ParsedInput, algorithms: &[Algorithm]) -> Result<RunOutput> {
    let ParsedInput { mut graph, search } = parsed;
    let adjacency_matrix = AdjacencyMatrix::from_graph(&graph);

    let mut traversals = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        graph.restore();
        let mut quiet = |_: &ImageGraph, _: usize| -> Result<()> { Ok(()) };
        let report = flood_fill(&mut graph, algorithm, search.start, search.fill, &mut quiet)?;
        traversals.push(TraversalOutput {
            snapshots: report.snapshots(),
            report,
            final_colors: graph.colors(),
        });
    }

    Ok(RunOutput {
        image_size: graph.image_size(),
        node_count: graph.len(),
        adjacency_matrix,
        traversals,
    })
}

pub fn execute(out: &mut dyn Write, parsed: ParsedInput, algorithms: &[Algorithm]) -> Result<()> {
    let output = build_output(parsed, algorithms)?;
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
