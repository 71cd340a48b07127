//! Text rendering of images and adjacency matrices
//!
//! A pixel is two copies of the block glyph, each preceded by the color's
//! escape code. Grids end with a line holding the reset code.

use std::io::Write;

use crate::color::{Color, RESET};
use crate::config::{ColorMode, RenderConfig};
use crate::error::Result;
use crate::graph::{AdjacencyMatrix, ImageGraph};

/// Renders graph state as text, configured once at startup
#[derive(Debug, Clone)]
pub struct Renderer {
    mode: ColorMode,
    block: String,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            mode: config.color,
            block: config.block.clone(),
        }
    }

    fn push_pixel(&self, out: &mut String, color: Color) {
        match self.mode {
            ColorMode::Always => {
                for _ in 0..2 {
                    out.push_str(color.ansi_code());
                    out.push_str(&self.block);
                }
            }
            ColorMode::Never => {
                out.push(color.letter());
                out.push(color.letter());
            }
        }
    }

    /// Render the graph's current colors as an `image_size` square grid
    pub fn render_grid(&self, graph: &ImageGraph) -> String {
        let mut out = String::new();
        for row in graph.pixels() {
            for pixel in row {
                self.push_pixel(&mut out, pixel);
            }
            out.push('\n');
        }
        if self.mode == ColorMode::Always {
            out.push_str(RESET);
        }
        out.push('\n');
        out
    }

    pub fn write_grid(&self, out: &mut dyn Write, graph: &ImageGraph) -> Result<()> {
        out.write_all(self.render_grid(graph).as_bytes())?;
        Ok(())
    }

    /// Header, one digit row per node, then a blank line
    pub fn render_matrix(&self, matrix: &AdjacencyMatrix) -> String {
        format!("Adjacency matrix:\n{}\n", matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::create_graph;

    const SQUARE: &str = "2\n4\n0,0,red\n1,0,red\n0,1,blue\n1,1,red\n3\n0,1\n0,2\n1,3\n0,green\n";

    fn plain() -> Renderer {
        Renderer::new(&RenderConfig {
            color: ColorMode::Never,
            ..Default::default()
        })
    }

    #[test]
    fn test_plain_grid() {
        let parsed = create_graph(SQUARE).unwrap();
        assert_eq!(plain().render_grid(&parsed.graph), "RRRR\nBBRR\n\n");
    }

    #[test]
    fn test_missing_pixels_render_black() {
        let parsed = create_graph("2\n1\n1,1,white\n0\n0,red\n").unwrap();
        assert_eq!(plain().render_grid(&parsed.graph), "KKKK\nKKWW\n\n");
    }

    #[test]
    fn test_ansi_grid() {
        let parsed = create_graph("1\n1\n0,0,red\n0\n0,green\n").unwrap();
        let renderer = Renderer::new(&RenderConfig::default());
        assert_eq!(
            renderer.render_grid(&parsed.graph),
            "\u{1b}[31m\u{2588}\u{1b}[31m\u{2588}\n\u{1b}[0m\n"
        );
    }

    #[test]
    fn test_custom_block() {
        let parsed = create_graph("1\n1\n0,0,blue\n0\n0,green\n").unwrap();
        let renderer = Renderer::new(&RenderConfig {
            block: "#".to_string(),
            ..Default::default()
        });
        assert_eq!(
            renderer.render_grid(&parsed.graph),
            "\u{1b}[34m#\u{1b}[34m#\n\u{1b}[0m\n"
        );
    }

    #[test]
    fn test_write_grid() {
        let parsed = create_graph(SQUARE).unwrap();
        let mut buf = Vec::new();
        plain().write_grid(&mut buf, &parsed.graph).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "RRRR\nBBRR\n\n");
    }

    #[test]
    fn test_render_matrix() {
        let parsed = create_graph(SQUARE).unwrap();
        let matrix = AdjacencyMatrix::from_graph(&parsed.graph);
        assert_eq!(
            plain().render_matrix(&matrix),
            "Adjacency matrix:\n0110\n1001\n1000\n0100\n\n"
        );
    }
}
