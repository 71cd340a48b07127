//! Construction of an image graph from its text description
//!
//! The format is strictly positional, one record per line:
//!
//! ```text
//! <image size>
//! <node count M>
//! x,y,color        (M lines)
//! <edge count E>
//! from,to          (E lines)
//! start,fillColor
//! ```

use std::str::FromStr;

use crate::bail_malformed;
use crate::color::Color;
use crate::error::{FloodError, Result};
use crate::graph::types::ImageGraph;

/// Largest accepted image side; the renderer allocates a full square of pixels
pub const MAX_IMAGE_SIZE: usize = 4096;

/// Where a fill starts and what it paints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: usize,
    pub fill: Color,
}

/// A graph together with the fill requested for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub graph: ImageGraph,
    pub search: SearchRequest,
}

/// Cursor over input lines that remembers 1-based line numbers
struct Records<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Records<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            lines: data.lines(),
            line: 0,
        }
    }

    fn next(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        self.line += 1;
        match self.lines.next() {
            Some(text) => Ok((self.line, text.trim())),
            None => Err(FloodError::truncated(self.line, expected)),
        }
    }
}

fn parse_number<T: FromStr>(line: usize, field: &str, what: &str) -> Result<T> {
    let field = field.trim();
    field.parse().map_err(|_| {
        FloodError::malformed(
            line,
            format!("{} must be a non-negative integer, got {:?}", what, field),
        )
    })
}

fn split_fields<'a>(
    line: usize,
    text: &'a str,
    shape: &str,
    count: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != count {
        bail_malformed!(line, format!("expected {}, got {:?}", shape, text));
    }
    Ok(fields)
}

fn parse_node(line: usize, text: &str) -> Result<(usize, usize, Color)> {
    let fields = split_fields(line, text, "x,y,color", 3)?;
    let x = parse_number(line, fields[0], "x")?;
    let y = parse_number(line, fields[1], "y")?;
    let color = fields[2].parse()?;
    Ok((x, y, color))
}

fn parse_edge(line: usize, text: &str) -> Result<(usize, usize)> {
    let fields = split_fields(line, text, "fromIndex,toIndex", 2)?;
    Ok((
        parse_number(line, fields[0], "fromIndex")?,
        parse_number(line, fields[1], "toIndex")?,
    ))
}

fn parse_search(line: usize, text: &str) -> Result<SearchRequest> {
    let fields = split_fields(line, text, "startIndex,fillColor", 2)?;
    Ok(SearchRequest {
        start: parse_number(line, fields[0], "startIndex")?,
        fill: fields[1].parse()?,
    })
}

/// Decode a raw input payload, reporting invalid UTF-8 as malformed input
pub fn decode_input(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|err| {
        let valid = err.utf8_error().valid_up_to();
        let line = err
            .as_bytes()
            .get(..valid)
            .map_or(0, |prefix| prefix.iter().filter(|&&b| b == b'\n').count())
            + 1;
        FloodError::malformed(line, "input is not valid UTF-8")
    })
}

/// Parse a complete input payload into a graph and its search request.
///
/// Fails on the first short, malformed or out-of-range record. Lines after the
/// search record are ignored.
#[tracing::instrument(skip(data), fields(bytes = data.len()))]
pub fn create_graph(data: &str) -> Result<ParsedInput> {
    let mut records = Records::new(data);

    let (line, text) = records.next("image size")?;
    let image_size: usize = parse_number(line, text, "image size")?;
    if image_size > MAX_IMAGE_SIZE {
        bail_malformed!(
            line,
            format!("image size {} exceeds the maximum of {}", image_size, MAX_IMAGE_SIZE)
        );
    }

    let (line, text) = records.next("node count")?;
    let node_count: usize = parse_number(line, text, "node count")?;

    let mut graph = ImageGraph::new(image_size);
    for _ in 0..node_count {
        let (line, text) = records.next("node record x,y,color")?;
        let (x, y, color) = parse_node(line, text)?;
        if x >= image_size || y >= image_size {
            return Err(FloodError::OutOfGrid {
                index: graph.len(),
                x,
                y,
                size: image_size,
            });
        }
        graph.add_node(x, y, color);
    }

    let (line, text) = records.next("edge count")?;
    let edge_count: usize = parse_number(line, text, "edge count")?;

    for _ in 0..edge_count {
        let (line, text) = records.next("edge record fromIndex,toIndex")?;
        let (from, to) = parse_edge(line, text)?;
        graph.add_edge(from, to)?;
    }

    let (line, text) = records.next("search record startIndex,fillColor")?;
    let search = parse_search(line, text)?;
    graph.node(search.start)?;

    tracing::debug!(
        image_size,
        nodes = node_count,
        edges = edge_count,
        start = search.start,
        fill = %search.fill,
        "graph built"
    );

    Ok(ParsedInput { graph, search })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "2\n4\n0,0,red\n1,0,red\n0,1,blue\n1,1,red\n3\n0,1\n0,2\n1,3\n0,green\n";

    #[test]
    fn test_create_graph_square() {
        let parsed = create_graph(SQUARE).unwrap();
        assert_eq!(parsed.graph.image_size(), 2);
        assert_eq!(parsed.graph.len(), 4);
        assert_eq!(
            parsed.graph.colors(),
            vec![Color::Red, Color::Red, Color::Blue, Color::Red]
        );
        assert_eq!(parsed.graph.node(0).unwrap().edges, vec![1, 2]);
        assert_eq!(parsed.graph.node(3).unwrap().edges, vec![1]);
        assert_eq!(
            parsed.search,
            SearchRequest {
                start: 0,
                fill: Color::Green
            }
        );
    }

    #[test]
    fn test_tolerates_crlf_and_mixed_case_colors() {
        let data = "1\r\n1\r\n0, 0, ReD\r\n0\r\n0,GREEN\r\n";
        let parsed = create_graph(data).unwrap();
        assert_eq!(parsed.graph.colors(), vec![Color::Red]);
        assert_eq!(parsed.search.fill, Color::Green);
    }

    #[test]
    fn test_short_node_list_is_truncated_input() {
        let data = "2\n3\n0,0,red\n1,0,red\n";
        let err = create_graph(data).unwrap_err();
        assert!(matches!(err, FloodError::TruncatedInput { line: 5, .. }));
    }

    #[test]
    fn test_missing_search_record() {
        let data = "1\n1\n0,0,red\n0\n";
        let err = create_graph(data).unwrap_err();
        assert!(
            matches!(err, FloodError::TruncatedInput { line: 5, ref expected } if expected.contains("search"))
        );
    }

    #[test]
    fn test_count_mismatch_shows_up_as_malformed_record() {
        // Three nodes declared, two given: the edge count is read as a node.
        let data = "2\n3\n0,0,red\n1,0,red\n0\n0,red\n";
        let err = create_graph(data).unwrap_err();
        assert!(matches!(err, FloodError::MalformedInput { line: 5, .. }));
    }

    #[test]
    fn test_unknown_color_is_fatal() {
        let data = "1\n1\n0,0,purple\n0\n0,red\n";
        let err = create_graph(data).unwrap_err();
        assert!(matches!(err, FloodError::UnknownColor(ref c) if c == "purple"));
    }

    #[test]
    fn test_unknown_fill_color_is_fatal() {
        let data = "1\n1\n0,0,red\n0\n0,orange\n";
        assert!(matches!(
            create_graph(data).unwrap_err(),
            FloodError::UnknownColor(_)
        ));
    }

    #[test]
    fn test_edge_index_out_of_range() {
        let data = "2\n2\n0,0,red\n1,0,red\n1\n0,5\n0,green\n";
        let err = create_graph(data).unwrap_err();
        assert!(matches!(
            err,
            FloodError::NodeOutOfRange {
                index: 5,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_search_start_out_of_range() {
        let data = "2\n2\n0,0,red\n1,0,red\n0\n2,green\n";
        assert!(matches!(
            create_graph(data).unwrap_err(),
            FloodError::NodeOutOfRange { index: 2, .. }
        ));
    }

    #[test]
    fn test_node_outside_image() {
        let data = "2\n1\n2,0,red\n0\n0,green\n";
        assert!(matches!(
            create_graph(data).unwrap_err(),
            FloodError::OutOfGrid {
                index: 0,
                x: 2,
                y: 0,
                size: 2
            }
        ));
    }

    #[test]
    fn test_negative_coordinate_is_malformed() {
        let data = "2\n1\n-1,0,red\n0\n0,green\n";
        assert!(matches!(
            create_graph(data).unwrap_err(),
            FloodError::MalformedInput { line: 3, .. }
        ));
    }

    #[test]
    fn test_oversized_image_rejected() {
        let data = "4000000000\n1\n0,0,red\n0\n0,green\n";
        let err = create_graph(data).unwrap_err();
        assert!(
            matches!(err, FloodError::MalformedInput { line: 1, ref reason } if reason.contains("maximum"))
        );
    }

    #[test]
    fn test_largest_image_accepted() {
        let data = format!("{}\n1\n0,0,red\n0\n0,green\n", MAX_IMAGE_SIZE);
        assert_eq!(create_graph(&data).unwrap().graph.image_size(), MAX_IMAGE_SIZE);
    }

    #[test]
    fn test_decode_input_reports_line_of_invalid_utf8() {
        let mut bytes = b"2\n1\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        let err = decode_input(bytes).unwrap_err();
        assert!(matches!(err, FloodError::MalformedInput { line: 3, .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }

    #[test]
    fn test_decode_input_passes_utf8_through() {
        assert_eq!(decode_input(SQUARE.as_bytes().to_vec()).unwrap(), SQUARE);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            create_graph("").unwrap_err(),
            FloodError::TruncatedInput { line: 1, .. }
        ));
    }

    #[test]
    fn test_trailing_lines_ignored() {
        let data = format!("{}\nextra\n", SQUARE);
        assert!(create_graph(&data).is_ok());
    }
}
