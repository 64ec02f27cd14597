//! Loader for the text adjacency-list format.
//!
//! The first token is the node count; every following pair of tokens is
//! an arc. `#` starts a comment, blank lines are skipped, and each arc
//! must sit on its own line so errors can point at it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::adjacency::{AdjacencyGraph, GraphBuilder};
use crate::error::GraphError;

/// Options controlling how a graph file is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Add the reverse of every arc read.
    pub undirected: bool,
}

/// Open `path` and parse it with [`read_adjacency`].
pub fn load_adjacency_file(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<AdjacencyGraph, GraphError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_adjacency(BufReader::new(file), options)?;
    debug!(path = %path.display(), "graph file parsed");
    Ok(graph)
}

/// Parse an adjacency list from any buffered reader.
///
/// # Examples
///
/// ```
/// use scascade_core::NodeId;
/// use scascade_graph::{read_adjacency, LoadOptions, Network};
///
/// let text = "# a path\n3\n0 1\n1 2\n";
/// let g = read_adjacency(text.as_bytes(), LoadOptions::default()).unwrap();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.out_neighbours(NodeId(1)), &[NodeId(2)]);
/// ```
///
/// # Errors
///
/// Returns [`GraphError::MissingHeader`] for input without a node count,
/// [`GraphError::Malformed`] for lines that are not a single count or an
/// integer pair, and the [`GraphBuilder`] errors for bad counts or
/// out-of-range endpoints.
pub fn read_adjacency<R: BufRead>(
    reader: R,
    options: LoadOptions,
) -> Result<AdjacencyGraph, GraphError> {
    let mut builder: Option<GraphBuilder> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let content = line.split('#').next().unwrap_or("");
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match builder.as_mut() {
            None => {
                if tokens.len() != 1 {
                    return Err(GraphError::Malformed {
                        line: line_no,
                        reason: format!(
                            "expected a single node count, found {} tokens",
                            tokens.len()
                        ),
                    });
                }
                let n: u64 = parse_token(tokens[0], line_no)?;
                let n = usize::try_from(n)
                    .map_err(|_| GraphError::NodeCountOverflow { value: n })?;
                builder = Some(GraphBuilder::new(n)?.undirected(options.undirected));
            }
            Some(b) => {
                if tokens.len() != 2 {
                    return Err(GraphError::Malformed {
                        line: line_no,
                        reason: format!("expected `<u> <v>`, found {} tokens", tokens.len()),
                    });
                }
                let u: u64 = parse_token(tokens[0], line_no)?;
                let v: u64 = parse_token(tokens[1], line_no)?;
                let (Ok(u32_u), Ok(u32_v)) = (u32::try_from(u), u32::try_from(v)) else {
                    return Err(GraphError::ArcOutOfRange {
                        source_node: u,
                        target: v,
                        node_count: b.node_count(),
                    });
                };
                b.add_arc(u32_u, u32_v)?;
            }
        }
    }

    builder
        .map(GraphBuilder::build)
        .ok_or(GraphError::MissingHeader)
}

fn parse_token(token: &str, line: usize) -> Result<u64, GraphError> {
    token.parse().map_err(|_| GraphError::Malformed {
        line,
        reason: format!("`{token}` is not a non-negative integer"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use scascade_core::NodeId;
    use std::io::Write;

    fn load(text: &str) -> Result<AdjacencyGraph, GraphError> {
        read_adjacency(text.as_bytes(), LoadOptions::default())
    }

    #[test]
    fn parses_header_and_arcs_in_order() {
        let g = load("5\n0 1\n1 2\n2 3\n3 4\n0 4\n").unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.arc_count(), 5);
        assert_eq!(g.out_neighbours(NodeId(0)), &[NodeId(1), NodeId(4)]);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let g = load("# header\n\n3 # nodes\n\n0 2 # arc\n# trailing\n").unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.arc_count(), 1);
    }

    #[test]
    fn header_only_graph_has_no_arcs() {
        let g = load("4\n").unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn undirected_option_mirrors_arcs() {
        let g = read_adjacency("2\n0 1\n".as_bytes(), LoadOptions { undirected: true }).unwrap();
        assert_eq!(g.arc_count(), 2);
        assert_eq!(g.out_neighbours(NodeId(1)), &[NodeId(0)]);
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(load("# nothing\n\n"), Err(GraphError::MissingHeader)));
    }

    #[test]
    fn malformed_arc_line_reports_line_number() {
        match load("3\n0 1\n1 x\n") {
            Err(GraphError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
        match load("3\n0 1 2\n") {
            Err(GraphError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn header_with_extra_tokens_rejected() {
        assert!(matches!(
            load("3 0\n"),
            Err(GraphError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn out_of_range_endpoint_rejected() {
        assert!(matches!(
            load("3\n0 3\n"),
            Err(GraphError::ArcOutOfRange { target: 3, .. })
        ));
        assert!(matches!(
            load("3\n0 99999999999\n"),
            Err(GraphError::ArcOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_node_header_rejected() {
        assert!(matches!(load("0\n"), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "3\n0 1\n0 2\n1 2").unwrap();
        let g = load_adjacency_file(file.path(), LoadOptions::default()).unwrap();
        assert_eq!(g.arc_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_adjacency_file(dir.path().join("absent.txt"), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
