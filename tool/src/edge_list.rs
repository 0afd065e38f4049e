//! Reading graphs from whitespace separated edge lists.
//!
//! Each line holds one edge `a b [weight]`. Blank lines and lines starting with `#` are skipped and
//! a missing weight defaults to 0.
use dsf::graph::Edge;
use std::{io::BufRead, str::FromStr};
use thiserror::Error;

#[cfg(test)]
#[path = "tests/test_edge_list.rs"]
mod test_edge_list;

/// Error cases when reading an edge list.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line could not be parsed as an edge.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Reading the input failed.
    #[error("failed to read edge list")]
    Io(#[from] std::io::Error),
}

/// Edges read from an edge list.
#[derive(Clone, Default, Debug)]
pub struct EdgeList {
    /// The edges in input order.
    pub edges: Vec<Edge<i64>>,
    /// For each edge, the 1-based line number it was read from.
    pub lines: Vec<usize>,
    /// One more than the largest endpoint, or 0 when there are no edges.
    pub node_count: usize,
}

fn parse_field<T: FromStr>(field: Option<&str>, what: &str, line: usize) -> Result<T, ParseError> {
    let Some(field) = field else {
        return Err(ParseError::Syntax {
            line,
            message: format!("missing {what}"),
        });
    };
    field.parse().map_err(|_| ParseError::Syntax {
        line,
        message: format!("invalid {what} {field:?}"),
    })
}

/// Parses an edge list.
pub fn parse(reader: impl BufRead) -> Result<EdgeList, ParseError> {
    let mut list = EdgeList::default();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let mut fields = content.split_ascii_whitespace();
        let a: usize = parse_field(fields.next(), "endpoint", line_number)?;
        let b: usize = parse_field(fields.next(), "endpoint", line_number)?;
        let weight: i64 = match fields.next() {
            Some(field) => parse_field(Some(field), "weight", line_number)?,
            None => 0,
        };
        if let Some(extra) = fields.next() {
            return Err(ParseError::Syntax {
                line: line_number,
                message: format!("unexpected trailing field {extra:?}"),
            });
        }
        let Some(node_count) = a.max(b).checked_add(1) else {
            return Err(ParseError::Syntax {
                line: line_number,
                message: "endpoint too large".to_string(),
            });
        };
        list.node_count = list.node_count.max(node_count);
        list.edges.push(Edge::new(a, b, weight));
        list.lines.push(line_number);
    }
    Ok(list)
}
