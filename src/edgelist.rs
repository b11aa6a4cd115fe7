// Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading and writing graphs in edge-list format.
//!
//! Each line describes one undirected edge by its two end points and its
//! weight, separated by whitespace:
//!
//! ```text
//! # comment
//! nodeA nodeB weight
//! ```
//!
//! Empty lines and lines starting with `#` are ignored.

use crate::graph::Edge;

use std::collections::HashSet;
use std::error;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};

/// A small example graph with 9 vertices and 14 edges.
///
/// Its minimum spanning tree has weight 37.
pub const SAMPLE: &str = "# Sample graph (edge list: nodeA nodeB weight)
A B 4
A H 8
B H 11
B C 8
H I 7
H G 1
I G 6
I C 2
C D 7
C F 4
D F 14
D E 9
F E 10
G F 2
";

/// Error when reading an edge list.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The graph read from an edge list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    /// The vertices in order of their first appearance.
    pub vertices: Vec<String>,
    /// The edges in file order.
    pub edges: Vec<Edge<String, f64>>,
}

/// Read an edge list from a buffered reader.
pub fn read_from_buf<R>(buf: &mut R) -> Result<Instance>
where
    R: BufRead,
{
    let mut instance = Instance::default();
    let mut seen = HashSet::<String>::new();
    let mut nline = 0;
    let mut line = String::new();

    while {
        line.clear();
        buf.read_line(&mut line)
    }? > 0
    {
        nline += 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let mut toks = content.split_whitespace();
        let (u, v) = match (toks.next(), toks.next()) {
            (Some(u), Some(v)) => (u, v),
            _ => {
                return Err(Error::Format {
                    line: nline,
                    msg: format!("expected 'nodeA nodeB weight', got: {:?}", content),
                })
            }
        };
        let weight = toks.collect::<Vec<_>>().join(" ");
        if weight.is_empty() {
            return Err(Error::Format {
                line: nline,
                msg: format!("expected 'nodeA nodeB weight', got: {:?}", content),
            });
        }
        let weight = match weight.parse::<f64>() {
            Ok(w) if w.is_finite() => w,
            _ => {
                return Err(Error::Data {
                    line: nline,
                    msg: format!("weight must be a finite number, got {:?}", weight),
                })
            }
        };

        for &x in &[u, v] {
            if !seen.contains(x) {
                seen.insert(x.to_string());
                instance.vertices.push(x.to_string());
            }
        }
        instance.edges.push(Edge::new(u.to_string(), v.to_string(), weight));
    }

    Ok(instance)
}

/// Read an edge list from some reader.
pub fn read<R: Read>(reader: R) -> Result<Instance> {
    read_from_buf(&mut BufReader::new(reader))
}

/// Read an edge list from a file.
pub fn read_from_file(fname: &str) -> Result<Instance> {
    read(fs::File::open(fname)?)
}

/// Parse an edge list given as string.
pub fn parse(text: &str) -> Result<Instance> {
    read_from_buf(&mut text.as_bytes())
}

/// Write edges in edge-list format, one `u v weight` line per edge.
pub fn write<O, V, W>(out: &mut O, edges: &[Edge<V, W>]) -> io::Result<()>
where
    O: Write,
    V: fmt::Display,
    W: fmt::Display,
{
    for e in edges {
        writeln!(out, "{} {} {}", e.u, e.v, e.weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse, read_from_buf, write, Error, SAMPLE};
    use crate::graph::Edge;
    use std::io::Cursor;

    #[test]
    fn test_sample() {
        let instance = parse(SAMPLE).unwrap();
        assert_eq!(instance.vertices, vec!["A", "B", "H", "C", "I", "G", "D", "F", "E"]);
        assert_eq!(instance.edges.len(), 14);
        assert_eq!(instance.edges[0], Edge::new("A".to_string(), "B".to_string(), 4.0));
        assert_eq!(instance.edges[13], Edge::new("G".to_string(), "F".to_string(), 2.0));
    }

    #[test]
    fn parse_file_test() {
        let file = "
# leading comment

   x   y   1.5
y z -2
   # indented comment
z x 1e1

";
        let instance = read_from_buf(&mut Cursor::new(file)).unwrap();
        assert_eq!(instance.vertices, vec!["x", "y", "z"]);
        let weights: Vec<_> = instance.edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1.5, -2.0, 10.0]);
    }

    #[test]
    fn test_empty() {
        let instance = parse("# nothing here\n\n").unwrap();
        assert!(instance.vertices.is_empty());
        assert!(instance.edges.is_empty());
    }

    #[test]
    fn test_missing_weight() {
        match parse("a b 1\n\na b\n") {
            Err(Error::Format { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse("a\n") {
            Err(Error::Format { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_weight() {
        match parse("a b 1\nb c one\n") {
            Err(Error::Data { line, msg }) => {
                assert_eq!(line, 2);
                assert!(msg.contains("one"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        // the weight is everything after the end points
        assert!(matches!(parse("a b 1 2\n"), Err(Error::Data { line: 1, .. })));
        assert!(matches!(parse("a b NaN\n"), Err(Error::Data { line: 1, .. })));
    }

    #[test]
    fn test_write() {
        let edges = vec![Edge::new("A", "B", 4.0), Edge::new("C", "D", 0.5)];
        let mut out = vec![];
        write(&mut out, &edges).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "A B 4\nC D 0.5\n");
        assert_eq!(parse(&text).unwrap().edges.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = parse("a b\n").unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Format error on line 1: expected 'nodeA nodeB weight', got: \"a b\""
        );
    }
}
