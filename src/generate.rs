// Copyright (c) 2020-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Random graphs and graph sizes for tests and runtime experiments.

use crate::graph::Edge;

use log::debug;
use rand::Rng;
use std::collections::HashSet;
use std::error;
use std::fmt;

/// Largest edge weight produced by [`random_graph`].
pub const MAX_WEIGHT: u32 = 20;

/// Error when generating graphs or graph sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// More edges requested than a simple graph with that many vertices has.
    TooManyEdges { num_vertices: usize, num_edges: usize },
    /// A size list contains something that is not a non-negative integer.
    InvalidNumber(String),
    /// An unknown experiment mode.
    UnknownMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            TooManyEdges { num_vertices, num_edges } => write!(
                fmt,
                "Too many edges for given nodes: {} edges requested, a simple graph with {} vertices has at most {}",
                num_edges,
                num_vertices,
                max_edges(*num_vertices)
            ),
            InvalidNumber(s) => write!(fmt, "Invalid number: {:?}", s),
            UnknownMode(s) => write!(fmt, "Unknown experiment mode: {:?} (expected 'nodes' or 'edges')", s),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Return the maximal number of edges of a simple graph with `num_vertices`
/// vertices.
pub fn max_edges(num_vertices: usize) -> usize {
    num_vertices * num_vertices.saturating_sub(1) / 2
}

/// Return the number of edges of a sparse graph with `num_vertices`
/// vertices, i.e. a third of all vertex pairs.
pub fn sparse_edges(num_vertices: usize) -> usize {
    num_vertices * num_vertices.saturating_sub(1) / 6
}

/// Generate a random simple graph.
///
/// The vertices are `0..num_vertices`. The graph has `num_edges` edges
/// between distinct, uniformly chosen pairs of vertices (no loops, no
/// parallel edges) with weights drawn uniformly from `1..=MAX_WEIGHT`.
/// Fails if `num_edges` exceeds [`max_edges`].
///
/// The result only depends on the state of `rng`, so a seeded generator
/// gives reproducible graphs.
///
/// # Example
///
/// ```
/// use mst_forest::generate::random_graph;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (vertices, edges) = random_graph(&mut rng, 10, 20)?;
/// assert_eq!(vertices.len(), 10);
/// assert_eq!(edges.len(), 20);
///
/// assert!(random_graph(&mut rng, 10, 46).is_err());
/// # Ok::<(), mst_forest::generate::Error>(())
/// ```
pub fn random_graph<R>(rng: &mut R, num_vertices: usize, num_edges: usize) -> Result<(Vec<usize>, Vec<Edge<usize, u32>>)>
where
    R: Rng + ?Sized,
{
    if num_edges > max_edges(num_vertices) {
        return Err(Error::TooManyEdges { num_vertices, num_edges });
    }

    let vertices: Vec<usize> = (0..num_vertices).collect();
    let mut pairs = HashSet::with_capacity(num_edges);
    let mut edges = Vec::with_capacity(num_edges);
    while edges.len() < num_edges {
        let u = rng.random_range(0..num_vertices);
        let v = rng.random_range(0..num_vertices);
        if u == v {
            continue;
        }
        let weight = rng.random_range(1..=MAX_WEIGHT);
        if pairs.insert((u.min(v), u.max(v))) {
            edges.push(Edge::new(u, v, weight));
        }
    }

    debug!("random graph: {} vertices, {} edges", num_vertices, num_edges);

    Ok((vertices, edges))
}

/// Parse a comma separated list of sizes, e.g. `"10, 20,30"`.
pub fn parse_sizes(s: &str) -> Result<Vec<usize>> {
    s.split(',')
        .map(|tok| tok.trim().parse().map_err(|_| Error::InvalidNumber(tok.trim().to_string())))
        .collect()
}

/// Parse a graph size `"NODES,EDGES"` and check that a simple graph of
/// that size exists.
pub fn parse_size(s: &str) -> Result<(usize, usize)> {
    let sizes = parse_sizes(s)?;
    match sizes[..] {
        [num_vertices, num_edges] if num_edges > max_edges(num_vertices) => {
            Err(Error::TooManyEdges { num_vertices, num_edges })
        }
        [num_vertices, num_edges] => Ok((num_vertices, num_edges)),
        _ => Err(Error::InvalidNumber(s.trim().to_string())),
    }
}

/// A series of graph sizes for a runtime experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Series {
    /// Varying number of vertices with a fixed number of edges.
    Nodes { nodes: Vec<usize>, edges: usize },
    /// Fixed number of vertices with a varying number of edges.
    Edges { nodes: usize, edges: Vec<usize> },
}

impl Series {
    /// Create a series from its mode (`nodes` or `edges`) and the size lists.
    ///
    /// For mode `nodes`, `nodes` is the list of vertex counts and `edges` the
    /// fixed edge count; for mode `edges` it is the other way round.
    pub fn parse(mode: &str, nodes: &str, edges: &str) -> Result<Series> {
        match mode {
            "nodes" => Ok(Series::Nodes {
                nodes: parse_sizes(nodes)?,
                edges: single(edges)?,
            }),
            "edges" => Ok(Series::Edges {
                nodes: single(nodes)?,
                edges: parse_sizes(edges)?,
            }),
            _ => Err(Error::UnknownMode(mode.to_string())),
        }
    }

    /// Return the `(vertices, edges)` pairs of the series.
    ///
    /// Fails if some pair asks for more edges than possible.
    pub fn sizes(&self) -> Result<Vec<(usize, usize)>> {
        let sizes: Vec<_> = match self {
            Series::Nodes { nodes, edges } => nodes.iter().map(|&n| (n, *edges)).collect(),
            Series::Edges { nodes, edges } => edges.iter().map(|&m| (*nodes, m)).collect(),
        };
        for &(num_vertices, num_edges) in &sizes {
            if num_edges > max_edges(num_vertices) {
                return Err(Error::TooManyEdges { num_vertices, num_edges });
            }
        }
        Ok(sizes)
    }
}

/// Return the vertex counts of a sparse/dense comparison up to `max_nodes`.
///
/// The counts are the multiples of `max(5, max_nodes / 50)` up to
/// `max_nodes`.
pub fn sweep_nodes(max_nodes: usize) -> Vec<usize> {
    let step = (max_nodes / 50).max(5);
    (step..=max_nodes).step_by(step).collect()
}

fn single(s: &str) -> Result<usize> {
    s.trim().parse().map_err(|_| Error::InvalidNumber(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::{max_edges, parse_size, parse_sizes, random_graph, sparse_edges, sweep_nodes, Error, Series, MAX_WEIGHT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_simple_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let (vertices, edges) = random_graph(&mut rng, 30, 100).unwrap();
        assert_eq!(vertices, (0..30).collect::<Vec<_>>());
        assert_eq!(edges.len(), 100);

        let mut pairs = HashSet::new();
        for e in &edges {
            assert_ne!(e.u, e.v);
            assert!(e.u < 30 && e.v < 30);
            assert!(e.weight >= 1 && e.weight <= MAX_WEIGHT);
            assert!(pairs.insert((e.u.min(e.v), e.u.max(e.v))));
        }
    }

    #[test]
    fn test_seeded() {
        let a = random_graph(&mut StdRng::seed_from_u64(7), 20, 50).unwrap();
        let b = random_graph(&mut StdRng::seed_from_u64(7), 20, 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_complete_graph() {
        let mut rng = StdRng::seed_from_u64(3);
        let (_, edges) = random_graph(&mut rng, 5, max_edges(5)).unwrap();
        assert_eq!(edges.len(), 10);
        assert_eq!(random_graph(&mut rng, 1, 0).unwrap().1.len(), 0);
        assert_eq!(random_graph(&mut rng, 0, 0).unwrap(), (vec![], vec![]));
    }

    #[test]
    fn test_too_many_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            random_graph(&mut rng, 5, 11),
            Err(Error::TooManyEdges {
                num_vertices: 5,
                num_edges: 11
            })
        );
        assert!(random_graph(&mut rng, 1, 1).is_err());
        assert!(random_graph(&mut rng, 0, 3).is_err());
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("10,20, 30 "), Ok(vec![10, 20, 30]));
        assert_eq!(parse_sizes("7"), Ok(vec![7]));
        assert_eq!(parse_sizes("10,x"), Err(Error::InvalidNumber("x".to_string())));
        assert_eq!(parse_sizes(""), Err(Error::InvalidNumber("".to_string())));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("10, 20"), Ok((10, 20)));
        assert_eq!(parse_size("5,10"), Ok((5, 10)));
        assert_eq!(
            parse_size("5,11"),
            Err(Error::TooManyEdges {
                num_vertices: 5,
                num_edges: 11
            })
        );
        assert_eq!(parse_size("10"), Err(Error::InvalidNumber("10".to_string())));
        assert_eq!(parse_size("1,2,3"), Err(Error::InvalidNumber("1,2,3".to_string())));
        assert_eq!(parse_size("a,2"), Err(Error::InvalidNumber("a".to_string())));
    }

    #[test]
    fn test_series() {
        let series = Series::parse("nodes", "10,20,30", "15").unwrap();
        assert_eq!(
            series,
            Series::Nodes {
                nodes: vec![10, 20, 30],
                edges: 15
            }
        );
        assert_eq!(series.sizes(), Ok(vec![(10, 15), (20, 15), (30, 15)]));

        let series = Series::parse("edges", "50", "50,100,200").unwrap();
        assert_eq!(series.sizes(), Ok(vec![(50, 50), (50, 100), (50, 200)]));

        assert_eq!(Series::parse("both", "1", "1"), Err(Error::UnknownMode("both".to_string())));
        assert!(Series::parse("nodes", "10,20", "5,6").is_err());
        assert_eq!(
            Series::parse("nodes", "5,10", "20").unwrap().sizes(),
            Err(Error::TooManyEdges {
                num_vertices: 5,
                num_edges: 20
            })
        );
    }

    #[test]
    fn test_sweep() {
        assert_eq!(sweep_nodes(20), vec![5, 10, 15, 20]);
        assert_eq!(sweep_nodes(1000), (20..=1000).step_by(20).collect::<Vec<_>>());
        assert!(sweep_nodes(4).is_empty());
        assert_eq!(sparse_edges(10), 15);
        assert_eq!(max_edges(10), 45);
    }
}
