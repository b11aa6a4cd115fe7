// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Weighted edges, spanning forests and the input handling shared by the
//! spanning tree algorithms.
//!
//! A graph is never materialized as a data structure of its own. It is
//! given by a slice of vertices and a slice of [`Edge`]s whose end points
//! must be elements of the vertex slice.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error;
use std::fmt;
use std::hash::Hash;
use std::slice;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Error in the input of an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The edge with the given (0-based) index has an end point that is
    /// not contained in the vertex set.
    UnknownVertex { edge: usize },
    /// The weight of the edge with the given (0-based) index cannot be
    /// compared (e.g. it is NaN).
    InvalidWeight { edge: usize },
    /// An element that has never been added to a disjoint-set structure.
    UnknownElement,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            UnknownVertex { edge } => write!(fmt, "Edge {} references a vertex not in the vertex set", edge),
            InvalidWeight { edge } => write!(fmt, "Edge {} has an invalid weight", edge),
            UnknownElement => write!(fmt, "Element is not contained in the disjoint sets"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// An undirected edge with a weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<V, W> {
    /// The first end point.
    pub u: V,
    /// The second end point.
    pub v: V,
    /// The weight of the edge.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(u: V, v: V, weight: W) -> Self {
        Edge { u, v, weight }
    }

    /// Return both end points of the edge.
    pub fn enodes(&self) -> (&V, &V) {
        (&self.u, &self.v)
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((u, v, weight): (V, V, W)) -> Self {
        Edge { u, v, weight }
    }
}

/// A minimum spanning forest.
///
/// The edges are stored in the order in which the algorithm selected them.
/// If the graph is connected the forest is a spanning tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpanningForest<V, W> {
    /// The selected edges.
    pub edges: Vec<Edge<V, W>>,
    /// The sum of the weights of all selected edges.
    pub total: W,
}

impl<V, W> SpanningForest<V, W> {
    /// Return the number of edges in the forest.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Return `true` if the forest contains no edge.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Return the number of trees of the forest if it spans `num_vertices`
    /// vertices.
    ///
    /// This is the number of connected components of the graph the forest
    /// has been computed for.
    pub fn num_trees(&self, num_vertices: usize) -> usize {
        num_vertices.saturating_sub(self.edges.len())
    }

    /// Return an iterator over the selected edges.
    pub fn iter(&self) -> slice::Iter<'_, Edge<V, W>> {
        self.edges.iter()
    }
}

impl<'a, V, W> IntoIterator for &'a SpanningForest<V, W> {
    type Item = &'a Edge<V, W>;
    type IntoIter = slice::Iter<'a, Edge<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// The input graph with all vertices mapped to consecutive indices.
///
/// Vertex `i` is `nodes[i]`, edge `e` connects `ends[e].0` and `ends[e].1`.
pub(crate) struct IndexedGraph<'a, V> {
    pub nodes: Vec<&'a V>,
    pub ends: Vec<(usize, usize)>,
}

impl<'a, V> IndexedGraph<'a, V>
where
    V: Eq + Hash,
{
    /// Index and validate the input.
    ///
    /// Duplicate vertices are ignored after their first occurrence. Fails
    /// if an edge has an unknown end point or an incomparable weight.
    pub fn new<W>(vertices: &'a [V], edges: &'a [Edge<V, W>]) -> Result<Self>
    where
        W: PartialOrd,
    {
        let mut index = HashMap::with_capacity(vertices.len());
        let mut nodes = Vec::with_capacity(vertices.len());
        for v in vertices {
            if let Entry::Vacant(entry) = index.entry(v) {
                entry.insert(nodes.len());
                nodes.push(v);
            }
        }

        let mut ends = Vec::with_capacity(edges.len());
        for (i, e) in edges.iter().enumerate() {
            if e.weight.partial_cmp(&e.weight).is_none() {
                return Err(Error::InvalidWeight { edge: i });
            }
            let u = *index.get(&e.u).ok_or(Error::UnknownVertex { edge: i })?;
            let v = *index.get(&e.v).ok_or(Error::UnknownVertex { edge: i })?;
            ends.push((u, v));
        }

        Ok(IndexedGraph { nodes, ends })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}
