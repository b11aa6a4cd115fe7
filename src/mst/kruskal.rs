// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Kruskal's algorithm

use crate::graph::{Edge, IndexedGraph, Result, SpanningForest};
use crate::num::traits::NumAssign;
use crate::unionfind::UnionFind;

use log::{debug, trace};
use std::cmp::Ordering;
use std::hash::Hash;

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// * `vertices` are the vertices of the undirected graph
/// * `edges` are the weighted edges of the graph
///
/// The edges are considered in order of increasing weight, edges with
/// equal weight in the order in which they appear in `edges`. An edge is
/// selected if it connects two different components of the edges selected
/// so far. The returned edges are in selection order.
///
/// The algorithm actually solves a minimum spanning *forest* problem
/// if the graph is not connected. This can easily be verified by
/// checking the number of returned edges.
///
/// Fails if some edge has an end point that is not in `vertices` or a
/// weight that cannot be compared.
///
/// # Panics
///
/// The total weight is summed up with `+=`, so a sum that does not fit
/// into `W` panics in debug builds (and wraps in release builds) for
/// integer weights.
///
/// # Example
///
/// ```
/// use mst_forest::{kruskal, Edge};
///
/// let vertices = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];
/// let edges: Vec<Edge<char, u32>> = vec![
///     ('a', 'b', 4), ('a', 'h', 8), ('b', 'h', 11), ('b', 'c', 8),
///     ('h', 'i', 7), ('h', 'g', 1), ('i', 'g', 6), ('i', 'c', 2),
///     ('c', 'd', 7), ('c', 'f', 4), ('d', 'f', 14), ('d', 'e', 9),
///     ('f', 'e', 10), ('g', 'f', 2),
/// ].into_iter().map(Edge::from).collect();
///
/// // run the algorithm
/// let tree = kruskal(&vertices, &edges).unwrap();
///
/// // check the results
/// assert_eq!(tree.total, 37);
/// assert_eq!(tree.len(), vertices.len() - 1);
///
/// let tree = tree.iter().map(|e| (e.u, e.v)).collect::<Vec<_>>();
/// assert_eq!(tree, vec![('h', 'g'), ('i', 'c'), ('g', 'f'), ('a', 'b'),
///                       ('c', 'f'), ('c', 'd'), ('a', 'h'), ('d', 'e')]);
/// ```
pub fn kruskal<V, W>(vertices: &[V], edges: &[Edge<V, W>]) -> Result<SpanningForest<V, W>>
where
    V: Eq + Hash + Clone,
    W: NumAssign + PartialOrd + Copy,
{
    let g = IndexedGraph::new(vertices, edges)?;
    let n = g.num_nodes();

    // `sort_by` is stable, equal weights keep their input order
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&e, &f| {
        edges[e]
            .weight
            .partial_cmp(&edges[f].weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut comps = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut total = W::zero();

    for e in order {
        let (u, v) = g.ends[e];
        if comps.union(u, v) {
            trace!("kruskal: select edge {} ({} - {})", e, u, v);
            tree.push(edges[e].clone());
            total += edges[e].weight;
            // a spanning tree is complete
            if tree.len() + 1 == n {
                break;
            }
        }
    }

    debug!(
        "kruskal: {} vertices, {} edges, {} forest edges, {} trees",
        n,
        edges.len(),
        tree.len(),
        comps.num_sets()
    );

    Ok(SpanningForest { edges: tree, total })
}
