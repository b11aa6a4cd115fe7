// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Prim's algorithm

use crate::collections::{BinHeap, PriQueue};
use crate::graph::{Edge, IndexedGraph, Result, SpanningForest};
use crate::num::traits::NumAssign;

use log::{debug, trace};
use std::hash::Hash;

/// Run Prim's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// * `vertices` are the vertices of the undirected graph
/// * `edges` are the weighted edges of the graph
///
/// A tree is grown from the first vertex in `vertices`. In each step the
/// cheapest edge leaving the tree is added; among edges of equal weight
/// the one that has been discovered first is chosen. Once the tree can not
/// be extended, a new tree is started at the first vertex not covered yet,
/// so a minimum spanning *forest* is returned if the graph is not
/// connected.
///
/// The returned edges are in selection order and oriented from the tree
/// towards the newly added vertex, i.e. `u` is always the vertex that has
/// been in the tree before.
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
/// use mst_forest::{prim, Edge};
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
/// let tree = prim(&vertices, &edges).unwrap();
///
/// // check the results
/// assert_eq!(tree.total, 37);
/// assert_eq!(tree.len(), vertices.len() - 1);
///
/// let tree = tree.iter().map(|e| (e.u, e.v)).collect::<Vec<_>>();
/// assert_eq!(tree, vec![('a', 'b'), ('a', 'h'), ('h', 'g'), ('g', 'f'),
///                       ('f', 'c'), ('c', 'i'), ('c', 'd'), ('d', 'e')]);
/// ```
pub fn prim<V, W>(vertices: &[V], edges: &[Edge<V, W>]) -> Result<SpanningForest<V, W>>
where
    V: Eq + Hash + Clone,
    W: NumAssign + PartialOrd + Copy,
{
    let g = IndexedGraph::new(vertices, edges)?;
    let n = g.num_nodes();

    // adjacency lists of (edge, neighbor)
    let mut neighs = vec![vec![]; n];
    for (e, &(u, v)) in g.ends.iter().enumerate() {
        neighs[u].push((e, v));
        neighs[v].push((e, u));
    }

    let mut visited = vec![false; n];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut total = W::zero();
    let mut ntrees = 0;
    // entries ((tree node, outside node), weight), stale entries are
    // skipped when popped
    let mut heap = BinHeap::with_capacity(edges.len());

    for start in 0..n {
        if visited[start] {
            continue;
        }
        ntrees += 1;
        visited[start] = true;
        trace!("prim: start tree {} at vertex {}", ntrees, start);
        push_neighs(&mut heap, &neighs, &visited, edges, start);

        while let Some(((a, b), w)) = heap.pop_min() {
            if visited[b] {
                continue;
            }
            visited[b] = true;
            trace!("prim: select edge ({} - {})", a, b);
            tree.push(Edge::new(g.nodes[a].clone(), g.nodes[b].clone(), w));
            total += w;
            push_neighs(&mut heap, &neighs, &visited, edges, b);
        }
    }

    debug!(
        "prim: {} vertices, {} edges, {} forest edges, {} trees",
        n,
        edges.len(),
        tree.len(),
        ntrees
    );

    Ok(SpanningForest { edges: tree, total })
}

/// Push all edges from `u` to unvisited neighbors onto the frontier.
fn push_neighs<V, W, P>(heap: &mut P, neighs: &[Vec<(usize, usize)>], visited: &[bool], edges: &[Edge<V, W>], u: usize)
where
    W: Copy,
    P: PriQueue<(usize, usize), W>,
{
    for &(e, v) in &neighs[u] {
        if !visited[v] {
            heap.push((u, v), edges[e].weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prim;
    use crate::graph::{Edge, Error};

    fn edges<W: Copy>(list: &[(&'static str, &'static str, W)]) -> Vec<Edge<&'static str, W>> {
        list.iter().map(|&e| Edge::from(e)).collect()
    }

    #[test]
    fn test_empty() {
        let vertices: [&str; 0] = [];
        let tree = prim(&vertices, &edges::<i32>(&[])).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total, 0);
    }

    #[test]
    fn test_orientation() {
        let vertices = ["C", "B", "A"];
        let es = edges(&[("A", "B", 1), ("A", "C", 3), ("B", "C", 2)]);
        let tree = prim(&vertices, &es).unwrap();
        let selected: Vec<_> = tree.iter().map(|e| (e.u, e.v, e.weight)).collect();
        assert_eq!(selected, vec![("C", "B", 2), ("B", "A", 1)]);
        assert_eq!(tree.total, 3);
    }

    #[test]
    fn test_ties_in_discovery_order() {
        let vertices = ["A", "B", "C"];
        let es = edges(&[("A", "C", 5), ("A", "B", 5), ("B", "C", 5)]);
        let tree = prim(&vertices, &es).unwrap();
        let selected: Vec<_> = tree.iter().map(|e| (e.u, e.v)).collect();
        assert_eq!(selected, vec![("A", "C"), ("A", "B")]);
        assert_eq!(tree.total, 10);
    }

    #[test]
    fn test_forest_roots() {
        let vertices = ["D", "A", "B", "C", "E"];
        let es = edges(&[("A", "B", 1.0), ("C", "D", 2.0), ("B", "A", 0.5), ("E", "E", 1.0)]);
        let tree = prim(&vertices, &es).unwrap();
        let selected: Vec<_> = tree.iter().map(|e| (e.u, e.v, e.weight)).collect();
        assert_eq!(selected, vec![("D", "C", 2.0), ("A", "B", 0.5)]);
        assert_eq!(tree.total, 2.5);
        assert_eq!(tree.num_trees(vertices.len()), 3);
    }

    #[test]
    fn test_invalid_weight() {
        let vertices = ["A", "B"];
        let es = edges(&[("A", "B", f64::NAN)]);
        assert_eq!(prim(&vertices, &es).err(), Some(Error::InvalidWeight { edge: 0 }));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "overflow")]
    fn test_total_overflow() {
        let vertices = ["A", "B", "C"];
        let es = edges(&[("A", "B", 200u8), ("B", "C", 100u8)]);
        let _ = prim(&vertices, &es);
    }
}
