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

#![forbid(unsafe_code)]

//! Minimum spanning trees and forests of weighted undirected graphs.
//!
//! The graph is given by a slice of vertices (any hashable type) and a
//! slice of weighted [`Edge`]s. [`kruskal`] and [`prim`] both return a
//! [`SpanningForest`], i.e. the selected edges and their total weight.
//!
//! ```
//! use mst_forest::{kruskal, prim, Edge};
//!
//! let vertices = ["A", "B", "C", "D"];
//! let edges = vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)];
//!
//! let k = kruskal(&vertices, &edges).unwrap();
//! let p = prim(&vertices, &edges).unwrap();
//! assert_eq!(k.len(), 2);
//! assert_eq!(k.total, 3);
//! assert_eq!(p.total, 3);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod graph;
pub use self::graph::{Edge, Error, SpanningForest};

pub mod collections;

pub mod unionfind;
pub use self::unionfind::{DisjointSets, UnionFind};

// # Algorithms

pub mod mst;
pub use self::mst::{kruskal, prim};

// # Input and output

#[cfg(feature = "edgelist")]
pub mod edgelist;
#[cfg(feature = "random")]
pub mod generate;
