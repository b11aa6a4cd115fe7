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

//! Union-Find (disjoint-set-union) data structures.
//!
//! [`UnionFind`] maintains a partition of the integers `0..n`,
//! [`DisjointSets`] a partition of arbitrary hashable elements. Both use
//! path compression and union by rank.

use crate::graph::{Error, Result};

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

/// State of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Component {
    /// The root element with the tree's rank.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Union-Find data structure over the elements `0..n`.
///
/// # Example
///
/// ```
/// use mst_forest::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.num_sets(), 2);
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    comps: Vec<Component>,
    nsets: usize,
}

impl UnionFind {
    /// Create `n` singleton sets `{0}, ..., {n-1}` of rank 0.
    pub fn new(n: usize) -> Self {
        UnionFind {
            comps: vec![Component::Root(0); n],
            nsets: n,
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    /// Return `true` if there is no element.
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Return the current number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.nsets
    }

    /// Return the representative of the set containing `u`.
    ///
    /// All elements on the path from `u` to the root are re-pointed
    /// directly to the root.
    ///
    /// # Panics
    ///
    /// Panics if `u >= self.len()`.
    pub fn find(&mut self, u: usize) -> usize {
        self.find_root(u).0
    }

    /// Return `true` if `u` and `v` are in the same set.
    pub fn same_set(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merge the sets containing `u` and `v`.
    ///
    /// Returns `false` if both elements are already in the same set.
    /// Otherwise the root with smaller rank becomes a child of the other
    /// root. If both ranks are equal, the root of `v` becomes a child of the
    /// root of `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not smaller than `self.len()`.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let (uroot, urank) = self.find_root(u);
        let (vroot, vrank) = self.find_root(v);
        if uroot == vroot {
            return false;
        }

        if urank < vrank {
            self.comps[uroot] = Component::Node(vroot);
        } else {
            self.comps[vroot] = Component::Node(uroot);
            if urank == vrank {
                self.comps[uroot] = Component::Root(urank + 1);
            }
        }
        self.nsets -= 1;
        true
    }

    /// Return the root node and the tree's rank of node `u`.
    fn find_root(&mut self, u: usize) -> (usize, usize) {
        let mut root = u;
        let rank = loop {
            match self.comps[root] {
                Component::Node(parent) => root = parent,
                Component::Root(rank) => break rank,
            }
        };

        // compress the path
        let mut v = u;
        while let Component::Node(parent) = self.comps[v] {
            self.comps[v] = Component::Node(root);
            v = parent;
        }

        (root, rank)
    }
}

/// Union-Find data structure over arbitrary hashable elements.
///
/// Each operation maps its arguments to indices of an internal
/// [`UnionFind`]. Querying an element that has not been added when the
/// structure was created results in [`Error::UnknownElement`].
///
/// # Example
///
/// ```
/// use mst_forest::DisjointSets;
///
/// let mut sets: DisjointSets<_> = vec!["a", "b", "c"].into_iter().collect();
/// assert!(sets.union(&"a", &"b")?);
/// assert_eq!(sets.find(&"b")?, &"a");
/// assert!(sets.find(&"x").is_err());
/// # Ok::<(), mst_forest::graph::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSets<V> {
    elements: Vec<V>,
    index: HashMap<V, usize>,
    sets: UnionFind,
}

impl<V> DisjointSets<V>
where
    V: Eq + Hash + Clone,
{
    /// Create one singleton set for each element.
    ///
    /// Duplicate elements are ignored.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut index = HashMap::new();
        let mut elems = vec![];
        for x in elements {
            if let Entry::Vacant(entry) = index.entry(x.clone()) {
                entry.insert(elems.len());
                elems.push(x);
            }
        }
        DisjointSets {
            sets: UnionFind::new(elems.len()),
            elements: elems,
            index,
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` if there is no element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return the current number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.sets.num_sets()
    }

    /// Return `true` if `x` is an element of some set.
    pub fn contains(&self, x: &V) -> bool {
        self.index.contains_key(x)
    }

    /// Return the representative of the set containing `x`.
    pub fn find(&mut self, x: &V) -> Result<&V> {
        let u = self.id(x)?;
        let root = self.sets.find(u);
        Ok(&self.elements[root])
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `Ok(false)` if both are already in the same set. See
    /// [`UnionFind::union`] for the choice of the new representative.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let u = self.id(a)?;
        let v = self.id(b)?;
        Ok(self.sets.union(u, v))
    }

    /// Return `true` if `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: &V, b: &V) -> Result<bool> {
        let u = self.id(a)?;
        let v = self.id(b)?;
        Ok(self.sets.same_set(u, v))
    }

    fn id(&self, x: &V) -> Result<usize> {
        self.index.get(x).copied().ok_or(Error::UnknownElement)
    }
}

impl<V> FromIterator<V> for DisjointSets<V>
where
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        DisjointSets::new(iter)
    }
}
