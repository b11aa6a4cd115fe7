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

//! Minimum spanning tree algorithms.
//!
//! Both algorithms compute a minimum spanning forest of an undirected
//! graph given by a vertex slice and an edge slice. The total weight of the
//! returned forests is the same, the selected edges may differ if there
//! are edges with equal weight.

pub mod kruskal;
pub use self::kruskal::kruskal;

pub mod prim;
pub use self::prim::prim;
