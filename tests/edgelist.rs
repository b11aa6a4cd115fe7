/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use mst_forest::edgelist;
use mst_forest::{kruskal, prim};

use std::error::Error;

const TESTS: &[(&str, usize, usize, f64)] = &[
    ("tests/data/disconnected.txt", 4, 2, 3.0),
    ("tests/data/forest.txt", 9, 6, 23.75),
];

#[test]
fn test_files() -> Result<(), Box<dyn Error>> {
    for &(file, nvertices, nedges, expected) in TESTS {
        let instance = edgelist::read_from_file(file)?;
        assert_eq!(instance.vertices.len(), nvertices, "Instance: {}", file);

        let k = kruskal(&instance.vertices, &instance.edges)?;
        let p = prim(&instance.vertices, &instance.edges)?;
        assert_eq!(k.len(), nedges, "Instance: {}", file);
        assert_eq!(p.len(), nedges, "Instance: {}", file);
        assert_eq!(k.total, expected, "Instance: {}", file);
        assert_eq!(p.total, expected, "Instance: {}", file);
    }

    Ok(())
}

#[test]
fn test_sample() -> Result<(), Box<dyn Error>> {
    let instance = edgelist::parse(edgelist::SAMPLE)?;
    let k = kruskal(&instance.vertices, &instance.edges)?;
    let p = prim(&instance.vertices, &instance.edges)?;
    assert_eq!(k.total, 37.0);
    assert_eq!(p.total, 37.0);
    assert_eq!(format!("{}", k.total), "37");

    // the written tree is a valid edge list spanning the same vertices
    let mut out = vec![];
    edgelist::write(&mut out, &k.edges)?;
    let tree = edgelist::read(&out[..])?;
    assert_eq!(tree.vertices.len(), instance.vertices.len());
    assert_eq!(kruskal(&tree.vertices, &tree.edges)?, k);

    Ok(())
}

#[test]
fn test_invalid_file() {
    match edgelist::read_from_file("tests/data/invalid.txt") {
        Err(edgelist::Error::Data { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(matches!(
        edgelist::read_from_file("tests/data/does-not-exist.txt"),
        Err(edgelist::Error::Io(_))
    ));
}
