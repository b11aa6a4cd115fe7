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

use mst_forest::edgelist::{self, Instance};
use mst_forest::generate::{parse_size, random_graph};
use mst_forest::{kruskal, prim, Edge, Error, SpanningForest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error;
use std::path::PathBuf;
use std::result::Result;

use rustop::opts;
use time::OffsetDateTime;

type Algorithm = fn(&[String], &[Edge<String, f64>]) -> Result<SpanningForest<String, f64>, Error>;

fn run(name: &str, alg: Algorithm, instance: &Instance, output: Option<&str>) -> Result<(), Box<dyn error::Error>> {
    let tstart = OffsetDateTime::now_utc();
    let forest = alg(&instance.vertices, &instance.edges)?;
    let tend = OffsetDateTime::now_utc();

    println!();
    println!("Algorithm           : {}", name);
    println!("Runtime (ms)        : {:.3}", (tend - tstart).as_seconds_f64() * 1000.0);
    if forest.is_empty() {
        println!("No MST edges (graph may be empty).");
        return Ok(());
    }
    println!("Total weight        : {}", forest.total);
    println!("Number of trees     : {}", forest.num_trees(instance.vertices.len()));
    println!("Edges in MST (u v weight):");
    edgelist::write(&mut std::io::stdout(), &forest.edges)?;

    if let Some(output) = output {
        let solfile = PathBuf::from(format!("{}.{}", output, name));
        println!("Write forest to     : {}", solfile.display());
        let f = &mut std::fs::File::create(&solfile)?;
        edgelist::write(f, &forest.edges)?;
    }

    Ok(())
}

/// Generate a seeded random graph from a `N,M` size pair.
fn random_instance(sizes: &str, seed: u64) -> Result<Instance, Box<dyn error::Error>> {
    let (n, m) = parse_size(sizes)?;
    let (vertices, edges) = random_graph(&mut StdRng::seed_from_u64(seed), n, m)?;
    println!("Random Graph Generated Nodes={}, Edges={}", n, edges.len());
    Ok(Instance {
        vertices: vertices.iter().map(|v| v.to_string()).collect(),
        edges: edges
            .iter()
            .map(|e| Edge::new(e.u.to_string(), e.v.to_string(), f64::from(e.weight)))
            .collect(),
    })
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Compute a minimum spanning forest with Kruskal's or Prim's algorithm.";
        param file:Option<String>, desc:"Edge list file (default: built-in sample graph)";
        opt kruskal:bool, desc:"Run Kruskal's algorithm";
        opt prim:bool, desc:"Run Prim's algorithm";
        opt output:Option<String>, desc:"Write the forest to <output>.<algorithm>";
        opt random:Option<String>, desc:"Solve a random graph with NODES,EDGES instead of a file";
        opt seed:u64=42, desc:"Seed of the random number generator";
    }
    .parse_or_exit();

    let (name, instance) = match (&args.random, &args.file) {
        (Some(_), Some(_)) => return Err("--random and an input file exclude each other".into()),
        (Some(sizes), None) => ("<random>", random_instance(sizes, args.seed)?),
        (None, Some(file)) => (file.as_str(), edgelist::read_from_file(file)?),
        (None, None) => ("<sample>", edgelist::parse(edgelist::SAMPLE)?),
    };
    if instance.vertices.is_empty() {
        return Err("No vertices found in input".into());
    }

    println!("Instance            : {}", name);
    println!("Number of vertices  : {}", instance.vertices.len());
    println!("Number of edges     : {}", instance.edges.len());

    // run both if none has been selected
    let both = !args.kruskal && !args.prim;
    let output = args.output.as_deref();
    if args.kruskal || both {
        run("kruskal", kruskal, &instance, output)?;
    }
    if args.prim || both {
        run("prim", prim, &instance, output)?;
    }

    Ok(())
}
