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

use mst_forest::generate::{max_edges, random_graph, sparse_edges, sweep_nodes, Series};
use mst_forest::{kruskal, prim, Edge, Error, SpanningForest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error;
use std::result::Result;

use rustop::opts;
use time::OffsetDateTime;

type Algorithm = fn(&[usize], &[Edge<usize, u32>]) -> Result<SpanningForest<usize, u32>, Error>;

/// Run `alg` and return its result and the runtime in milliseconds.
fn timed(alg: Algorithm, vertices: &[usize], edges: &[Edge<usize, u32>]) -> Result<(SpanningForest<usize, u32>, f64), Error> {
    let tstart = OffsetDateTime::now_utc();
    let forest = alg(vertices, edges)?;
    let tend = OffsetDateTime::now_utc();
    Ok((forest, (tend - tstart).as_seconds_f64() * 1000.0))
}

/// Generate one graph of the given size, solve it with both algorithms and
/// print one table row.
fn measure(rng: &mut StdRng, kind: &str, n: usize, m: usize) -> Result<(), Box<dyn error::Error>> {
    let (vertices, edges) = random_graph(rng, n, m)?;
    let (k, ktime) = timed(kruskal, &vertices, &edges)?;
    let (p, ptime) = timed(prim, &vertices, &edges)?;
    if k.total != p.total {
        return Err(format!("different weights {} and {} (n={} m={})", k.total, p.total, n, m).into());
    }
    println!(
        "{:>7} {:>8} {:>8} {:>14.3} {:>14.3} {:>10}",
        kind,
        n,
        edges.len(),
        ktime,
        ptime,
        k.total
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Compare the runtime of Kruskal's and Prim's algorithm on random graphs.";
        opt seed:u64=42, desc:"Seed of the random number generator";
        opt mode:Option<String>, desc:"Experiment: 'density' (sparse vs. dense, default), 'nodes' or 'edges' (series)";
        opt max_nodes:usize=100, desc:"Largest number of vertices of the density experiment";
        opt nodes:Option<String>, desc:"Series: vertex counts (mode 'nodes') or fixed vertex count (mode 'edges')";
        opt edges:Option<String>, desc:"Series: fixed edge count (mode 'nodes') or edge counts (mode 'edges')";
    }
    .parse_or_exit();

    let mut rng = StdRng::seed_from_u64(args.seed);

    println!(
        "{:>7} {:>8} {:>8} {:>14} {:>14} {:>10}",
        "kind", "nodes", "edges", "kruskal (ms)", "prim (ms)", "weight"
    );

    let mode = args.mode.as_deref().unwrap_or("density");
    if mode == "density" {
        let nodes = sweep_nodes(args.max_nodes);
        if nodes.is_empty() {
            return Err("max-nodes must be at least 5".into());
        }
        for n in nodes {
            measure(&mut rng, "sparse", n, sparse_edges(n))?;
            measure(&mut rng, "dense", n, max_edges(n))?;
        }
    } else {
        let (nodes, edges) = match (&args.nodes, &args.edges) {
            (Some(nodes), Some(edges)) => (nodes, edges),
            _ => return Err("series experiments need --nodes and --edges".into()),
        };
        let series = Series::parse(mode, nodes, edges)?;
        for (n, m) in series.sizes()? {
            measure(&mut rng, mode, n, m)?;
        }
    }

    Ok(())
}
