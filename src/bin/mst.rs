use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use clap::Parser;
use prim_mst::{
    config::{QueueKind, VisitedKind},
    error::MstError,
    graphs::{graph_factory::GraphFactory, graph_functions::average_degree, Graph},
    spanning::{
        prim::{minimum_spanning_forest_with, prim_with},
        validation::validate_spanning_tree,
        SpanningTree,
    },
    utility::{get_progressspinner, init_tracing},
};
use tracing::{info, warn};

/// Computes the minimum spanning tree of a stored graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in bincode (.bin) or edge list (.txt) format
    #[arg(short, long)]
    graph: PathBuf,
    /// Root of the tree
    #[arg(short, long, default_value_t = 0, conflicts_with = "forest")]
    start: u32,
    /// Grow one tree per connected component
    #[arg(short, long)]
    forest: bool,
    #[arg(short, long, value_enum, default_value = "binary-heap")]
    queue: QueueKind,
    #[arg(long, value_enum, default_value = "vec")]
    visited: VisitedKind,
    /// Writes the tree (or forest) as json
    #[arg(short, long)]
    out_file: Option<PathBuf>,
}

fn main() -> Result<(), MstError> {
    init_tracing();
    let args = Args::parse();

    let spinner = get_progressspinner("Reading graph");
    let graph = GraphFactory::from_file(&args.graph)?;
    spinner.finish_and_clear();
    info!(
        vertices = graph.number_of_vertices(),
        adjacency_entries = graph.number_of_adjacency_entries(),
        average_degree = ?average_degree(&graph),
        "read graph"
    );

    let mut queue = args.queue.frontier();
    let mut visited = args.visited.visited(&graph);

    let start = Instant::now();
    let forest: Vec<SpanningTree> = if args.forest {
        minimum_spanning_forest_with(&graph, &mut *queue, &mut *visited)?
    } else {
        vec![prim_with(&graph, &mut *queue, &mut *visited, args.start)?]
    };
    let duration = start.elapsed();

    for tree in &forest {
        let root = tree.root().unwrap_or(args.start);
        if let Err(message) = validate_spanning_tree(&graph, root, tree) {
            warn!(root, reason = %message, "tree failed validation");
        }
    }

    let total_weight = forest.iter().map(SpanningTree::total_weight).sum::<u64>();
    let covered = forest.iter().map(SpanningTree::len).sum::<usize>();
    println!("trees: {}", forest.len());
    println!("covered vertices: {}", covered);
    println!("total weight: {}", total_weight);
    println!("took {:?}", duration);

    if let Some(out_file) = &args.out_file {
        let writer = BufWriter::new(File::create(out_file)?);
        match forest.as_slice() {
            [tree] if !args.forest => serde_json::to_writer(writer, tree)?,
            _ => serde_json::to_writer(writer, &forest)?,
        }
    }

    Ok(())
}
