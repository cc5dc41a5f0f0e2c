use std::path::PathBuf;

use clap::Parser;
use prim_mst::{
    error::MstError,
    graphs::{graph_factory::GraphFactory, Graph},
    utility::{get_progressspinner, init_tracing},
};
use tracing::info;

/// Generates a random undirected graph and stores it in bincode format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long)]
    number_of_vertices: u32,
    /// Defaults to twice the number of vertices
    #[arg(short = 'm', long)]
    number_of_edges: Option<u64>,
    #[arg(long, default_value_t = 1)]
    min_weight: u32,
    #[arg(long, default_value_t = 100)]
    max_weight: u32,
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Outfile in bincode format
    #[arg(short, long)]
    out_file: PathBuf,
}

fn main() -> Result<(), MstError> {
    init_tracing();
    let args = Args::parse();

    let number_of_edges = args
        .number_of_edges
        .unwrap_or(args.number_of_vertices as u64 * 2);

    let spinner = get_progressspinner("Generating graph");
    let graph = GraphFactory::random_seeded(
        args.number_of_vertices,
        number_of_edges,
        args.min_weight..=args.max_weight,
        args.seed,
    )?;
    spinner.finish_and_clear();

    GraphFactory::to_bincode_file(&graph, &args.out_file)?;
    info!(
        vertices = graph.number_of_vertices(),
        adjacency_entries = graph.number_of_adjacency_entries(),
        path = ?args.out_file,
        "wrote graph"
    );

    Ok(())
}
