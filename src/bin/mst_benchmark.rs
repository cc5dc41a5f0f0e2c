use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use prim_mst::{
    config::{BenchmarkConfig, QueueKind, VisitedKind},
    error::MstError,
    graphs::{graph_factory::GraphFactory, AdjacencyGraph},
    report::{performance::analyze_performance, table::render_table},
    spanning::validation::validate_spanning_tree,
    utility::{get_progressbar, init_tracing},
};
use rayon::prelude::*;
use tracing::{error, info};

/// Runs Prim's algorithm on random graphs of growing size and prints a report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Benchmark configuration in json format
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Comma separated vertex counts
    #[arg(short, long, value_delimiter = ',')]
    vertex_counts: Option<Vec<u32>>,
    /// Edges generated per vertex
    #[arg(short, long)]
    edges_per_vertex: Option<u32>,
    #[arg(long)]
    min_weight: Option<u32>,
    #[arg(long)]
    max_weight: Option<u32>,
    /// Seed of the first graph
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, value_enum)]
    queue: Option<QueueKind>,
    #[arg(long, value_enum)]
    visited: Option<VisitedKind>,
    /// Check every tree before reporting it
    #[arg(long)]
    validate: bool,
    /// Writes the report rows as json
    #[arg(short, long)]
    json_out: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<BenchmarkConfig, MstError> {
        let mut config = match &self.config {
            Some(path) => BenchmarkConfig::from_json_file(path)?,
            None => BenchmarkConfig::default(),
        };

        if let Some(vertex_counts) = &self.vertex_counts {
            config.vertex_counts = vertex_counts.clone();
        }
        if let Some(edges_per_vertex) = self.edges_per_vertex {
            config.edges_per_vertex = edges_per_vertex;
        }
        if let Some(min_weight) = self.min_weight {
            config.min_weight = min_weight;
        }
        if let Some(max_weight) = self.max_weight {
            config.max_weight = max_weight;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(queue) = self.queue {
            config.queue = queue;
        }
        if let Some(visited) = self.visited {
            config.visited = visited;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), MstError> {
    init_tracing();
    let args = Args::parse();
    let config = args.config()?;
    info!(?config, "starting benchmark");

    let pb = get_progressbar("Generating graphs", config.vertex_counts.len() as u64);
    let graphs = config
        .vertex_counts
        .par_iter()
        .enumerate()
        .map(|(index, &number_of_vertices)| {
            GraphFactory::random_seeded(
                number_of_vertices,
                config.number_of_edges(number_of_vertices),
                config.weights(),
                config.seed_of(index),
            )
        })
        .progress_with(pb)
        .collect::<Result<Vec<AdjacencyGraph>, _>>()?;

    // timed sequentially, parallel runs would distort the measurement
    let mut rows = Vec::new();
    for graph in graphs.iter() {
        let (row, tree) = analyze_performance(graph, config.queue, config.visited)?;
        if args.validate {
            if let Err(message) = validate_spanning_tree(graph, 0, &tree) {
                error!(vertices = row.vertices, reason = %message, "invalid spanning tree");
            }
        }
        rows.push(row);
    }

    println!("{}", render_table(&rows));

    if let Some(json_out) = &args.json_out {
        let writer = BufWriter::new(File::create(json_out)?);
        serde_json::to_writer_pretty(writer, &rows)?;
        info!(path = ?json_out, "wrote report");
    }

    Ok(())
}
