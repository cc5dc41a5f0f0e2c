use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    ops::RangeInclusive,
    path::Path,
    str::FromStr,
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::{AdjacencyGraph, Vertex, Weight};
use crate::error::{ConfigError, IoError, MstError};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Random graph with `number_of_edges` edges whose endpoints are drawn
    /// uniformly from all vertices. Self-loops and parallel edges are kept.
    /// A graph without vertices gets no edges.
    pub fn random<R: Rng + ?Sized>(
        number_of_vertices: u32,
        number_of_edges: u64,
        weights: RangeInclusive<Weight>,
        rng: &mut R,
    ) -> Result<AdjacencyGraph, ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::EmptyWeightRange {
                min: *weights.start(),
                max: *weights.end(),
            });
        }
        if *weights.start() == 0 {
            return Err(ConfigError::ZeroWeight);
        }

        let mut graph = AdjacencyGraph::new(number_of_vertices);
        if number_of_vertices == 0 {
            return Ok(graph);
        }

        for _ in 0..number_of_edges {
            let tail = rng.gen_range(0..number_of_vertices);
            let head = rng.gen_range(0..number_of_vertices);
            let weight = rng.gen_range(weights.clone());
            graph.insert_edge(tail, head, weight);
        }

        debug!(number_of_vertices, number_of_edges, "generated random graph");
        Ok(graph)
    }

    /// Same as [`GraphFactory::random`] with a generator seeded from `seed`,
    /// so equal arguments give equal graphs.
    pub fn random_seeded(
        number_of_vertices: u32,
        number_of_edges: u64,
        weights: RangeInclusive<Weight>,
        seed: u64,
    ) -> Result<AdjacencyGraph, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(number_of_vertices, number_of_edges, weights, &mut rng)
    }

    pub fn from_file(path: &Path) -> Result<AdjacencyGraph, MstError> {
        let file_extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .ok_or_else(|| IoError::UnknownExtension(path.to_path_buf()))?;
        match file_extension {
            "bin" | "bincode" => Ok(Self::from_bincode_file(path)?),
            "txt" | "edges" => Self::from_edge_list_file(path),
            _ => Err(IoError::UnknownExtension(path.to_path_buf()).into()),
        }
    }

    pub fn from_bincode_file(path: &Path) -> Result<AdjacencyGraph, IoError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    pub fn to_bincode_file(graph: &AdjacencyGraph, path: &Path) -> Result<(), IoError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, graph)?;
        Ok(())
    }

    /// Reads a text edge list. Lines starting with `#` are comments, the first
    /// remaining line holds the number of vertices and every further line one
    /// edge as `tail head weight`.
    pub fn from_edge_list_file(path: &Path) -> Result<AdjacencyGraph, MstError> {
        let reader = BufReader::new(File::open(path)?);

        let mut graph: Option<AdjacencyGraph> = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match graph.as_mut() {
                None => {
                    let number_of_vertices = parse_value(line, index, "number of vertices")?;
                    graph = Some(AdjacencyGraph::new(number_of_vertices));
                }
                Some(graph) => {
                    let mut values = line.split_whitespace();
                    let mut next_value = |name: &str| {
                        values.next().ok_or_else(|| IoError::Parse {
                            line: index + 1,
                            message: format!("no {} found", name),
                        })
                    };
                    let tail: Vertex = parse_value(next_value("tail")?, index, "tail")?;
                    let head: Vertex = parse_value(next_value("head")?, index, "head")?;
                    let weight: Weight = parse_value(next_value("weight")?, index, "weight")?;
                    graph.add_edge(tail, head, weight)?;
                }
            }
        }

        graph.ok_or_else(|| {
            IoError::Parse {
                line: 0,
                message: "missing number of vertices".to_string(),
            }
            .into()
        })
    }
}

fn parse_value<T: FromStr>(value: &str, index: usize, name: &str) -> Result<T, IoError> {
    value.parse().map_err(|_| IoError::Parse {
        line: index + 1,
        message: format!("unable to parse {} from {:?}", name, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{graph_functions::edge_weights, Graph};

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = GraphFactory::random_seeded(50, 100, 1..=100, 7).unwrap();
        let second = GraphFactory::random_seeded(50, 100, 1..=100, 7).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.number_of_adjacency_entries(), 200);
    }

    #[test]
    fn generated_weights_stay_in_range() {
        let graph = GraphFactory::random_seeded(20, 60, 3..=5, 1).unwrap();
        assert!(edge_weights(&graph)
            .unwrap()
            .iter()
            .all(|weight| (3..=5).contains(weight)));
    }

    #[test]
    fn empty_graph_gets_no_edges() {
        let graph = GraphFactory::random_seeded(0, 10, 1..=100, 0).unwrap();
        assert_eq!(graph.number_of_vertices(), 0);
        assert_eq!(graph.number_of_adjacency_entries(), 0);
    }

    #[test]
    fn invalid_weight_ranges_are_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty = GraphFactory::random_seeded(5, 5, 10..=1, 0);
        assert_eq!(
            empty.unwrap_err(),
            ConfigError::EmptyWeightRange { min: 10, max: 1 }
        );
        assert_eq!(
            GraphFactory::random_seeded(5, 5, 0..=1, 0).unwrap_err(),
            ConfigError::ZeroWeight
        );
    }
}
