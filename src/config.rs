use std::{fs::File, io::BufReader, ops::RangeInclusive, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, IoError},
    graphs::{Graph, Weight},
    spanning::collections::{
        frontier_queue::{FrontierQueue, FrontierQueueBinaryHeap, FrontierQueueKeyed},
        visited_vertices::{VisitedVertices, VisitedVerticesBitSet, VisitedVerticesVec},
    },
};

#[derive(Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    /// Binary heap with stale entries
    #[default]
    BinaryHeap,
    /// Keyed heap with decrease key
    Keyed,
}

impl QueueKind {
    pub fn frontier(&self) -> Box<dyn FrontierQueue> {
        match self {
            QueueKind::BinaryHeap => Box::new(FrontierQueueBinaryHeap::new()),
            QueueKind::Keyed => Box::new(FrontierQueueKeyed::new()),
        }
    }
}

#[derive(Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitedKind {
    #[default]
    Vec,
    BitSet,
}

impl VisitedKind {
    pub fn visited(&self, graph: &dyn Graph) -> Box<dyn VisitedVertices> {
        match self {
            VisitedKind::Vec => Box::new(VisitedVerticesVec::new(graph)),
            VisitedKind::BitSet => Box::new(VisitedVerticesBitSet::new(graph)),
        }
    }
}

/// Parameters of a benchmark run over several random graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub vertex_counts: Vec<u32>,
    /// Edges generated per vertex.
    pub edges_per_vertex: u32,
    pub min_weight: Weight,
    pub max_weight: Weight,
    /// Seed of the first graph, graph `i` uses `seed + i`.
    pub seed: u64,
    pub queue: QueueKind,
    pub visited: VisitedKind,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            vertex_counts: vec![10, 50, 100, 1_000, 10_000, 100_000, 1_000_000],
            edges_per_vertex: 2,
            min_weight: 1,
            max_weight: 100,
            seed: 0,
            queue: QueueKind::default(),
            visited: VisitedKind::default(),
        }
    }
}

impl BenchmarkConfig {
    pub fn from_json_file(path: &Path) -> Result<BenchmarkConfig, IoError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertex_counts.is_empty() {
            return Err(ConfigError::NoVertexCounts);
        }
        if self.min_weight > self.max_weight {
            return Err(ConfigError::EmptyWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        if self.min_weight == 0 {
            return Err(ConfigError::ZeroWeight);
        }
        Ok(())
    }

    pub fn weights(&self) -> RangeInclusive<Weight> {
        self.min_weight..=self.max_weight
    }

    pub fn number_of_edges(&self, number_of_vertices: u32) -> u64 {
        number_of_vertices as u64 * self.edges_per_vertex as u64
    }

    pub fn seed_of(&self, graph_index: usize) -> u64 {
        self.seed.wrapping_add(graph_index as u64)
    }
}
