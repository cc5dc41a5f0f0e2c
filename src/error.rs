use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::{Vertex, Weight};

/// Failures caused by addressing a vertex the graph does not have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },
    #[error("visited markers cover {marked_vertices} vertices but the graph has {number_of_vertices}")]
    VisitedSizeMismatch {
        marked_vertices: usize,
        number_of_vertices: u32,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("weight range {min}..={max} is empty")]
    EmptyWeightRange { min: Weight, max: Weight },
    #[error("edge weights must be positive")]
    ZeroWeight,
    #[error("no vertex counts configured")]
    NoVertexCounts,
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Bincode(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unsupported graph file extension of {0:?}")]
    UnknownExtension(PathBuf),
}

/// Union of every error the crate can surface.
#[derive(Debug, Error)]
pub enum MstError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] IoError),
}

impl From<std::io::Error> for MstError {
    fn from(error: std::io::Error) -> Self {
        MstError::Io(IoError::Io(error))
    }
}

impl From<serde_json::Error> for MstError {
    fn from(error: serde_json::Error) -> Self {
        MstError::Io(IoError::Json(error))
    }
}
