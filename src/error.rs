use crate::{ConfigError, SkeletonError};

/// Any error produced while loading a skeleton or building its mesh.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Skeleton(#[from] SkeletonError),
    #[error(transparent)]
    Buffer(#[from] quadmesh::BufferError),
    #[error("Malformed skeleton JSON: {0}")]
    Json(#[from] serde_json::Error),
}
