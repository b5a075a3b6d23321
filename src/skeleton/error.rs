use crate::NodeId;

/// Errors related to [Skeletons](crate::Skeleton).
#[derive(Debug, thiserror::Error)]
pub enum SkeletonError {
    #[error("Attempted to access node {0}, which is not part of this skeleton")]
    InvalidNode(NodeId),
    #[error("Attempted to add a child with a non-finite position to node {0}")]
    NonFinitePosition(NodeId),
    #[error("Skeleton has more nodes than can be addressed")]
    TooManyNodes,
    #[error("Skeleton edge lengths overflow; total length {total_length}, max depth {max_depth}")]
    NonFiniteLength { total_length: f32, max_depth: f32 },
    #[error("No record is free of incoming child references; expected exactly one root")]
    NoRoot,
    #[error("Multiple records are free of incoming child references; expected exactly one root, found: {0:?}")]
    MultipleRoots(Vec<u64>),
    #[error("Record id {0} appears more than once")]
    DuplicateId(u64),
    #[error("Record {parent} refers to unknown child {child}")]
    UnknownChild { parent: u64, child: u64 },
    #[error("Record {0} is referenced as a child more than once")]
    MultipleParents(u64),
    #[error("Record {0} is unreachable from the root; records form a cycle")]
    Cycle(u64),
}
