/// Errors related to [MeshBuffers](crate::MeshBuffer).
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Vertex index {0} is not representable by the buffer's index type")]
    IndexOverflow(usize),
    #[error("Face {face} refers to vertex {index}, but the buffer holds only {vertices} vertices")]
    DanglingIndex {
        face: usize,
        index: usize,
        vertices: usize,
    },
    #[error("Buffer holds {positions} positions but {normals} normals")]
    NormalCountMismatch { positions: usize, normals: usize },
    #[error("Non-finite {0} at index {1}")]
    NonFinite(&'static str, usize),
}
