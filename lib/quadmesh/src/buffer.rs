use vinemesh_common::ArrayIndex;

use crate::{Aabb, BufferError, Face, Normal, Position};

/// An index-based quad mesh: parallel vertex position & normal arrays, plus faces referring to
/// them by index.
///
/// Every face index is less than [`vertex_count`](Self::vertex_count) at all times; the methods
/// which add data check this before modifying `self`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer<Idx: ArrayIndex = u32> {
    positions: Vec<Position>,
    normals: Vec<Normal>,
    faces: Vec<Face<Idx>>,
}

impl<Idx: ArrayIndex> Default for MeshBuffer<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> MeshBuffer<Idx> {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn faces(&self) -> &[Face<Idx>] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }

    /// Append a vertex, returning its index.
    ///
    /// # Errors
    ///
    /// * [`IndexOverflow`](BufferError::IndexOverflow) if the new vertex can't be addressed by `Idx`.
    pub fn push_vertex(&mut self, position: Position, normal: Normal) -> Result<Idx, BufferError> {
        let n = self.positions.len();
        let idx = Idx::try_from_usize(n).ok_or(BufferError::IndexOverflow(n))?;
        self.positions.push(position);
        self.normals.push(normal);
        Ok(idx)
    }

    /// Append a face.
    ///
    /// # Errors
    ///
    /// * [`DanglingIndex`](BufferError::DanglingIndex) if the face refers to a vertex not yet in `self`.
    pub fn push_face(&mut self, face: Face<Idx>) -> Result<(), BufferError> {
        let vertices = self.vertex_count();
        if let Some(&index) = face.indices.iter().find(|i| i.as_index() >= vertices) {
            return Err(BufferError::DanglingIndex {
                face: self.faces.len(),
                index: index.as_index(),
                vertices,
            });
        }
        self.faces.push(face);
        Ok(())
    }

    /// Append all of `other` to `self`, shifting `other`'s face indices by the number of vertices
    /// already in `self`.
    ///
    /// Either all of `other` is merged, or (on error) `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// * [`IndexOverflow`](BufferError::IndexOverflow) if the combined buffer holds more vertices than `Idx` can address.
    pub fn merge(&mut self, other: MeshBuffer<Idx>) -> Result<(), BufferError> {
        if other.is_empty() {
            return Ok(());
        }
        let base = self.vertex_count();
        let total = base + other.vertex_count();
        if total > 0 {
            // the last vertex of the merged buffer must still be addressable
            Idx::try_from_usize(total - 1).ok_or(BufferError::IndexOverflow(total - 1))?;
        }
        let offset = Idx::try_from_usize(base).ok_or(BufferError::IndexOverflow(base))?;
        debug_assert!(other
            .faces
            .iter()
            .all(|f| f.max_index().as_index() < other.vertex_count()));

        let faces = other
            .faces
            .iter()
            .map(|f| {
                f.offset(offset)
                    .ok_or_else(|| BufferError::IndexOverflow(base + f.max_index().as_index()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
        self.faces.extend(faces);
        Ok(())
    }

    /// Check the buffer's invariants: matching attribute counts, no dangling indices, and no
    /// non-finite values.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.positions.len() != self.normals.len() {
            return Err(BufferError::NormalCountMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        let vertices = self.vertex_count();
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.indices.iter().find(|i| i.as_index() >= vertices) {
                return Err(BufferError::DanglingIndex {
                    face: fi,
                    index: index.as_index(),
                    vertices,
                });
            }
            if face.depth.iter().any(|d| !d.is_finite()) {
                return Err(BufferError::NonFinite("depth", fi));
            }
        }
        if let Some(i) = self.positions.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(BufferError::NonFinite("position", i));
        }
        if let Some(i) = self.normals.iter().position(|n| !n.iter().all(|c| c.is_finite())) {
            return Err(BufferError::NonFinite("normal", i));
        }
        Ok(())
    }

    /// The bounding box of every vertex, or `None` if `self` has no vertices.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }

    /// Iterate over all faces as triangles, two per quad.
    pub fn triangles(&self) -> impl Iterator<Item = [Idx; 3]> + '_ {
        self.faces.iter().flat_map(|f| f.triangles())
    }

    /// Per-corner attribute values, in face order; four per face.
    pub fn face_vertex_depths(&self) -> impl Iterator<Item = f32> + '_ {
        self.faces.iter().flat_map(|f| f.depth)
    }

    /// Flat normals of each face, for faceted shading.
    ///
    /// Uses Newell's method, so quads with collapsed corners (as found at sphere poles) still get
    /// a usable normal. Fully degenerate faces get a zero vector.
    pub fn face_normals(&self) -> Vec<Normal> {
        self.faces
            .iter()
            .map(|f| {
                let mut n = Normal::zeros();
                for k in 0..4 {
                    let cur = &self.positions[f.indices[k].as_index()];
                    let next = &self.positions[f.indices[(k + 1) % 4].as_index()];
                    n.x += (cur.y - next.y) * (cur.z + next.z);
                    n.y += (cur.z - next.z) * (cur.x + next.x);
                    n.z += (cur.x - next.x) * (cur.y + next.y);
                }
                n.try_normalize(f32::EPSILON).unwrap_or_else(Normal::zeros)
            })
            .collect()
    }

    /// The number of faces which are fully revealed at a given growth level; i.e. those whose
    /// every corner attribute is `<= growth`.
    pub fn grown_face_count(&self, growth: f32) -> usize {
        self.faces
            .iter()
            .filter(|f| f.depth.iter().all(|&d| d <= growth))
            .count()
    }
}
