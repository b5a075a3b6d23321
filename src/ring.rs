//! Circular cross-sections of a tube.

use std::f32::consts::TAU;

use nalgebra::{Point3, Vector3};
use quadmesh::{ArrayIndex, BufferError, MeshBuffer};

use crate::{ConfigError, Frame, MIN_RADIUS_SEGMENTS};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingVertex {
    pub position: Point3<f32>,
    /// Unit direction from the ring's center to `position`.
    pub normal: Vector3<f32>,
}

/// Evenly spaced vertices on a circle perpendicular to a [Frame]'s tangent.
///
/// Vertex `i` lies at angle `2π·i/len` from the frame's normal, turning towards its binormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<RingVertex>,
}

impl Ring {
    /// # Errors
    ///
    /// * [`TooFewRadiusSegments`](ConfigError::TooFewRadiusSegments) if `segments < 3`.
    /// * [`NonPositiveRadius`](ConfigError::NonPositiveRadius) or [`NonFinite`](ConfigError::NonFinite) for an unusable `radius`.
    pub fn new(
        center: Point3<f32>,
        frame: &Frame,
        segments: u32,
        radius: f32,
    ) -> Result<Self, ConfigError> {
        if segments < MIN_RADIUS_SEGMENTS {
            return Err(ConfigError::TooFewRadiusSegments(segments));
        }
        if !radius.is_finite() {
            return Err(ConfigError::NonFinite("radius"));
        }
        if radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        let vertices = (0..segments)
            .map(|i| {
                let (sin, cos) = (TAU * i as f32 / segments as f32).sin_cos();
                let normal = frame.normal.into_inner() * cos + frame.binormal.into_inner() * sin;
                RingVertex {
                    position: center + normal * radius,
                    normal,
                }
            })
            .collect();
        Ok(Self { vertices })
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[RingVertex] {
        &self.vertices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RingVertex> {
        self.vertices.iter()
    }

    /// Append every vertex to `buf`, returning the index of the first.
    pub(crate) fn emit_into<Idx: ArrayIndex>(
        &self,
        buf: &mut MeshBuffer<Idx>,
    ) -> Result<Idx, BufferError> {
        let mut first = None;
        for v in &self.vertices {
            let idx = buf.push_vertex(v.position, v.normal)?;
            first.get_or_insert(idx);
        }
        // rings always hold at least three vertices
        first.ok_or(BufferError::IndexOverflow(buf.vertex_count()))
    }
}

impl<'r> IntoIterator for &'r Ring {
    type Item = &'r RingVertex;
    type IntoIter = std::slice::Iter<'r, RingVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
