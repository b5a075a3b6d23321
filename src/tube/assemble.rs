use quadmesh::{ArrayIndex, MeshBuffer};

use crate::{ConfigError, Error, Skeleton, SkeletonError, TubeConfig};

use super::{
    buffer_for, cap_joint, checked_cap_counts, depth_fraction, division_count, extrude_segment,
    SegmentParams,
};

/// Builds tube meshes from skeletons with a fixed, validated [TubeConfig].
///
/// Each build walks the skeleton depth-first. Every node gets a cap, and every edge a strip,
/// which are merged into a single buffer in traversal order: the strip leading to a node always
/// directly precedes that node's cap.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeBuilder {
    config: TubeConfig,
}

impl TubeBuilder {
    pub fn new(config: TubeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &TubeConfig {
        &self.config
    }

    /// The exact number of vertices and faces [Self::build] will produce for `skeleton`, or
    /// `None` if either count overflows `usize`.
    pub fn expected_counts(&self, skeleton: &Skeleton) -> Option<(usize, usize)> {
        let n = self.config.radius_segments as usize;
        let division_size = self.config.division_size(skeleton.total_length());
        let divisions = skeleton.edges().try_fold(0usize, |acc, e| {
            acc.checked_add(division_count(e.length, division_size) as usize)
        })?;
        let (cap_vertices, cap_faces) = checked_cap_counts(self.config.radius_segments)?;
        let vertices = n
            .checked_mul(divisions.checked_add(skeleton.edge_count())?)?
            .checked_add(skeleton.len().checked_mul(cap_vertices)?)?;
        let faces = n
            .checked_mul(divisions)?
            .checked_add(skeleton.len().checked_mul(cap_faces)?)?;
        Some((vertices, faces))
    }

    /// Generate the tube mesh for `skeleton`.
    ///
    /// The result is only returned once complete; on error, nothing is produced.
    ///
    /// # Errors
    ///
    /// * [`Skeleton`](Error::Skeleton) if the skeleton's lengths overflow `f32`.
    /// * [`Buffer`](Error::Buffer) if the mesh has more vertices than `Idx` can address. This is
    ///   checked before any allocation.
    pub fn build<Idx: ArrayIndex>(&self, skeleton: &Skeleton) -> Result<MeshBuffer<Idx>, Error> {
        let max_depth = skeleton.max_depth();
        let total_length = skeleton.total_length();
        if !max_depth.is_finite() || !total_length.is_finite() {
            return Err(SkeletonError::NonFiniteLength {
                total_length,
                max_depth,
            }
            .into());
        }
        let division_size = self.config.division_size(total_length);
        let span = tracing::debug_span!(
            "build_tube",
            nodes = skeleton.len(),
            max_depth,
            division_size,
            radius = self.config.radius,
            radius_segments = self.config.radius_segments,
        );
        let _enter = span.enter();

        let counts = self.expected_counts(skeleton);
        let mut acc = buffer_for::<Idx>(counts.map(|c| c.0), counts.map_or(0, |c| c.1))?;
        for visit in skeleton.depth_first() {
            let position = skeleton.position(visit.node)?;
            if let Some(parent) = visit.parent {
                let strip = extrude_segment(
                    skeleton.position(parent)?,
                    position,
                    &SegmentParams {
                        division_size,
                        radius_segments: self.config.radius_segments,
                        radius: self.config.radius,
                        start_depth: visit.parent_depth,
                        max_depth,
                    },
                )?;
                tracing::trace!(
                    %parent,
                    child = %visit.node,
                    faces = strip.face_count(),
                    "merging strip"
                );
                acc.merge(strip)?;
            }
            let cap = cap_joint(
                position,
                depth_fraction(visit.depth, max_depth),
                self.config.radius_segments,
            )?;
            tracing::trace!(node = %visit.node, "merging cap");
            acc.merge(cap)?;
        }

        debug_assert_eq!(Some((acc.vertex_count(), acc.face_count())), counts);
        tracing::debug!(
            vertices = acc.vertex_count(),
            faces = acc.face_count(),
            "built tube mesh"
        );
        Ok(acc)
    }
}

/// Validate `config` and build the tube mesh for `skeleton` with it.
pub fn build_mesh(skeleton: &Skeleton, config: &TubeConfig) -> Result<MeshBuffer, Error> {
    TubeBuilder::new(*config)?.build(skeleton)
}
