//! Tube generation parameters.

/// The fewest vertices a tube ring may have.
pub const MIN_RADIUS_SEGMENTS: u32 = 3;

/// Errors caused by invalid [TubeConfig] values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Rings need at least {MIN_RADIUS_SEGMENTS} vertices, got {0}")]
    TooFewRadiusSegments(u32),
    #[error("Tube radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("Target segment count must be at least 1")]
    ZeroSegmentCount,
    #[error("Growth must lie within 0..=1, got {0}")]
    GrowthOutOfRange(f32),
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
}

/// Controls the shape and resolution of generated tubes.
///
/// Missing fields take their [default](TubeConfig::default) values when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TubeConfig {
    /// Tube radius.
    pub radius: f32,
    /// Vertices per ring.
    pub radius_segments: u32,
    /// Approximate number of tube divisions across the whole skeleton.
    pub target_segment_count: u32,
    /// Fraction of faces to reveal, ordered by depth. Only affects
    /// [MeshBuffer::grown_face_count](quadmesh::MeshBuffer::grown_face_count).
    pub growth: f32,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            radius_segments: 8,
            target_segment_count: 64,
            growth: 1.0,
        }
    }
}

impl TubeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() {
            return Err(ConfigError::NonFinite("radius"));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.radius_segments < MIN_RADIUS_SEGMENTS {
            return Err(ConfigError::TooFewRadiusSegments(self.radius_segments));
        }
        if self.target_segment_count == 0 {
            return Err(ConfigError::ZeroSegmentCount);
        }
        if !self.growth.is_finite() {
            return Err(ConfigError::NonFinite("growth"));
        }
        if !(0.0..=1.0).contains(&self.growth) {
            return Err(ConfigError::GrowthOutOfRange(self.growth));
        }
        Ok(())
    }

    /// The length of one tube division for a skeleton whose edges sum to `total_length`.
    ///
    /// Zero if `total_length` is zero.
    #[inline]
    pub fn division_size(&self, total_length: f32) -> f32 {
        total_length / self.target_segment_count as f32
    }
}
