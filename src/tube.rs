//! Tube mesh generation: strips along skeleton edges, and caps over the joints between them.

mod assemble;
mod cap;
mod extrude;

pub use assemble::*;
pub use cap::*;
pub use extrude::*;

use quadmesh::{ArrayIndex, BufferError, Face, MeshBuffer};

/// Normalize a distance from the root by the length of the longest root-to-leaf path.
///
/// Always within `0.0..=1.0`; zero for skeletons without length, and for non-finite inputs.
#[inline]
pub fn depth_fraction(depth: f32, max_depth: f32) -> f32 {
    if !max_depth.is_finite() || max_depth <= 0.0 || depth.is_nan() {
        return 0.0;
    }
    (depth / max_depth).clamp(0.0, 1.0)
}

/// An empty buffer with room for `vertices` vertices and `faces` faces.
///
/// Fails without allocating if `vertices` is `None` (its computation overflowed) or if the last
/// vertex couldn't be addressed by `Idx`.
fn buffer_for<Idx: ArrayIndex>(
    vertices: Option<usize>,
    faces: usize,
) -> Result<MeshBuffer<Idx>, BufferError> {
    let vertices = vertices.ok_or(BufferError::IndexOverflow(usize::MAX))?;
    if let Some(last) = vertices.checked_sub(1) {
        Idx::try_from_usize(last).ok_or(BufferError::IndexOverflow(last))?;
    }
    Ok(MeshBuffer::with_capacity(vertices, faces))
}

/// Build a face from buffer-local vertex indices.
fn quad<Idx: ArrayIndex>(indices: [usize; 4], depth: [f32; 4]) -> Result<Face<Idx>, BufferError> {
    let mut res = [Idx::zero(); 4];
    for (out, i) in res.iter_mut().zip(indices) {
        *out = Idx::try_from_usize(i).ok_or(BufferError::IndexOverflow(i))?;
    }
    Ok(Face::new(res, depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_bounds() {
        assert_eq!(depth_fraction(5.0, 10.0), 0.5);
        assert_eq!(depth_fraction(10.0, 10.0), 1.0);
        assert_eq!(depth_fraction(10.5, 10.0), 1.0);
        assert_eq!(depth_fraction(0.0, 0.0), 0.0);
        assert_eq!(depth_fraction(3.0, 0.0), 0.0);
        assert_eq!(depth_fraction(f32::INFINITY, f32::INFINITY), 0.0);
        assert_eq!(depth_fraction(f32::NAN, 10.0), 0.0);
        assert_eq!(depth_fraction(f32::INFINITY, 10.0), 1.0);
    }

    #[test]
    fn buffer_for_checks_before_allocating() {
        assert!(buffer_for::<u8>(Some(256), 0).is_ok());
        assert!(matches!(
            buffer_for::<u8>(Some(257), 0),
            Err(BufferError::IndexOverflow(256))
        ));
        assert!(matches!(
            buffer_for::<u16>(Some(usize::MAX), usize::MAX),
            Err(BufferError::IndexOverflow(_))
        ));
        assert!(matches!(
            buffer_for::<u64>(None, 0),
            Err(BufferError::IndexOverflow(usize::MAX))
        ));
        assert!(buffer_for::<u8>(Some(0), 0).unwrap().is_empty());
    }

    #[test]
    fn quad_overflow() {
        assert!(quad::<u8>([0, 1, 255, 3], [0.0; 4]).is_ok());
        assert!(matches!(
            quad::<u8>([0, 1, 256, 3], [0.0; 4]),
            Err(BufferError::IndexOverflow(256))
        ));
    }
}
