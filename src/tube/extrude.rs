use nalgebra::Point3;
use quadmesh::{ArrayIndex, MeshBuffer};

use crate::{Error, Frame, Ring};

use super::{buffer_for, depth_fraction, quad};

/// Everything needed to extrude one edge, besides its end points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentParams {
    /// Target length of each division along the edge.
    pub division_size: f32,
    pub radius_segments: u32,
    pub radius: f32,
    /// Distance from the skeleton root to the start of the edge.
    pub start_depth: f32,
    /// Length of the longest root-to-leaf path of the skeleton.
    pub max_depth: f32,
}

/// The number of divisions along an edge of the given length.
///
/// At least 1 for any edge with nonzero length, however short, and 0 for zero-length (or
/// non-finite) edges. A non-positive `division_size` yields a single division.
pub fn division_count(length: f32, division_size: f32) -> u32 {
    if !length.is_finite() || length <= 0.0 {
        0
    } else if !division_size.is_finite() || division_size <= 0.0 {
        1
    } else {
        ((length / division_size).ceil() as u32).max(1)
    }
}

/// Extrude a tube strip along the edge `a -> b`.
///
/// Emits `divisions + 1` rings, and `radius_segments` quads between each pair of consecutive
/// rings. Quads are wound to face outward, and their depth attribute follows the distance from the
/// root along the edge.
///
/// A zero-length edge yields a single ring at `a` and no faces.
pub fn extrude_segment<Idx: ArrayIndex>(
    a: &Point3<f32>,
    b: &Point3<f32>,
    params: &SegmentParams,
) -> Result<MeshBuffer<Idx>, Error> {
    let length = nalgebra::distance(a, b);
    let n = params.radius_segments as usize;

    let (divisions, frame) = match (
        division_count(length, params.division_size),
        Frame::between(a, b),
    ) {
        (d, Some(frame)) if d > 0 => (d, frame),
        _ => {
            tracing::debug!(?a, ?b, length, "absorbing zero-length edge");
            let mut buf = buffer_for::<Idx>(Some(n), 0)?;
            Ring::new(*a, &Frame::default(), params.radius_segments, params.radius)?
                .emit_into(&mut buf)?;
            return Ok(buf);
        }
    };

    let rings = divisions as usize + 1;
    let mut buf = buffer_for::<Idx>(n.checked_mul(rings), n.saturating_mul(rings - 1))?;
    let mut prev: Option<(usize, f32)> = None;
    for d in 0..=divisions {
        let fraction = d as f32 / divisions as f32;
        let center = Point3::from(a.coords.lerp(&b.coords, fraction));
        let cur = Ring::new(center, &frame, params.radius_segments, params.radius)?
            .emit_into(&mut buf)?
            .as_index();
        let depth = depth_fraction(params.start_depth + fraction * length, params.max_depth);
        if let Some((prev, prev_depth)) = prev {
            for i in 0..n {
                let j = (i + 1) % n;
                buf.push_face(quad(
                    [prev + i, cur + i, cur + j, prev + j],
                    [prev_depth, depth, depth, prev_depth],
                )?)?;
            }
        }
        prev = Some((cur, depth));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    fn params(division_size: f32, radius_segments: u32) -> SegmentParams {
        SegmentParams {
            division_size,
            radius_segments,
            radius: 1.0,
            start_depth: 0.0,
            max_depth: 10.0,
        }
    }

    #[test]
    fn divisions() {
        assert_eq!(division_count(10.0, 10.0), 1);
        assert_eq!(division_count(10.0, 3.0), 4);
        assert_eq!(division_count(0.5, 3.0), 1);
        assert_eq!(division_count(0.0, 3.0), 0);
        assert_eq!(division_count(1e-7, 1e-7), 1);
        assert_eq!(division_count(1e-30, 1.0), 1);
        assert_eq!(division_count(5.0, 0.0), 1);
        assert_eq!(division_count(f32::NAN, 1.0), 0);
    }

    #[test]
    fn single_division() {
        let m: MeshBuffer =
            extrude_segment(&point![0.0, 0.0, 0.0], &point![10.0, 0.0, 0.0], &params(10.0, 4))
                .unwrap();
        assert_eq!(m.vertex_count(), 8);
        assert_eq!(m.face_count(), 4);
        assert_eq!(m.faces()[0].indices, [0, 4, 5, 1]);
        assert_eq!(m.faces()[3].indices, [3, 7, 4, 0]);
        for f in m.faces() {
            assert_eq!(f.depth, [0.0, 1.0, 1.0, 0.0]);
        }
        for p in &m.positions()[..4] {
            assert_eq!(p.x, 0.0);
        }
        for p in &m.positions()[4..] {
            assert_eq!(p.x, 10.0);
        }
        m.validate().unwrap();
    }

    #[test]
    fn faces_point_outward() {
        let (a, b) = (point![1.0, 2.0, 3.0], point![-4.0, 6.0, 0.5]);
        let m: MeshBuffer = extrude_segment(&a, &b, &params(2.0, 6)).unwrap();
        for (f, n) in m.faces().iter().zip(m.face_normals()) {
            let centroid = f
                .indices
                .iter()
                .map(|&i| m.positions()[i as usize].coords)
                .sum::<nalgebra::Vector3<f32>>()
                / 4.0;
            // direction from the axis to the face centroid
            let t = (b - a).normalize();
            let radial = (centroid - a.coords) - t * (centroid - a.coords).dot(&t);
            assert!(n.dot(&radial) > 0.0);
        }
    }

    #[test]
    fn depth_offset_and_monotonic() {
        let p = SegmentParams {
            start_depth: 4.0,
            max_depth: 8.0,
            ..params(1.0, 3)
        };
        let m: MeshBuffer =
            extrude_segment(&point![0.0, 0.0, 0.0], &point![0.0, 4.0, 0.0], &p).unwrap();
        assert_eq!(m.vertex_count(), 3 * 5);
        assert_eq!(m.face_count(), 3 * 4);
        assert_eq!(m.faces()[0].depth[0], 0.5);
        assert_eq!(m.faces().last().unwrap().depth[1], 1.0);
        for w in m.faces().windows(2) {
            assert!(w[0].depth[1] <= w[1].depth[1]);
        }
    }

    #[test]
    fn zero_length_edge() {
        let p = point![2.0, 2.0, 2.0];
        let m: MeshBuffer = extrude_segment(&p, &p, &params(0.0, 5)).unwrap();
        assert_eq!(m.vertex_count(), 5);
        assert_eq!(m.face_count(), 0);
        m.validate().unwrap();
    }

    #[test]
    fn tiny_edge_still_extrudes() {
        let p = SegmentParams {
            division_size: 1e-7,
            radius_segments: 4,
            radius: 1e-8,
            start_depth: 0.0,
            max_depth: 1e-7,
        };
        let m: MeshBuffer =
            extrude_segment(&point![0.0, 0.0, 0.0], &point![1e-7, 0.0, 0.0], &p).unwrap();
        assert_eq!(m.vertex_count(), 8);
        assert_eq!(m.face_count(), 4);
        for f in m.faces() {
            assert_eq!(f.depth[0], 0.0);
            assert!((f.depth[1] - 1.0).abs() < 1e-6);
        }
        m.validate().unwrap();
    }

    #[test]
    fn huge_ring_count_fails_before_allocating() {
        let res = extrude_segment::<u16>(
            &point![0.0, 0.0, 0.0],
            &point![1.0, 0.0, 0.0],
            &params(1.0, 1_000_000),
        );
        assert!(matches!(
            res,
            Err(Error::Buffer(quadmesh::BufferError::IndexOverflow(_)))
        ));
    }

    #[test]
    fn small_index_type_overflows() {
        let res = extrude_segment::<u8>(
            &point![0.0, 0.0, 0.0],
            &point![100.0, 0.0, 0.0],
            &params(1.0, 8),
        );
        assert!(matches!(
            res,
            Err(Error::Buffer(quadmesh::BufferError::IndexOverflow(_)))
        ));
    }
}
