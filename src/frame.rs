//! Per-edge reference frames.

use nalgebra::{Point3, Unit, Vector3};

/// An orthonormal basis oriented along a skeleton edge.
///
/// Frames are derived from the edge tangent alone, never from neighbouring edges, so a tube's
/// cross-section may rotate abruptly where two edges meet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub tangent: Unit<Vector3<f32>>,
    pub normal: Unit<Vector3<f32>>,
    pub binormal: Unit<Vector3<f32>>,
}

impl Default for Frame {
    /// The frame for a tangent along +Z.
    fn default() -> Self {
        Self {
            tangent: Vector3::z_axis(),
            normal: Unit::new_unchecked(-Vector3::y()),
            binormal: Unit::new_unchecked(-Vector3::x()),
        }
    }
}

impl Frame {
    /// Construct the frame for a tangent direction, or `None` if `tangent` is zero or
    /// non-finite. Short tangents are fine, whatever their scale.
    pub fn from_tangent(tangent: &Vector3<f32>) -> Option<Self> {
        if !tangent.iter().all(|c| c.is_finite()) {
            return None;
        }
        let tangent = Unit::try_new(*tangent, 0.0)?;
        let t = tangent.into_inner();
        let intermediate = t.cross(&seed_axis(&t)).try_normalize(f32::EPSILON)?;
        let normal = Unit::new_normalize(t.cross(&intermediate));
        let binormal = Unit::new_normalize(normal.into_inner().cross(&t));
        Some(Self {
            tangent,
            normal,
            binormal,
        })
    }

    /// [Self::from_tangent] for the direction `a -> b`.
    #[inline]
    pub fn between(a: &Point3<f32>, b: &Point3<f32>) -> Option<Self> {
        Self::from_tangent(&(b - a))
    }
}

/// The world axis least aligned with `tangent`. Ties go to the later axis.
fn seed_axis(tangent: &Vector3<f32>) -> Vector3<f32> {
    let [x, y, z] = [tangent.x.abs(), tangent.y.abs(), tangent.z.abs()];
    if z <= x && z <= y {
        Vector3::z()
    } else if y <= x {
        Vector3::y()
    } else {
        Vector3::x()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::vector;

    use super::*;

    fn assert_orthonormal(f: &Frame) {
        for (a, b) in [
            (f.tangent, f.normal),
            (f.tangent, f.binormal),
            (f.normal, f.binormal),
        ] {
            assert!(a.dot(&*b).abs() < 1e-5, "{a:?} . {b:?}");
        }
        for v in [f.tangent, f.normal, f.binormal] {
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn orthonormal_for_many_directions() {
        for t in [
            vector![1.0, 0.0, 0.0],
            vector![0.0, -3.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![-2.0, 0.5, 7.0],
            vector![1e-3, 1.0, -1e-3],
        ] {
            let f = Frame::from_tangent(&t).unwrap();
            assert!((f.tangent.into_inner() - t.normalize()).norm() < 1e-6);
            assert_orthonormal(&f);
        }
    }

    #[test]
    fn seed_ties_prefer_later_axis() {
        assert_eq!(seed_axis(&vector![0.0, 0.0, 1.0]), Vector3::y());
        assert_eq!(seed_axis(&vector![1.0, 0.0, 0.0]), Vector3::z());
        assert_eq!(seed_axis(&vector![1.0, 1.0, 1.0]), Vector3::z());
        assert_eq!(seed_axis(&vector![0.1, 1.0, 1.0]), Vector3::x());
    }

    #[test]
    fn default_matches_z_tangent() {
        let f = Frame::from_tangent(&Vector3::z()).unwrap();
        let d = Frame::default();
        assert!((f.normal.into_inner() - d.normal.into_inner()).norm() < 1e-6);
        assert!((f.binormal.into_inner() - d.binormal.into_inner()).norm() < 1e-6);
        assert_orthonormal(&d);
    }

    #[test]
    fn degenerate_tangent() {
        assert!(Frame::from_tangent(&Vector3::zeros()).is_none());
        assert!(Frame::from_tangent(&vector![f32::NAN, 0.0, 0.0]).is_none());
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Frame::between(&p, &p).is_none());
    }

    #[test]
    fn tiny_tangent() {
        let f = Frame::from_tangent(&vector![1e-7, 0.0, 0.0]).unwrap();
        assert!((f.tangent.into_inner() - Vector3::x()).norm() < 1e-6);
        assert_orthonormal(&f);
        assert!(Frame::between(&Point3::origin(), &Point3::new(0.0, 0.0, 1e-20)).is_some());
    }

    #[test]
    fn independent_of_length() {
        let a = Frame::from_tangent(&vector![0.3, -0.4, 1.2]).unwrap();
        let b = Frame::from_tangent(&vector![3.0, -4.0, 12.0]).unwrap();
        assert!((a.normal.into_inner() - b.normal.into_inner()).norm() < 1e-5);
    }
}
