use nalgebra::{Point3, Vector3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<f32>,
    pub maxs: Point3<f32>,
}

impl Aabb {
    #[inline]
    pub fn new(mins: Point3<f32>, maxs: Point3<f32>) -> Self {
        Self { mins, maxs }
    }

    /// A degenerate box enclosing only `p`.
    #[inline]
    pub fn from_point(p: Point3<f32>) -> Self {
        Self { mins: p, maxs: p }
    }

    /// The smallest box enclosing every point of `points`, or `None` if there are none.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<f32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut res = Self::from_point(*points.next()?);
        for p in points {
            res.grow_to(p);
        }
        Some(res)
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f32>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Edge lengths of `self` along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<f32> {
        self.maxs - self.mins
    }

    /// Enlarge `self` until it contains `p`.
    #[inline]
    pub fn grow_to(&mut self, p: &Point3<f32>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// The smallest box enclosing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::Aabb;

    #[test]
    fn from_points() {
        let pts = [point![1.0, -2.0, 3.0], point![-1.0, 4.0, 0.0]];
        let bb = Aabb::from_points(&pts).unwrap();
        assert_eq!(bb.mins, point![-1.0, -2.0, 0.0]);
        assert_eq!(bb.maxs, point![1.0, 4.0, 3.0]);
        assert_eq!(bb.center(), point![0.0, 1.0, 1.5]);
        assert!(bb.contains(&point![0.0, 0.0, 0.0]));
        assert!(!bb.contains(&point![0.0, 5.0, 0.0]));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn union() {
        let a = Aabb::from_point(point![0.0, 0.0, 0.0]);
        let b = Aabb::from_point(point![2.0, 2.0, -2.0]);
        let u = a.union(&b);
        assert_eq!(u.extents(), nalgebra::vector![2.0, 2.0, 2.0]);
    }
}
