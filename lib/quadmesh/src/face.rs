use vinemesh_common::ArrayIndex;

/// A quadrilateral face.
///
/// Corners are wound counter-clockwise when seen from the outside. Each corner carries its own
/// scalar attribute (`depth`), so two faces sharing a vertex may disagree on its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face<Idx: ArrayIndex = u32> {
    pub indices: [Idx; 4],
    pub depth: [f32; 4],
}

impl<Idx: ArrayIndex> Face<Idx> {
    #[inline]
    pub fn new(indices: [Idx; 4], depth: [f32; 4]) -> Self {
        Self { indices, depth }
    }

    /// Construct a face whose corners all share one attribute value.
    #[inline]
    pub fn uniform(indices: [Idx; 4], depth: f32) -> Self {
        Self {
            indices,
            depth: [depth; 4],
        }
    }

    /// Shift every index of `self` by `offset`.
    ///
    /// Returns `None` if any shifted index overflows `Idx`.
    pub fn offset(&self, offset: Idx) -> Option<Self> {
        let mut indices = self.indices;
        for i in &mut indices {
            *i = i.checked_add(&offset)?;
        }
        Some(Self {
            indices,
            depth: self.depth,
        })
    }

    /// The largest vertex index referenced by `self`.
    #[inline]
    pub fn max_index(&self) -> Idx {
        self.indices.iter().copied().fold(Idx::zero(), |a, b| a.max(b))
    }

    /// Split `self` into two triangles sharing the `a-c` diagonal, preserving winding.
    #[inline]
    pub fn triangles(&self) -> [[Idx; 3]; 2] {
        let [a, b, c, d] = self.indices;
        [[a, b, c], [a, c, d]]
    }
}

#[cfg(test)]
mod tests {
    use super::Face;

    #[test]
    fn offset_shifts_all_corners() {
        let f = Face::<u32>::new([0, 1, 5, 4], [0.0, 0.0, 0.5, 0.5]);
        let g = f.offset(10).unwrap();
        assert_eq!(g.indices, [10, 11, 15, 14]);
        assert_eq!(g.depth, f.depth);
        assert_eq!(g.max_index(), 15);
    }

    #[test]
    fn offset_overflow() {
        let f = Face::<u8>::uniform([0, 1, 250, 4], 0.0);
        assert!(f.offset(5).is_some());
        assert!(f.offset(6).is_none());
    }

    #[test]
    fn triangles_keep_winding() {
        let f = Face::<u16>::uniform([3, 4, 5, 6], 1.0);
        assert_eq!(f.triangles(), [[3, 4, 5], [3, 5, 6]]);
    }
}
