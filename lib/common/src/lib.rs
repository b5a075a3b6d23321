use num_traits::{AsPrimitive, NumCast, PrimInt};

/// Trait for types which can act as indices within an array (or an array-like structure).
pub trait ArrayIndex: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {
    /// Convert an array position into this index type, if it is representable.
    #[inline]
    fn try_from_usize(n: usize) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// The array position referred to by this index.
    #[inline]
    fn as_index(self) -> usize {
        self.as_()
    }
}
impl<P> ArrayIndex for P where P: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {}
