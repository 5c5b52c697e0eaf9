//! Integer types that can be used as coordinates and dimensions.
//!
//! Every primitive integer type implements [`Coordinate`]. Signed types are
//! accepted so that a negative coordinate or dimension is a reportable error
//! rather than something the caller must avoid before calling.

use std::fmt::{Debug};

/// Implemented by integer types that can name a position along an axis, or
/// the size of an axis.
pub trait Coordinate: Copy + Debug {
    /// Returns `self` as a `usize`, or `None` if it is negative or too large.
    fn to_index(self) -> Option<usize>;

    /// Returns `self` widened without loss, for error reporting.
    fn widen(self) -> i128;
}

macro_rules! impl_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }

                #[inline(always)]
                fn widen(self) -> i128 { self as i128 }
            }
        )*
    };
}

impl_coordinate!(i8, i16, i32, i64, isize);
impl_coordinate!(u8, u16, u32, u64, usize);

impl Coordinate for i128 {
    #[inline(always)]
    fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }
    #[inline(always)]
    fn widen(self) -> i128 { self }
}

impl Coordinate for u128 {
    #[inline(always)]
    fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }
    // Saturates; only values past `usize::MAX` can get here, and they are
    // invalid either way.
    #[inline(always)]
    fn widen(self) -> i128 { i128::try_from(self).unwrap_or(i128::MAX) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_have_no_index() {
        assert_eq!((-1i32).to_index(), None);
        assert_eq!((-1i8).to_index(), None);
        assert_eq!(i64::MIN.to_index(), None);
    }

    #[test]
    fn non_negative_values_convert() {
        assert_eq!(0i32.to_index(), Some(0));
        assert_eq!(7u8.to_index(), Some(7));
        assert_eq!(usize::MAX.to_index(), Some(usize::MAX));
    }

    #[test]
    fn widen_is_lossless() {
        assert_eq!((-1i32).widen(), -1);
        assert_eq!(usize::MAX.widen(), usize::MAX as i128);
        assert_eq!(u128::MAX.widen(), i128::MAX);
    }
}
