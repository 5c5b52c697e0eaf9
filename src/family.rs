//! Named aliases of [`DenseArray`] for each element type and rank.
//!
//! ```
//! use flat_multidim::family::{Float3DArray, Generic2DArray};
//! let mut a = Float3DArray::new([2, 2, 2]).unwrap();
//! a.set([1, 0, 1], 0.5).unwrap();
//! assert_eq!(a.get([1, 0, 1]), Ok(0.5));
//! let b: Generic2DArray<Option<&str>> = Generic2DArray::new([2, 2]).unwrap();
//! assert_eq!(b.get([0, 1]), Ok(None));
//! ```

use super::{DenseArray};

macro_rules! dense_family {
    ($t:ty, $label:literal: $two:ident, $three:ident, $four:ident, $five:ident, $six:ident) => {
        #[doc = concat!("A 2-dimensional array of `", $label, "`.")]
        pub type $two = DenseArray<$t, 2>;
        #[doc = concat!("A 3-dimensional array of `", $label, "`.")]
        pub type $three = DenseArray<$t, 3>;
        #[doc = concat!("A 4-dimensional array of `", $label, "`.")]
        pub type $four = DenseArray<$t, 4>;
        #[doc = concat!("A 5-dimensional array of `", $label, "`.")]
        pub type $five = DenseArray<$t, 5>;
        #[doc = concat!("A 6-dimensional array of `", $label, "`.")]
        pub type $six = DenseArray<$t, 6>;
    };
}

dense_family!(i8, "i8": Byte2DArray, Byte3DArray, Byte4DArray, Byte5DArray, Byte6DArray);
dense_family!(i16, "i16": Short2DArray, Short3DArray, Short4DArray, Short5DArray, Short6DArray);
dense_family!(i64, "i64": Long2DArray, Long3DArray, Long4DArray, Long5DArray, Long6DArray);
dense_family!(f32, "f32": Float2DArray, Float3DArray, Float4DArray, Float5DArray, Float6DArray);
dense_family!(f64, "f64": Double2DArray, Double3DArray, Double4DArray, Double5DArray, Double6DArray);

pub type Generic2DArray<T> = DenseArray<T, 2>;
pub type Generic3DArray<T> = DenseArray<T, 3>;
pub type Generic4DArray<T> = DenseArray<T, 4>;
pub type Generic5DArray<T> = DenseArray<T, 5>;
pub type Generic6DArray<T> = DenseArray<T, 6>;

// ----------------------------------------------------------------------------
