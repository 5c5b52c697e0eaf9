//! Property-based tests of the index mapping and the bulk operations.
//!
//! Each property is written once, generic over the rank, and instantiated
//! for every supported rank by `rank_properties!`.

use std::collections::hash_map::{DefaultHasher};
use std::hash::{Hash, Hasher};
use std::ops::{Range};

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError};

use crate::{DenseArray, Error, Shape};

type Outcome = std::result::Result<(), TestCaseError>;

fn to_array<T: std::fmt::Debug, const N: usize>(v: Vec<T>) -> [T; N] {
    <[T; N]>::try_from(v).unwrap()
}

fn dims<const N: usize>() -> impl Strategy<Value=[usize; N]> {
    prop::collection::vec(1usize..4, N).prop_map(to_array::<usize, N>)
}

fn dims_and_coords<const N: usize>() -> impl Strategy<Value=([usize; N], [usize; N])> {
    dims::<N>().prop_flat_map(|d| {
        let ranges: Vec<Range<usize>> = d.iter().map(|&x| 0..x).collect();
        (Just(d), ranges.prop_map(to_array::<usize, N>))
    })
}

/// Float bit patterns, with NaNs and signed zeros over-represented.
fn float_bits() -> impl Strategy<Value=u64> {
    prop_oneof![
        any::<u64>(),
        Just(0u64),
        Just(f64::NAN.to_bits()),
        0x7ff0_0000_0000_0001u64..=0x7fff_ffff_ffff_ffff,
    ]
}

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

// ----------------------------------------------------------------------------

fn check_set_then_get<const N: usize>(d: [usize; N], c: [usize; N], value: i64) -> Outcome {
    let mut a: DenseArray<i64, N> = DenseArray::new(d).unwrap();
    a.set(c, value).unwrap();
    prop_assert_eq!(a.get(c), Ok(value));
    for other in a.shape().indices() {
        if other != c { prop_assert_eq!(a.get(other), Ok(0)); }
    }
    Ok(())
}

fn check_offsets_invert<const N: usize>(d: [usize; N], c: [usize; N]) -> Outcome {
    let shape = Shape::new(d).unwrap();
    let offset = shape.offset(c).unwrap();
    prop_assert!(offset < shape.length());
    prop_assert_eq!(shape.offset_unchecked(c), offset);
    prop_assert_eq!(shape.coordinates(offset), Some(c));
    Ok(())
}

fn check_one_bad_axis<const N: usize>(
    d: [usize; N],
    c: [usize; N],
    axis: usize,
    excess: i64,
    negative: bool,
) -> Outcome {
    let a: DenseArray<f32, N> = DenseArray::new(d).unwrap();
    let mut bad = c.map(|x| x as i64);
    bad[axis] = if negative { -1 - excess } else { d[axis] as i64 + excess };
    prop_assert_eq!(
        a.get(bad),
        Err(Error::IndexOutOfBounds {axis, index: bad[axis] as i128, size: d[axis]}),
    );
    Ok(())
}

fn check_non_positive_dimension<const N: usize>(d: [usize; N], axis: usize, value: i32) -> Outcome {
    let mut bad = d.map(|x| x as i32);
    bad[axis] = value;
    prop_assert_eq!(
        DenseArray::<i8, N>::new(bad),
        Err(Error::InvalidDimension {axis, value: value as i128}),
    );
    Ok(())
}

fn check_positive_dimensions<const N: usize>(d: [usize; N]) -> Outcome {
    let a: DenseArray<i16, N> = DenseArray::new(d).unwrap();
    prop_assert_eq!(a.dimensions(), d);
    prop_assert_eq!(a.total_size(), d.iter().product::<usize>());
    prop_assert_eq!(a.len(), a.total_size());
    Ok(())
}

fn check_fill_then_clear<const N: usize>(d: [usize; N], value: i64) -> Outcome {
    let mut a: DenseArray<i64, N> = DenseArray::new(d).unwrap();
    a.fill(value);
    for c in a.shape().indices() { prop_assert_eq!(a.get(c), Ok(value)); }
    a.clear();
    for c in a.shape().indices() { prop_assert_eq!(a.get(c), Ok(0)); }
    Ok(())
}

fn check_copies<const N: usize>(d: [usize; N], c: [usize; N], value: i64) -> Outcome {
    let mut a: DenseArray<i64, N> = DenseArray::filled(d, -value).unwrap();
    let mut b = a.copy();
    prop_assert_eq!(&a, &b);
    prop_assert_eq!(hash_of(&a), hash_of(&b));
    b.set(c, value).unwrap();
    prop_assert_eq!(a.get(c), Ok(-value));
    prop_assert_ne!(&a, &b);
    a.set(c, value).unwrap();
    prop_assert_eq!(&a, &b);
    Ok(())
}

fn check_float_copies<const N: usize>(d: [usize; N], c: [usize; N], bits: u64) -> Outcome {
    let x = f64::from_bits(bits);
    let mut a: DenseArray<f64, N> = DenseArray::new(d).unwrap();
    a.set(c, x).unwrap();
    let b = a.copy();
    prop_assert_eq!(&a, &b);
    prop_assert_eq!(hash_of(&a), hash_of(&b));
    prop_assert_eq!(a.get(c).map(f64::to_bits), Ok(bits));
    // Negation flips only the sign bit, which matters unless `x` is a NaN.
    let mut flipped = a.copy();
    flipped.set(c, -x).unwrap();
    prop_assert_eq!(a == flipped, x.is_nan());
    if x.is_nan() { prop_assert_eq!(hash_of(&a), hash_of(&flipped)); }
    Ok(())
}

// ----------------------------------------------------------------------------

macro_rules! rank_properties {
    ($($name:ident: $n:literal),*) => {
        $(
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn set_then_get_round_trips((d, c) in dims_and_coords::<$n>(), value in any::<i64>()) {
                        check_set_then_get(d, c, value)?;
                    }

                    #[test]
                    fn offsets_invert((d, c) in dims_and_coords::<$n>()) {
                        check_offsets_invert(d, c)?;
                    }

                    #[test]
                    fn one_bad_axis_is_enough(
                        (d, c) in dims_and_coords::<$n>(),
                        axis in 0usize..$n,
                        excess in 0i64..4,
                        negative in any::<bool>(),
                    ) {
                        check_one_bad_axis(d, c, axis, excess, negative)?;
                    }

                    #[test]
                    fn non_positive_dimensions_are_rejected(
                        d in dims::<$n>(),
                        axis in 0usize..$n,
                        value in -5i32..=0,
                    ) {
                        check_non_positive_dimension(d, axis, value)?;
                    }

                    #[test]
                    fn positive_dimensions_are_accepted(d in dims::<$n>()) {
                        check_positive_dimensions(d)?;
                    }

                    #[test]
                    fn fill_then_clear(d in dims::<$n>(), value in any::<i64>()) {
                        check_fill_then_clear(d, value)?;
                    }

                    #[test]
                    fn copies_are_equal_and_independent((d, c) in dims_and_coords::<$n>(), value in 1i64..100) {
                        check_copies(d, c, value)?;
                    }

                    #[test]
                    fn float_copies_are_equal_and_hash_alike((d, c) in dims_and_coords::<$n>(), bits in float_bits()) {
                        check_float_copies(d, c, bits)?;
                    }
                }
            }
        )*
    };
}

rank_properties!(rank2: 2, rank3: 3, rank4: 4, rank5: 5, rank6: 6);
