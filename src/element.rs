//! Element-wise equality and hashing for the contents of a [`DenseArray`].
//!
//! [`Element`] is implemented for every primitive type, for strings, and for
//! `Option`s, boxes, references, slices, arrays, `Vec`s and small tuples of
//! `Element`s. Floating-point numbers compare by bit pattern, like their
//! representation in memory: every NaN equals every other NaN, and `0.0` is
//! not equal to `-0.0`. This makes equality reflexive, so an array always
//! equals its own copy, and lets float arrays be hashed.
//!
//! If you want to store your own type in a [`DenseArray`] and compare arrays
//! of it, implement `Element` for it. For a type that implements [`Eq`] and
//! [`Hash`], the macro [`impl_element`] does this for you.
//!
//! ```
//! use flat_multidim::{DenseArray, impl_element};
//!
//! #[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
//! struct Tile(u8);
//! impl_element!(Tile);
//!
//! let a: DenseArray<Tile, 2> = DenseArray::new([2, 2]).unwrap();
//! assert_eq!(a, a.copy());
//! ```
//!
//! [`DenseArray`]: super::DenseArray
//! [`impl_element`]: crate::impl_element

use std::hash::{Hash, Hasher};

/// Implemented by types that can be compared and hashed as elements of a
/// [`DenseArray`].
///
/// `same()` must be an equivalence relation, and `hash_element()` must feed
/// the same data to `state` for any two values that are the `same()`.
///
/// [`DenseArray`]: super::DenseArray
pub trait Element {
    /// Returns `true` if `self` and `other` are interchangeable.
    fn same(&self, other: &Self) -> bool;

    /// Feeds `self` into `state`, consistently with [`Element::same()`].
    fn hash_element<H: Hasher>(&self, state: &mut H);
}

/// Implement [`Element`] for types that implement [`Eq`] and [`Hash`], using
/// those traits.
///
/// ```
/// use flat_multidim::{Element, impl_element};
///
/// #[derive(PartialEq, Eq, Hash)]
/// enum Terrain { Grass, Water }
/// impl_element!(Terrain);
///
/// assert!(Terrain::Grass.same(&Terrain::Grass));
/// assert!(!Terrain::Grass.same(&Terrain::Water));
/// ```
#[macro_export]
macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::Element for $t {
                #[inline(always)]
                fn same(&self, other: &Self) -> bool { self == other }

                #[inline(always)]
                fn hash_element<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(self, state)
                }
            }
        )*
    };
}

impl_element!((), bool, char, str, String);
impl_element!(i8, i16, i32, i64, i128, isize);
impl_element!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_element_for_float {
    ($($t:ident),*) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn same(&self, other: &Self) -> bool {
                    let bits = |x: $t| if x.is_nan() { $t::NAN.to_bits() } else { x.to_bits() };
                    bits(*self) == bits(*other)
                }

                #[inline(always)]
                fn hash_element<H: Hasher>(&self, state: &mut H) {
                    let bits = if self.is_nan() { $t::NAN.to_bits() } else { self.to_bits() };
                    bits.hash(state);
                }
            }
        )*
    };
}

impl_element_for_float!(f32, f64);

// ----------------------------------------------------------------------------

impl<T: Element + ?Sized> Element for &T {
    fn same(&self, other: &Self) -> bool { (**self).same(*other) }
    fn hash_element<H: Hasher>(&self, state: &mut H) { (**self).hash_element(state) }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn same(&self, other: &Self) -> bool { (**self).same(&**other) }
    fn hash_element<H: Hasher>(&self, state: &mut H) { (**self).hash_element(state) }
}

impl<T: Element> Element for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(t) => { state.write_u8(1); t.hash_element(state); },
            None => { state.write_u8(0); },
        }
    }
}

impl<T: Element> Element for [T] {
    fn same(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same(b))
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for t in self { t.hash_element(state); }
    }
}

impl<T: Element, const M: usize> Element for [T; M] {
    fn same(&self, other: &Self) -> bool { self[..].same(&other[..]) }
    fn hash_element<H: Hasher>(&self, state: &mut H) { self[..].hash_element(state) }
}

impl<T: Element> Element for Vec<T> {
    fn same(&self, other: &Self) -> bool { self[..].same(&other[..]) }
    fn hash_element<H: Hasher>(&self, state: &mut H) { self[..].hash_element(state) }
}

impl<A: Element, B: Element> Element for (A, B) {
    fn same(&self, other: &Self) -> bool { self.0.same(&other.0) && self.1.same(&other.1) }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.0.hash_element(state);
        self.1.hash_element(state);
    }
}

impl<A: Element, B: Element, C: Element> Element for (A, B, C) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1) && self.2.same(&other.2)
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        self.0.hash_element(state);
        self.1.hash_element(state);
        self.2.hash_element(state);
    }
}

// ----------------------------------------------------------------------------
