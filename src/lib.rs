//! A pure-Rust library of flat, fixed-size, multi-dimensional arrays.
//!
//! [`DenseArray<T, N>`] represents an array of `T` with `N` axes, where `N` is
//! between 2 and 6. The `T` values are internally stored in a [`Box<[T]>`],
//! which is a dense 1-dimensional representation in row-major order (the last
//! axis varies fastest). The dimensions are fixed when the array is
//! constructed, and the suffix product of each axis is computed once and kept
//! in a [`Shape`], so that finding an element costs one multiply-add per
//! axis.
//!
//! ```
//! use flat_multidim::{DenseArray, Error};
//! let mut a: DenseArray<i64, 2> = DenseArray::new([3, 3])?;
//! a.set([0, 0], 1)?;
//! a.set([1, 1], 2)?;
//! assert_eq!(a.get([1, 1])?, 2);
//! assert_eq!(a.as_slice(), [1, 0, 0, 0, 2, 0, 0, 0, 0]);
//! assert!(matches!(a.get([3, 3]), Err(Error::IndexOutOfBounds {axis: 0, ..})));
//! # Ok::<(), Error>(())
//! ```
//!
//! Coordinates and dimensions can be given as any primitive integer type
//! (see [`Coordinate`]). Negative values are reported as errors rather than
//! being unrepresentable. The `unsafe` accessors [`DenseArray::get_unchecked()`]
//! and [`DenseArray::set_unchecked()`] skip the bounds checks and take
//! `usize` coordinates.
//!
//! Arrays are compared and hashed element by element through trait
//! [`Element`]. Floating-point elements compare by bit pattern, so an array
//! holding a NaN still equals its own copy.
//!
//! Module [`family`] names the common instantiations, e.g. [`family::Long3DArray`].

mod coord;
pub use coord::{Coordinate};

mod error;
pub use error::{Error, Result};

mod element;
pub use element::{Element};

mod shape;
pub use shape::{Shape, Indices};

mod array;
pub use array::{DenseArray};

mod display;
pub use display::{Labelled};

pub mod family;

#[cfg(test)]
mod property_tests;
