//! The mapping between N-dimensional coordinates and offsets into a dense,
//! row-major buffer.

use super::{Coordinate, Error, Result};

/// The dimensions of a [`DenseArray`], together with the cached suffix
/// products used to compute offsets.
///
/// The last axis varies fastest: the stride of axis `k` is the product of
/// the sizes of all axes after `k`, and the stride of the last axis is `1`.
///
/// ```
/// use flat_multidim::Shape;
/// let shape = Shape::new([2, 3, 4]).unwrap();
/// assert_eq!(shape.strides(), [12, 4, 1]);
/// assert_eq!(shape.length(), 24);
/// assert_eq!(shape.offset([1, 2, 3]), Ok(23));
/// ```
///
/// [`DenseArray`]: super::DenseArray
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Shape<const N: usize> {
    dimensions: [usize; N],
    strides: [usize; N],
    length: usize,
}

impl<const N: usize> Shape<N> {
    const RANK_CHECK: () = assert!(N >= 2 && N <= 6, "rank must be between 2 and 6");

    /// Constructs a `Shape` with the given axis sizes.
    ///
    /// Fails with [`Error::InvalidDimension`] for the first axis whose size
    /// is not positive, or at which the number of elements would exceed
    /// `isize::MAX`.
    pub fn new<C: Coordinate>(dimensions: [C; N]) -> Result<Self> {
        Self::bounded(dimensions, isize::MAX as usize)
    }

    /// Like [`Shape::new()`] but with a caller-supplied limit on
    /// [`Shape::length()`].
    pub(crate) fn bounded<C: Coordinate>(dimensions: [C; N], limit: usize) -> Result<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::RANK_CHECK;
        let mut sizes = [0; N];
        for (axis, &d) in dimensions.iter().enumerate() {
            sizes[axis] = match d.to_index() {
                Some(size) if size > 0 => size,
                _ => return Err(Error::InvalidDimension {axis, value: d.widen()}),
            };
        }
        let mut strides = [1; N];
        let mut length: usize = 1;
        for axis in (0..N).rev() {
            strides[axis] = length;
            length = length.checked_mul(sizes[axis])
                .filter(|&l| l <= limit)
                .ok_or(Error::InvalidDimension {axis, value: dimensions[axis].widen()})?;
        }
        Ok(Self {dimensions: sizes, strides, length})
    }

    /// The number of axes.
    pub const fn rank(&self) -> usize { N }

    /// The size of every axis.
    pub fn dimensions(&self) -> [usize; N] { self.dimensions }

    /// The size of axis `axis`, or `None` if there is no such axis.
    pub fn dimension(&self, axis: usize) -> Option<usize> { self.dimensions.get(axis).copied() }

    /// The suffix product of every axis.
    pub fn strides(&self) -> [usize; N] { self.strides }

    /// The total number of elements, i.e. the product of the dimensions.
    pub fn length(&self) -> usize { self.length }

    /// Returns the offset of `coords`, checking every axis.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] for the first axis on which
    /// the coordinate is negative or not less than the axis size.
    pub fn offset<C: Coordinate>(&self, coords: [C; N]) -> Result<usize> {
        let mut offset = 0;
        for (axis, &c) in coords.iter().enumerate() {
            let size = self.dimensions[axis];
            match c.to_index() {
                Some(index) if index < size => { offset += index * self.strides[axis]; },
                _ => return Err(Error::IndexOutOfBounds {axis, index: c.widen(), size}),
            }
        }
        Ok(offset)
    }

    /// Returns the offset of `coords` without checking them.
    ///
    /// The result is only meaningful if every coordinate is in bounds.
    #[inline(always)]
    pub fn offset_unchecked(&self, coords: [usize; N]) -> usize {
        coords.iter().zip(&self.strides).map(|(c, s)| c * s).sum()
    }

    /// The inverse of [`Shape::offset()`]. Returns `None` if `offset` is not
    /// less than [`Shape::length()`].
    pub fn coordinates(&self, offset: usize) -> Option<[usize; N]> {
        if offset >= self.length { return None; }
        let mut coords = [0; N];
        let mut rest = offset;
        for (c, &stride) in coords.iter_mut().zip(&self.strides) {
            *c = rest / stride;
            rest %= stride;
        }
        Some(coords)
    }

    /// Returns every valid coordinate tuple in row-major order.
    ///
    /// ```
    /// use flat_multidim::Shape;
    /// let shape = Shape::new([2, 2]).unwrap();
    /// let all: Vec<_> = shape.indices().collect();
    /// assert_eq!(all, [[0, 0], [0, 1], [1, 0], [1, 1]]);
    /// ```
    pub fn indices(&self) -> Indices<N> {
        Indices {dimensions: self.dimensions, next: Some([0; N]), remaining: self.length}
    }

    /// Equivalent to, but often more convenient than,
    /// ```text
    /// for c in self.indices() { f(c); }
    /// ```
    pub fn each(&self, mut f: impl FnMut([usize; N])) {
        for coords in self.indices() { f(coords); }
    }
}

// ----------------------------------------------------------------------------

/// The return type of [`Shape::indices()`].
#[derive(Debug, Clone)]
pub struct Indices<const N: usize> {
    dimensions: [usize; N],
    next: Option<[usize; N]>,
    remaining: usize,
}

impl<const N: usize> Iterator for Indices<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut coords = current;
        let mut axis = N;
        self.next = loop {
            if axis == 0 { break None; }
            axis -= 1;
            coords[axis] += 1;
            if coords[axis] < self.dimensions[axis] { break Some(coords); }
            coords[axis] = 0;
        };
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<const N: usize> ExactSizeIterator for Indices<N> {}

impl<const N: usize> std::iter::FusedIterator for Indices<N> {}

// ----------------------------------------------------------------------------
