use std::hash::{Hash, Hasher};

use super::{Coordinate, Element, Shape, Result};

/// A dense array of `T`s with `N` axes, stored in row-major order.
///
/// `N` must be between 2 and 6; other ranks fail to compile when an array
/// is constructed.
///
/// A `DenseArray` owns its buffer exclusively and has no interior
/// mutability. It is not synchronised: sharing one between threads needs the
/// usual external locking.
#[derive(Debug, Clone)]
pub struct DenseArray<T, const N: usize> {
    shape: Shape<N>,
    items: Box<[T]>,
}

impl<T, const N: usize> DenseArray<T, N> {
    fn new_inner(shape: Shape<N>, items: Box<[T]>) -> Self {
        assert_eq!(shape.length(), items.len());
        tracing::trace!(dimensions = ?shape.dimensions(), total_size = shape.length(), "allocated dense array");
        Self {shape, items}
    }

    fn shape_for<C: Coordinate>(dimensions: [C; N]) -> Result<Shape<N>> {
        let limit = isize::MAX as usize / std::mem::size_of::<T>().max(1);
        Shape::bounded(dimensions, limit).map_err(|e| {
            tracing::debug!(dimensions = ?dimensions, error = %e, "rejected dense array dimensions");
            e
        })
    }

    /// Construct a `DenseArray` of the given dimensions from a function of
    /// the coordinates. `f` is called once per element, in row-major order.
    ///
    /// ```
    /// use flat_multidim::DenseArray;
    /// let a = DenseArray::from_fn([2, 3], |[x, y]| 10 * x + y).unwrap();
    /// assert_eq!(a.as_slice(), [0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<C: Coordinate>(
        dimensions: [C; N],
        f: impl FnMut([usize; N]) -> T,
    ) -> Result<Self> {
        let shape = Self::shape_for(dimensions)?;
        let items: Box<[T]> = shape.indices().map(f).collect();
        Ok(Self::new_inner(shape, items))
    }

    /// The dimensions and strides of this array.
    pub fn shape(&self) -> &Shape<N> { &self.shape }

    /// The size of every axis.
    pub fn dimensions(&self) -> [usize; N] { self.shape.dimensions() }

    /// The size of axis `axis`, or `None` if there is no such axis.
    pub fn dimension(&self, axis: usize) -> Option<usize> { self.shape.dimension(axis) }

    /// The cached suffix products used to compute offsets.
    pub fn strides(&self) -> [usize; N] { self.shape.strides() }

    /// The number of axes.
    pub const fn rank(&self) -> usize { N }

    /// The number of elements, i.e. the product of the dimensions.
    pub fn total_size(&self) -> usize { self.shape.length() }

    /// Same as [`DenseArray::total_size()`].
    pub fn len(&self) -> usize { self.items.len() }

    /// Always `false`: every axis has a positive size.
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Borrow the element at `coords`.
    pub fn get_ref<C: Coordinate>(&self, coords: [C; N]) -> Result<&T> {
        let offset = self.shape.offset(coords)?;
        Ok(&self.items[offset])
    }

    /// Mutably borrow the element at `coords`.
    pub fn get_mut<C: Coordinate>(&mut self, coords: [C; N]) -> Result<&mut T> {
        let offset = self.shape.offset(coords)?;
        Ok(&mut self.items[offset])
    }

    /// Overwrite the element at `coords` with `value`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if any coordinate is out of
    /// bounds, in which case the array is unchanged.
    ///
    /// [`Error::IndexOutOfBounds`]: super::Error::IndexOutOfBounds
    pub fn set<C: Coordinate>(&mut self, coords: [C; N], value: T) -> Result<()> {
        *self.get_mut(coords)? = value;
        Ok(())
    }

    /// Overwrite the element at `coords` with `value`, without checking the
    /// coordinates.
    ///
    /// # Safety
    ///
    /// Every coordinate must be less than the size of its axis. Otherwise
    /// the behaviour is undefined, even if the computed offset happens to be
    /// less than [`DenseArray::total_size()`].
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, coords: [usize; N], value: T) {
        let offset = self.shape.offset_unchecked(coords);
        *self.items.get_unchecked_mut(offset) = value;
    }

    /// Overwrite every element with a clone of `value`.
    pub fn fill(&mut self, value: T) where T: Clone {
        self.items.fill(value);
    }

    /// Overwrite every element with `T::default()`, e.g. `0` for numbers.
    pub fn clear(&mut self) where T: Default {
        self.items.fill_with(T::default);
    }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] { &self.items }

    /// Returns the elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns a copy of the elements in row-major order.
    pub fn to_vec(&self) -> Vec<T> where T: Clone { self.items.to_vec() }

    /// Returns the raw array elements.
    pub fn into_raw(self) -> Box<[T]> { self.items }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Iterate over the elements in row-major order, paired with their
    /// coordinates.
    ///
    /// ```
    /// use flat_multidim::DenseArray;
    /// let a = DenseArray::from_fn([2, 2], |[x, y]| x + y).unwrap();
    /// let pairs: Vec<_> = a.indexed_iter().collect();
    /// assert_eq!(pairs, [([0, 0], &0), ([0, 1], &1), ([1, 0], &1), ([1, 1], &2)]);
    /// ```
    pub fn indexed_iter(&self) -> impl Iterator<Item=([usize; N], &T)> + '_ {
        self.shape.indices().zip(self.items.iter())
    }
}

impl<T: Default, const N: usize> DenseArray<T, N> {
    /// Constructs a `DenseArray` of size `dimensions`, with every element
    /// set to `T::default()`.
    ///
    /// Fails with [`Error::InvalidDimension`] if any dimension is not
    /// positive, or if the array would not fit in memory.
    ///
    /// ```
    /// use flat_multidim::{DenseArray, Error};
    /// let a: DenseArray<i64, 2> = DenseArray::new([3, 3]).unwrap();
    /// assert_eq!(a.total_size(), 9);
    /// assert_eq!(
    ///     DenseArray::<i64, 2>::new([3, -1]),
    ///     Err(Error::InvalidDimension {axis: 1, value: -1}),
    /// );
    /// ```
    ///
    /// [`Error::InvalidDimension`]: super::Error::InvalidDimension
    pub fn new<C: Coordinate>(dimensions: [C; N]) -> Result<Self> {
        let shape = Self::shape_for(dimensions)?;
        let items: Box<[T]> = std::iter::repeat_with(T::default).take(shape.length()).collect();
        Ok(Self::new_inner(shape, items))
    }
}

impl<T: Clone, const N: usize> DenseArray<T, N> {
    /// Constructs a `DenseArray` of size `dimensions` with every element set
    /// to a clone of `value`.
    pub fn filled<C: Coordinate>(dimensions: [C; N], value: T) -> Result<Self> {
        let shape = Self::shape_for(dimensions)?;
        Ok(Self::new_inner(shape, vec![value; shape.length()].into()))
    }

    /// Returns a clone of the element at `coords`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if any coordinate is negative
    /// or not less than the size of its axis.
    ///
    /// ```
    /// use flat_multidim::{DenseArray, Error};
    /// let mut a: DenseArray<i64, 2> = DenseArray::new([3, 3]).unwrap();
    /// a.set([1, 1], 2).unwrap();
    /// assert_eq!(a.get([1, 1]), Ok(2));
    /// assert_eq!(a.get([-1, 0]), Err(Error::IndexOutOfBounds {axis: 0, index: -1, size: 3}));
    /// ```
    ///
    /// [`Error::IndexOutOfBounds`]: super::Error::IndexOutOfBounds
    pub fn get<C: Coordinate>(&self, coords: [C; N]) -> Result<T> {
        self.get_ref(coords).cloned()
    }

    /// Returns a clone of the element at `coords`, without checking the
    /// coordinates.
    ///
    /// # Safety
    ///
    /// Every coordinate must be less than the size of its axis. Otherwise
    /// the behaviour is undefined.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, coords: [usize; N]) -> T {
        let offset = self.shape.offset_unchecked(coords);
        self.items.get_unchecked(offset).clone()
    }

    /// Returns an independent copy of this array, with the same dimensions
    /// and a separately allocated buffer. Same as [`Clone::clone()`].
    pub fn copy(&self) -> Self {
        Self::new_inner(self.shape, self.items.clone())
    }
}

impl<T, const N: usize> std::convert::AsRef<[T]> for DenseArray<T, N> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T, const N: usize> std::convert::AsMut<[T]> for DenseArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<'a, T, const N: usize> IntoIterator for &'a DenseArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

/// Panics if `index` is out of bounds.
impl<T, const N: usize> std::ops::Index<[usize; N]> for DenseArray<T, N> {
    type Output = T;

    fn index(&self, index: [usize; N]) -> &T {
        match self.get_ref(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Panics if `index` is out of bounds.
impl<T, const N: usize> std::ops::IndexMut<[usize; N]> for DenseArray<T, N> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut T {
        match self.get_mut(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Two arrays are equal if they have the same dimensions and their elements
/// are the [`same()`] at every offset.
///
/// [`same()`]: Element::same()
impl<T: Element, const N: usize> PartialEq for DenseArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.shape.dimensions() == other.shape.dimensions() && self.items[..].same(&other.items[..])
    }
}

impl<T: Element, const N: usize> Eq for DenseArray<T, N> {}

impl<T: Element, const N: usize> Hash for DenseArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape.dimensions().hash(state);
        self.items[..].hash_element(state);
    }
}

// ----------------------------------------------------------------------------
