/// Errors reported by [`DenseArray`] and [`Shape`].
///
/// [`DenseArray`]: super::DenseArray
/// [`Shape`]: super::Shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An axis size is not positive, or the array would not fit in memory.
    #[error("invalid dimension {value} for axis {axis}")]
    InvalidDimension { axis: usize, value: i128 },

    /// A coordinate lies outside `0..size` on some axis.
    #[error("coordinate {index} out of bounds for axis {axis} (valid range: 0..{size})")]
    IndexOutOfBounds { axis: usize, index: i128, size: usize },
}

/// Result type for dense array operations.
pub type Result<T> = std::result::Result<T, Error>;
