//! Human-readable rendering of a [`DenseArray`].
//!
//! The format is meant for debugging. Each row along the last axis is printed
//! as `[a, b, c]`, and the rows are grouped under one labelled heading per
//! outer axis, indented by nesting depth. Every element is printed.

use std::fmt::{self, Display, Formatter};

use super::{DenseArray};

/// The heading used for each outer axis, outermost first.
fn axis_labels(rank: usize) -> &'static [&'static str] {
    match rank {
        3 => &["Layer"],
        4 => &["Hyperlayer", "Layer"],
        5 => &["Hyperlayer", "Layer", "Sublayer"],
        6 => &["Hyperlayer", "Layer", "Sublayer", "Cell"],
        _ => &[],
    }
}

/// The return type of [`DenseArray::labelled()`].
pub struct Labelled<'a, T, const N: usize> {
    array: &'a DenseArray<T, N>,
    label: &'a str,
}

impl<T, const N: usize> DenseArray<T, N> {
    /// Returns a [`Display`]able form of `self` headed by `label` instead of
    /// `DenseArray`.
    ///
    /// ```
    /// use flat_multidim::DenseArray;
    /// let mut a: DenseArray<i64, 2> = DenseArray::new([3, 3]).unwrap();
    /// a.set([0, 0], 1).unwrap();
    /// a.set([1, 1], 2).unwrap();
    /// assert_eq!(
    ///     a.labelled("Long2DArray").to_string(),
    ///     "Long2DArray{\n [1, 0, 0]\n [0, 2, 0]\n [0, 0, 0]\n}",
    /// );
    /// ```
    pub fn labelled<'a>(&'a self, label: &'a str) -> Labelled<'a, T, N> {
        Labelled {array: self, label}
    }
}

impl<'a, T: Display, const N: usize> Display for Labelled<'a, T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let shape = self.array.shape();
        let row_length = shape.dimensions()[N - 1];
        let row_indent = if N == 2 { 1 } else { 2 * (N - 1) };
        let labels = axis_labels(N);
        writeln!(f, "{}{{", self.label)?;
        let rows = shape.indices().step_by(row_length).zip(self.array.as_slice().chunks(row_length));
        for (coords, row) in rows {
            for (depth, label) in labels.iter().enumerate() {
                // A heading starts a block when every inner axis above the
                // row is back at zero.
                if coords[depth + 1..N - 1].iter().all(|&c| c == 0) {
                    writeln!(f, "{:indent$}{} {}:", "", label, coords[depth], indent = 2 * (depth + 1))?;
                }
            }
            write!(f, "{:indent$}[", "", indent = row_indent)?;
            for (i, t) in row.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{}", t)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

impl<T: Display, const N: usize> Display for DenseArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.labelled("DenseArray").fmt(f)
    }
}

// ----------------------------------------------------------------------------
