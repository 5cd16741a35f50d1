//! Row-major 2-D container with bounds-checked access.
//!
//! Every buffer in the pipeline (decoded pixels, native glyphs, scaled glyphs)
//! is a `Grid`. Construction is fallible so that a failed reservation surfaces
//! as an error instead of aborting the process.

use std::collections::TryReserveError;
use std::ops::Index;

/// Width and height of a grid or of the visible viewport, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
}

impl Extent {
    /// Extent of `width` columns by `height` rows.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells covered by this extent.
    pub fn area(self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// Dense row-major grid of `T`.
///
/// Invariant: `cells.len() == extent.width * extent.height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    extent: Extent,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(col, row)` for every cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `TryReserveError` if storage for `width * height` cells cannot be
    /// reserved. No partially filled grid is ever returned.
    pub fn try_from_fn(
        extent: Extent,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(extent.area())?;
        for row in 0..extent.height {
            for col in 0..extent.width {
                cells.push(f(col, row));
            }
        }
        Ok(Self { extent, cells })
    }

    /// Wrap an existing row-major vector.
    ///
    /// Returns `None` when the vector length does not match the extent.
    pub fn from_vec(extent: Extent, cells: Vec<T>) -> Option<Self> {
        (cells.len() == extent.area()).then_some(Self { extent, cells })
    }

    /// Size of the grid.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.extent.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.extent.height
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        if col < self.extent.width && row < self.extent.height {
            self.cells.get(row * self.extent.width + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Clone> Grid<T> {
    /// Grid with every cell set to `value`.
    pub fn filled(extent: Extent, value: T) -> Self {
        Self {
            extent,
            cells: vec![value; extent.area()],
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Index by `(col, row)`. Panics when out of bounds; use [`Grid::get`] for
    /// coordinates that are not known to be inside the grid.
    fn index(&self, (col, row): (usize, usize)) -> &T {
        assert!(
            col < self.extent.width && row < self.extent.height,
            "grid index ({col}, {row}) out of bounds for {}x{}",
            self.extent.width,
            self.extent.height
        );
        &self.cells[row * self.extent.width + col]
    }
}
