use std::ops::{Index, IndexMut};

/// Fixed-size, row-major grid addressed as `[(x, y)]`.
/// Out-of-range access panics like slice indexing does.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Array2D<T> {
    /// Builds a `width` x `height` grid, calling `init(x, y)` once per cell.
    pub fn new<F>(width: usize, height: usize, mut init: F) -> Array2D<T>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                data.push(init(x, y));
            }
        }
        Array2D { width, height, data }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Array2D index ({}, {}) out of bounds for {}x{} table",
            x,
            y,
            self.width,
            self.height
        );
        x * self.height + y
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.data[self.offset(x, y)]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let ix = self.offset(x, y);
        &mut self.data[ix]
    }
}
