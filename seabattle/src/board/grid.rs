// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Defines the grid that backs both the ship boards and the tracking board.

use std::ops::{Index, IndexMut};

use crate::board::{Coordinate, Dimensions};

/// Flat cell storage for a square board, indexed by [`Coordinate`].
#[derive(Debug, Clone)]
pub struct Grid<T> {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells that make up this grid, row-major.
    cells: Box<[T]>,
}

impl<T: Default> Grid<T> {
    /// Construct a grid with every cell at its default value.
    pub fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }
}

impl<T> Grid<T> {
    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub fn get(&self, coord: Coordinate) -> Option<&T> {
        self.dim.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub fn get_mut(&mut self, coord: Coordinate) -> Option<&mut T> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Get an iterator over rows of this grid, starting at `y = 0`.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = &'a T>> {
        self.cells.chunks(self.dim.size()).map(|row| row.iter())
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
