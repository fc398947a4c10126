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
//! Square board dimensions, adapted for boards whose side is chosen at game start.
use std::ops::RangeInclusive;

use crate::board::Coordinate;

/// Range of board sizes a game may be configured with.
pub const BOARD_SIZE_RANGE: RangeInclusive<usize> = 10..=1000;

/// Dimensions of a square board. Implements the methods needed for the board to check
/// bounds, linearize indexes, and compute neighbor cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Length of each side of the board.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified side length.
    /// Panics if `size` is 0 or if the board would not be addressable by a [`Coordinate`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero"),
            None => panic!("Dimensions too large: {}x{}", size, size),
        }
    }

    /// Create new [`Dimensions`] with the specified side length. Returns `None` if `size`
    /// is 0, does not fit a coordinate axis, or `size * size` overflows.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || size > i32::MAX as usize {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Get the side length of these [`Dimensions`].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check whether the coordinate lies within `[0, size)` on both axes.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.size && (coord.y as usize) < self.size
    }

    /// Convert a coordinate to a row-major linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }

    /// Get back a coordinate from a linearized index. Panics if idx is >= total_size.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(idx < self.total_size(), "index {} out of bounds for {:?}", idx, self);
        Coordinate::new((idx % self.size) as i32, (idx / self.size) as i32)
    }

    /// Iterate the in-bounds orthogonal neighbors of the given coordinate. An
    /// out-of-bounds coordinate has no neighbors.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors {
            dim: *self,
            coord,
            // If the coordinate is out of bounds, skip directly to the End state so we
            // don't have to check its own bounds every iteration.
            step: if self.contains(coord) {
                NeighborStep::Right
            } else {
                NeighborStep::End
            },
        }
    }

    /// Get an iterator over rows of this grid, starting at `y = 0`. Each row is an
    /// iterator over the coordinates of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size as i32;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Get an iterator over every coordinate, in row-major order.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        (0..self.total_size()).map(move |idx| dim.un_linearize(idx))
    }
}

impl Default for Dimensions {
    /// Construct the smallest allowed board, 10x10.
    fn default() -> Self {
        Self {
            size: *BOARD_SIZE_RANGE.start(),
        }
    }
}

/// Iterator over the neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    coord: Coordinate,
    step: NeighborStep,
}

#[derive(Debug, Copy, Clone)]
enum NeighborStep {
    Right,
    Left,
    Down,
    Up,
    End,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            let (candidate, next) = match self.step {
                NeighborStep::Right => (self.coord.offset(1, 0), NeighborStep::Left),
                NeighborStep::Left => (self.coord.offset(-1, 0), NeighborStep::Down),
                NeighborStep::Down => (self.coord.offset(0, -1), NeighborStep::Up),
                NeighborStep::Up => (self.coord.offset(0, 1), NeighborStep::End),
                NeighborStep::End => return None,
            };
            self.step = next;
            if self.dim.contains(candidate) {
                return Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let dim = Dimensions::new(10);
        assert!(dim.contains(Coordinate::new(0, 0)));
        assert!(dim.contains(Coordinate::new(9, 9)));
        assert!(!dim.contains(Coordinate::new(10, 0)));
        assert!(!dim.contains(Coordinate::new(0, -1)));
        assert_eq!(dim.try_linearize(Coordinate::new(3, 2)), Some(23));
        assert_eq!(dim.un_linearize(23), Coordinate::new(3, 2));
        assert_eq!(dim.try_linearize(Coordinate::new(-1, 2)), None);
    }

    #[test]
    fn try_new_rejects_degenerate() {
        assert_eq!(Dimensions::try_new(0), None);
        assert_eq!(Dimensions::try_new(1000).map(|d| d.total_size()), Some(1_000_000));
    }

    #[test]
    fn corner_has_two_neighbors() {
        let dim = Dimensions::new(10);
        let n: Vec<_> = dim.neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(n, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);
    }

    #[test]
    fn interior_has_four_neighbors() {
        let dim = Dimensions::new(10);
        let n: Vec<_> = dim.neighbors(Coordinate::new(4, 4)).collect();
        assert_eq!(
            n,
            vec![
                Coordinate::new(5, 4),
                Coordinate::new(3, 4),
                Coordinate::new(4, 3),
                Coordinate::new(4, 5),
            ]
        );
        assert_eq!(dim.neighbors(Coordinate::new(-1, 4)).count(), 0);
    }

    #[test]
    fn rows_start_at_origin() {
        let dim = Dimensions::new(10);
        let first: Vec<_> = dim.iter_rows().next().unwrap().take(2).collect();
        assert_eq!(first, vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        assert_eq!(dim.iter_coordinates().count(), 100);
    }
}
