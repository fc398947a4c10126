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
use crate::{
    board::Coordinate,
    ships::{Orientation, ShapeProjection},
};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project the line onto the board, centered on `anchor`. The first cell is
    /// `len / 2` cells before the anchor along the chosen axis, so for even lengths the
    /// anchor sits just past the middle. Cells may fall outside the board.
    pub fn project(&self, anchor: Coordinate, orientation: Orientation) -> ShapeProjection {
        let offset = (self.0 / 2) as i32;
        (0..self.0 as i32)
            .map(|i| match orientation {
                Orientation::Horizontal => anchor.offset(i - offset, 0),
                Orientation::Vertical => anchor.offset(0, i - offset),
            })
            .collect()
    }

    /// Return true if the projection has this line's length and runs one cell at a time
    /// along a single axis.
    pub fn is_valid_projection(&self, proj: &[Coordinate]) -> bool {
        if proj.len() != self.len() {
            return false;
        }
        let step = match proj {
            [a, b, ..] => (b.x - a.x, b.y - a.y),
            _ => return true,
        };
        if step != (1, 0) && step != (0, 1) {
            return false;
        }
        proj.windows(2)
            .all(|pair| (pair[1].x - pair[0].x, pair[1].y - pair[0].y) == step)
    }
}
