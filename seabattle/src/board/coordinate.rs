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
use std::fmt;

/// The coordinates of a cell in the board. Signed, since a ship centered near the edge
/// of the board projects cells past the origin; those are rejected at placement time,
/// not when the coordinates are computed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell. Row `0` is rendered at the bottom.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a [`Coordinate`] from a 1-based pair as typed by a player. Returns `None`
    /// if either value does not fit once shifted to 0-based.
    pub fn from_one_based(x: i64, y: i64) -> Option<Self> {
        let shift = |v: i64| v.checked_sub(1).filter(|v| *v >= i64::from(i32::MIN));
        match (shift(x), shift(y)) {
            (Some(x), Some(y)) if x <= i64::from(i32::MAX) && y <= i64::from(i32::MAX) => {
                Some(Self::new(x as i32, y as i32))
            }
            _ => None,
        }
    }

    /// Get the 1-based pair shown to players.
    pub fn one_based(&self) -> (i64, i64) {
        (i64::from(self.x) + 1, i64::from(self.y) + 1)
    }

    /// Shift this coordinate by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    /// Displays the 1-based coordinate, the way players type it.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y) = self.one_based();
        write!(f, "({}, {})", x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(Coordinate::from_one_based(1, 1), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::from_one_based(5, 10), Some(Coordinate::new(4, 9)));
        assert_eq!(Coordinate::from_one_based(0, 0), Some(Coordinate::new(-1, -1)));
        assert_eq!(Coordinate::from_one_based(i64::MAX, 1), None);
        assert_eq!(Coordinate::new(4, 9).one_based(), (5, 10));
        assert_eq!(Coordinate::new(4, 9).to_string(), "(5, 10)");
    }
}
