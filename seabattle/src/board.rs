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
//! Types that make up a player's side of the ocean.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::ships::{Line, Ship, ShipId, ShipKind};

pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, Neighbors, BOARD_SIZE_RANGE},
    errors::{
        CannotPlaceReason, CannotShootReason, ParseRuleError, PlaceError, ShotError,
    },
    grid::Grid,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// How close two ships of the same player may sit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementRule {
    /// Ships may neither overlap nor touch orthogonally.
    Strict,
    /// Ships may touch, only overlapping cells are rejected.
    OverlapOnly,
}

impl Default for PlacementRule {
    fn default() -> Self {
        PlacementRule::Strict
    }
}

impl fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            PlacementRule::Strict => "strict",
            PlacementRule::OverlapOnly => "overlap",
        })
    }
}

impl FromStr for PlacementRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(PlacementRule::Strict),
            "overlap" | "overlap-only" | "overlaponly" => Ok(PlacementRule::OverlapOnly),
            _ => Err(ParseRuleError(s.to_owned())),
        }
    }
}

/// Value of a cell on a ship grid, as rendered to its owner.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellValue {
    /// Open water that has not been shot.
    Empty,
    /// An intact part of a ship of the given kind.
    Ship(ShipKind),
    /// A cell that has been shot, whether or not it held a ship.
    Hit,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(match self {
            CellValue::Empty => '.',
            CellValue::Ship(kind) => kind.glyph(),
            CellValue::Hit => 'x',
        })
    }
}

/// Value of a cell on the tracking grid: what the human knows of the machine's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Peg {
    Empty,
    Hit,
    Miss,
}

impl Default for Peg {
    fn default() -> Self {
        Peg::Empty
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(match self {
            Peg::Empty => '.',
            Peg::Hit => 'x',
            Peg::Miss => 'o',
        })
    }
}

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship of the given kind, but did not sink it.
    Hit(ShipKind),
    /// The shot hit a ship of the given kind and sank it.
    Sunk(ShipKind),
}

impl ShotOutcome {
    /// Whether a ship was struck. A hit grants the shooter another shot.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Get the kind of the ship that was hit.
    pub fn kind(&self) -> Option<ShipKind> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(kind) | ShotOutcome::Sunk(kind) => Some(*kind),
        }
    }
}

/// A single cell in the player's grid.
#[derive(Debug, Default, Copy, Clone)]
struct BoardCell {
    /// The ship that occupies this cell, if any.
    ship: Option<ShipId>,

    /// Whether this cell has been shot previously or not.
    shot: bool,
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells, each naming the ship occupying it.
    grid: Grid<BoardCell>,

    /// Ships in the order they were placed. Indexed by [`ShipId`].
    ships: Vec<Ship>,

    /// Number of ships not yet destroyed.
    remaining: usize,

    /// Number of cells shot so far.
    shots: usize,
}

impl Board {
    /// Construct an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            remaining: 0,
            shots: 0,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        self.grid.dimensions()
    }

    /// Number of ships on this board that have not been destroyed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns true if this board has ships and all of them have been sunk.
    pub fn defeated(&self) -> bool {
        !self.ships.is_empty() && self.remaining == 0
    }

    /// Number of ships placed on this board.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ShipId::new(i), ship))
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Get the ship occupying the given coordinate, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.ship)
            .and_then(|id| self.get_ship(id))
    }

    /// Get the value of the cell at the given coordinate. Returns None if the coordinate
    /// is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellValue> {
        self.grid.get(coord).map(|cell| self.value_of(cell))
    }

    fn value_of(&self, cell: &BoardCell) -> CellValue {
        match cell.ship {
            _ if cell.shot => CellValue::Hit,
            Some(id) => CellValue::Ship(self.ships[id.index()].kind()),
            None => CellValue::Empty,
        }
    }

    /// Whether the cell at the given coordinate has been shot. Out-of-bounds
    /// coordinates are never shot.
    pub fn is_shot(&self, coord: Coordinate) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.shot)
    }

    /// Number of in-bounds cells not yet shot.
    pub fn unshot_count(&self) -> usize {
        self.dimensions().total_size() - self.shots
    }

    /// Get an iterator over the coordinates that have not been shot yet.
    pub fn iter_unshot(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.dimensions()
            .iter_coordinates()
            .filter(move |coord| !self.is_shot(*coord))
    }

    /// Get an iterator over the board's rows, starting at `y = 0`.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellValue>> {
        self.grid
            .iter_rows()
            .map(move |row| row.map(move |cell| self.value_of(cell)))
    }

    /// Check whether the ship could be placed on this board under the given rule. Never
    /// modifies the board.
    pub fn check_placement(&self, ship: &Ship, rule: PlacementRule) -> Result<(), CannotPlaceReason> {
        let dim = self.dimensions();
        for coord in ship.coords() {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.ship.is_some() => return Err(CannotPlaceReason::Overlapping),
                Some(_) => {}
            }
            if rule == PlacementRule::Strict
                && dim
                    .neighbors(coord)
                    .any(|n| self.grid[n].ship.is_some())
            {
                return Err(CannotPlaceReason::Touching);
            }
        }
        Ok(())
    }

    /// Attempts to place the ship. On success the ship's cells are claimed and it counts
    /// towards the remaining ships. On failure the ship is handed back unchanged and the
    /// board is untouched.
    pub fn place(&mut self, ship: Ship, rule: PlacementRule) -> Result<ShipId, PlaceError> {
        debug_assert!(Line::new(ship.kind().len()).is_valid_projection(
            &ship.coords().collect::<Vec<_>>()
        ));
        if let Err(reason) = self.check_placement(&ship, rule) {
            return Err(PlaceError::new(reason, ship));
        }
        let id = ShipId::new(self.ships.len());
        // Already ensured that every position is valid and not occupied.
        for coord in ship.coords() {
            self.grid[coord].ship = Some(id);
        }
        debug!(?id, kind = %ship.kind(), anchor = %ship.anchor(), "placed ship");
        self.ships.push(ship);
        self.remaining += 1;
        Ok(id)
    }

    /// Fire a shot at this board. Marks the cell as shot, hit or miss, and credits the
    /// hit to the occupying ship.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, CannotShootReason> {
        let hit_ship = match self.grid.get_mut(coord) {
            None => return Err(CannotShootReason::OutOfBounds),
            Some(cell) if cell.shot => return Err(CannotShootReason::AlreadyShot),
            Some(cell) => {
                cell.shot = true;
                cell.ship
            }
        };
        self.shots += 1;
        Ok(match hit_ship {
            None => ShotOutcome::Miss,
            Some(id) => {
                let ship = &mut self.ships[id.index()];
                if ship.register_hit() {
                    self.remaining -= 1;
                    ShotOutcome::Sunk(ship.kind())
                } else {
                    ShotOutcome::Hit(ship.kind())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn board() -> Board {
        Board::new(Dimensions::new(10))
    }

    fn patrol(x: i32, y: i32, orientation: Orientation) -> Ship {
        Ship::new(Coordinate::new(x, y), ShipKind::Patrol, orientation)
    }

    #[test]
    fn place_writes_kind_into_cells() {
        let mut board = board();
        let ship = Ship::new(Coordinate::new(5, 5), ShipKind::Submarine, Orientation::Horizontal);
        let id = board.place(ship, PlacementRule::Strict).unwrap();
        assert_eq!(id.index(), 0);
        for x in 3..=6 {
            assert_eq!(
                board.cell(Coordinate::new(x, 5)),
                Some(CellValue::Ship(ShipKind::Submarine))
            );
        }
        assert_eq!(board.cell(Coordinate::new(7, 5)), Some(CellValue::Empty));
        assert_eq!(board.remaining(), 1);
    }

    #[test]
    fn rejects_out_of_bounds_without_mutation() {
        let mut board = board();
        let ship = Ship::new(Coordinate::new(0, 0), ShipKind::Submarine, Orientation::Horizontal);
        let err = board.place(ship.clone(), PlacementRule::Strict).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.into_ship(), ship);
        assert_eq!(board.ship_count(), 0);
        assert_eq!(board.remaining(), 0);
        assert!(board
            .iter_rows()
            .flatten()
            .all(|cell| cell == CellValue::Empty));
    }

    #[test]
    fn strict_rule_rejects_touching() {
        let mut board = board();
        board
            .place(patrol(2, 2, Orientation::Horizontal), PlacementRule::Strict)
            .unwrap();
        let err = board
            .place(patrol(2, 3, Orientation::Horizontal), PlacementRule::Strict)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Touching);
        assert_eq!(board.ship_count(), 1);
        // A gap of one row is fine.
        board
            .place(patrol(2, 4, Orientation::Horizontal), PlacementRule::Strict)
            .unwrap();
    }

    #[test]
    fn overlap_rule_allows_touching() {
        let mut board = board();
        board
            .place(patrol(2, 2, Orientation::Horizontal), PlacementRule::OverlapOnly)
            .unwrap();
        board
            .place(patrol(2, 3, Orientation::Horizontal), PlacementRule::OverlapOnly)
            .unwrap();
        let err = board
            .place(patrol(2, 2, Orientation::Vertical), PlacementRule::OverlapOnly)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlapping);
    }

    #[test]
    fn shoot_tracks_hits_and_sinks() {
        let mut board = board();
        board
            .place(patrol(2, 2, Orientation::Horizontal), PlacementRule::Strict)
            .unwrap();
        assert_eq!(board.shoot(Coordinate::new(5, 5)), Ok(ShotOutcome::Miss));
        assert_eq!(board.cell(Coordinate::new(5, 5)), Some(CellValue::Hit));
        assert_eq!(
            board.shoot(Coordinate::new(1, 2)),
            Ok(ShotOutcome::Hit(ShipKind::Patrol))
        );
        assert!(!board.defeated());
        assert_eq!(
            board.shoot(Coordinate::new(2, 2)),
            Ok(ShotOutcome::Sunk(ShipKind::Patrol))
        );
        assert!(board.defeated());
        assert_eq!(board.remaining(), 0);
        assert_eq!(board.unshot_count(), 97);
    }

    #[test]
    fn shoot_refuses_repeats_and_out_of_bounds() {
        let mut board = board();
        board.shoot(Coordinate::new(0, 0)).unwrap();
        assert_eq!(
            board.shoot(Coordinate::new(0, 0)),
            Err(CannotShootReason::AlreadyShot)
        );
        assert_eq!(
            board.shoot(Coordinate::new(10, 0)),
            Err(CannotShootReason::OutOfBounds)
        );
        assert_eq!(board.iter_unshot().count(), 99);
    }

    #[test]
    fn parse_rule() {
        assert_eq!("Strict".parse(), Ok(PlacementRule::Strict));
        assert_eq!("overlap".parse(), Ok(PlacementRule::OverlapOnly));
        assert!("loose".parse::<PlacementRule>().is_err());
        assert_eq!(PlacementRule::OverlapOnly.to_string(), "overlap");
    }
}
