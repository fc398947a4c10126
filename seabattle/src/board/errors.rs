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
//! Errors used by the [`Board`][crate::board::Board] and the [`Game`][crate::game::Game].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed with a given geometry.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells falls outside the board.
    #[error("the ship does not fit on the board at that position")]
    OutOfBounds,
    /// One or more of the ship's cells is already occupied by another ship.
    #[error("the ship would overlap another ship")]
    Overlapping,
    /// One or more of the ship's cells is orthogonally adjacent to another ship.
    #[error("the ship would touch another ship")]
    Touching,
    /// The player already placed every ship the game allows.
    #[error("all ships were already placed")]
    FleetComplete,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the
/// rejected ship back to the caller.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(crate) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The match has already been won.
    #[error("the game is already over")]
    AlreadyOver,
    /// Some fleet has not been fully placed yet.
    #[error("not every ship has been placed yet")]
    NotReady,
    /// The shooter is not the player whose turn it is.
    #[error("player attempted to shoot out of turn")]
    OutOfTurn,
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when parsing an unknown [`PlacementRule`][crate::board::PlacementRule].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown placement rule {0:?}, expected \"strict\" or \"overlap\"")]
pub struct ParseRuleError(pub(crate) String);
