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
//! Engine for a two-player grid battle game: a human against a computer opponent that
//! picks uniformly random legal moves.
//!
//! [`board`] holds a single player's side of the ocean: the square [`Dimensions`], the
//! ship grid, placement validation and shot resolution.
//!
//! [`ships`] defines the ship kinds, whose integer value is their length, and the
//! geometry that centers a ship on the anchor coordinate chosen by the placer.
//!
//! [`game`] ties two boards and the tracking grid together and runs the turn state
//! machine of a single match.
//!
//! [`render`] and [`session`] are the text front-end: the board dump shown before every
//! shot and the driver that collects placements and shots from an injected input source.
//! Everything they show is looked up by key through [`text`], so front-ends can load
//! translations.

pub mod board;
pub mod game;
pub mod render;
pub mod session;
pub mod ships;
pub mod text;

pub use crate::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, CellValue, Coordinate, Dimensions, Grid,
        Peg, PlaceError, PlacementRule, ShotError, ShotOutcome, BOARD_SIZE_RANGE,
    },
    game::{ConfigError, Game, GameConfig, PlacementExhausted, Player, ShotReport, TurnState},
    ships::{Orientation, Ship, ShipId, ShipKind},
};
