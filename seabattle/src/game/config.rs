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
use std::ops::RangeInclusive;

use crate::{
    board::{PlacementRule, BOARD_SIZE_RANGE},
    game::{ConfigError, Player},
    ships::ShipKind,
};

/// Smallest fleet a game may be played with.
pub const SHIPS_AMOUNT_MIN: usize = 1;

/// Consecutive failed attempts tolerated while randomly placing a single ship.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 100_000;

/// Validated parameters of a single match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    board_size: usize,
    ships_amount: usize,
    first_player: Player,
    rule: PlacementRule,
    fleet_kind: ShipKind,
    placement_attempts: usize,
}

impl GameConfig {
    /// Validate the setup parameters. The board side must lie in [`BOARD_SIZE_RANGE`]
    /// and the fleet size in [`GameConfig::ships_amount_range`].
    pub fn new(
        board_size: usize,
        ships_amount: usize,
        first_player: Player,
    ) -> Result<Self, ConfigError> {
        if !BOARD_SIZE_RANGE.contains(&board_size) {
            return Err(ConfigError::BoardSize {
                got: board_size,
                min: *BOARD_SIZE_RANGE.start(),
                max: *BOARD_SIZE_RANGE.end(),
            });
        }
        let amounts = Self::ships_amount_range(board_size);
        if !amounts.contains(&ships_amount) {
            return Err(ConfigError::ShipsAmount {
                got: ships_amount,
                min: *amounts.start(),
                max: *amounts.end(),
            });
        }
        Ok(Self {
            board_size,
            ships_amount,
            first_player,
            rule: PlacementRule::Strict,
            fleet_kind: ShipKind::Submarine,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        })
    }

    /// Range of fleet sizes allowed on a board of the given side.
    pub fn ships_amount_range(board_size: usize) -> RangeInclusive<usize> {
        SHIPS_AMOUNT_MIN..=board_size
    }

    /// Use the given rule for validating placements of both players.
    pub fn with_rule(mut self, rule: PlacementRule) -> Self {
        self.rule = rule;
        self
    }

    /// Build every ship of both fleets with the given kind.
    pub fn with_fleet_kind(mut self, kind: ShipKind) -> Self {
        self.fleet_kind = kind;
        self
    }

    /// Cap the consecutive failed attempts per ship during random placement. A cap of 0
    /// is raised to 1.
    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts.max(1);
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ships_amount(&self) -> usize {
        self.ships_amount
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn rule(&self) -> PlacementRule {
        self.rule
    }

    pub fn fleet_kind(&self) -> ShipKind {
        self.fleet_kind
    }

    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }
}
