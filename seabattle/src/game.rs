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
//! A single match: both players' boards, the human's tracking grid, and the turn state
//! machine.
//!
//! The human shoots at the machine's board and sees the results on the tracking grid;
//! the machine shoots back with uniformly random picks among the cells it has not shot
//! yet. A hit grants the shooter another shot, a miss passes the turn. The match is over
//! as soon as either fleet has no ship left.
use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    seq::SliceRandom,
    Rng,
};
use tracing::{debug, info, warn};

use crate::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, Coordinate, Dimensions, Grid, Peg,
        PlaceError, ShotError, ShotOutcome,
    },
    ships::{Orientation, Ship, ShipId},
};

pub use self::{
    config::{GameConfig, DEFAULT_PLACEMENT_ATTEMPTS, SHIPS_AMOUNT_MIN},
    errors::{ConfigError, ParsePlayerError, PlacementExhausted},
};

mod config;
mod errors;

/// Number of uniform draws the machine makes before falling back to picking among the
/// cells it has not shot yet.
const MACHINE_RESAMPLES: usize = 1024;

/// Either side of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    /// Both players, in the order they are offered at setup.
    pub const ALL: [Player; 2] = [Player::Human, Player::Machine];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Name shown to players.
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Machine => "Machine",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    /// Parses a player name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePlayerError(s.to_owned()))
    }
}

impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        Player::ALL[rng.gen_range(0, Player::ALL.len())]
    }
}

/// State of the turn state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnState {
    /// The human is to shoot at the machine's board.
    AwaitingHumanShot,
    /// The machine is to shoot at the human's board.
    AwaitingMachineShot,
    /// The given player sank the opponent's last ship.
    MatchOver(Player),
}

impl TurnState {
    /// The state in which the given player shoots.
    pub fn awaiting(player: Player) -> Self {
        match player {
            Player::Human => TurnState::AwaitingHumanShot,
            Player::Machine => TurnState::AwaitingMachineShot,
        }
    }

    /// The player expected to shoot next, if the match is still running.
    pub fn shooter(self) -> Option<Player> {
        match self {
            TurnState::AwaitingHumanShot => Some(Player::Human),
            TurnState::AwaitingMachineShot => Some(Player::Machine),
            TurnState::MatchOver(_) => None,
        }
    }

    /// The winner, if the match is over.
    pub fn winner(self) -> Option<Player> {
        match self {
            TurnState::MatchOver(winner) => Some(winner),
            _ => None,
        }
    }
}

/// Everything that came out of a single resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotReport {
    /// Who fired.
    pub shooter: Player,
    /// Where the shot landed.
    pub coord: Coordinate,
    /// What it struck.
    pub outcome: ShotOutcome,
    /// State of the match after the shot.
    pub next: TurnState,
}

/// Handles a single match from ship placement to the win.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    human: Board,
    machine: Board,
    /// Shots of the human against the machine, as the human sees them.
    tracking: Grid<Peg>,
    state: TurnState,
}

impl Game {
    /// Start a match with empty boards. The configured first player shoots first once
    /// both fleets are placed.
    pub fn new(config: GameConfig) -> Self {
        let dim = Dimensions::new(config.board_size());
        Self {
            human: Board::new(dim),
            machine: Board::new(dim),
            tracking: Grid::new(dim),
            state: TurnState::awaiting(config.first_player()),
            config,
        }
    }

    /// Get the configuration of this match.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the [`Dimensions`] shared by every grid of this match.
    pub fn dimensions(&self) -> &Dimensions {
        self.human.dimensions()
    }

    /// Get the current state of the turn state machine.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Get the player whose turn it currently is, or `None` once the match is over.
    pub fn current(&self) -> Option<Player> {
        self.state.shooter()
    }

    /// Get the winner, or `None` while the match is in progress.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Get the ship board owned by the given player.
    pub fn board(&self, player: Player) -> &Board {
        match player {
            Player::Human => &self.human,
            Player::Machine => &self.machine,
        }
    }

    fn board_mut(&mut self, player: Player) -> &mut Board {
        match player {
            Player::Human => &mut self.human,
            Player::Machine => &mut self.machine,
        }
    }

    /// Get the human's record of shots against the machine.
    pub fn tracking(&self) -> &Grid<Peg> {
        &self.tracking
    }

    /// Number of the given player's ships that have not been destroyed.
    pub fn remaining(&self, player: Player) -> usize {
        self.board(player).remaining()
    }

    /// Check if the specified player has placed the whole fleet.
    pub fn is_player_ready(&self, player: Player) -> bool {
        self.board(player).ship_count() >= self.config.ships_amount()
    }

    /// Return true if both players are ready to start shooting.
    pub fn is_ready(&self) -> bool {
        Player::ALL.iter().all(|p| self.is_player_ready(*p))
    }

    /// Check if the given ship could be placed for the player, without placing it.
    pub fn check_placement(&self, player: Player, ship: &Ship) -> Result<(), CannotPlaceReason> {
        if self.is_player_ready(player) {
            return Err(CannotPlaceReason::FleetComplete);
        }
        self.board(player).check_placement(ship, self.config.rule())
    }

    /// Try to place the ship for the player, returning the ship back if placement is
    /// not possible.
    pub fn place(&mut self, player: Player, ship: Ship) -> Result<ShipId, PlaceError> {
        if let Err(reason) = self.check_placement(player, &ship) {
            return Err(PlaceError::new(reason, ship));
        }
        let rule = self.config.rule();
        self.board_mut(player).place(ship, rule)
    }

    /// Place a ship of the configured fleet kind centered on the 0-based `anchor`.
    pub fn place_ship(
        &mut self,
        player: Player,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlaceError> {
        let ship = Ship::new(anchor, self.config.fleet_kind(), orientation);
        self.place(player, ship)
    }

    /// Populate the machine's fleet with random placements.
    pub fn place_machine_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlacementExhausted> {
        self.place_random_fleet(rng, Player::Machine)
    }

    /// Fill the rest of the player's fleet with ships at uniformly random in-bounds
    /// anchors and orientations. Rejected candidates are redrawn; once a single ship
    /// fails the configured number of times in a row, gives up with
    /// [`PlacementExhausted`]. Ships placed before giving up stay on the board.
    pub fn place_random_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        player: Player,
    ) -> Result<(), PlacementExhausted> {
        let size = self.config.board_size() as i32;
        let kind = self.config.fleet_kind();
        let cap = self.config.placement_attempts();
        let mut attempts = 0;
        let mut failures = 0;
        while !self.is_player_ready(player) {
            if failures >= cap {
                let err = PlacementExhausted {
                    placed: self.board(player).ship_count(),
                    requested: self.config.ships_amount(),
                    attempts,
                };
                warn!(%player, %err, "random placement exhausted");
                return Err(err);
            }
            attempts += 1;
            let anchor = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
            let ship = Ship::new(anchor, kind, rng.gen());
            match self.place(player, ship) {
                Ok(_) => failures = 0,
                Err(_) => failures += 1,
            }
        }
        debug!(%player, attempts, "random fleet placed");
        Ok(())
    }

    /// Pick the machine's next target: a uniformly random cell of the human's board that
    /// has not been shot yet. Returns `None` if every cell has been shot.
    pub fn machine_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let board = self.board(Player::Human);
        if board.unshot_count() == 0 {
            return None;
        }
        let size = self.config.board_size() as i32;
        for _ in 0..MACHINE_RESAMPLES {
            let coord = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
            if !board.is_shot(coord) {
                return Some(coord);
            }
        }
        let open: Vec<Coordinate> = board.iter_unshot().collect();
        open.choose(rng).copied()
    }

    /// Fire at the shooter's opponent on the specified coordinate. A hit keeps the turn
    /// with the shooter, a miss passes it; sinking the last ship ends the match. Nothing
    /// changes if the shot is refused.
    pub fn shoot(&mut self, shooter: Player, coord: Coordinate) -> Result<ShotReport, ShotError> {
        let refuse = |reason| Err(ShotError::new(reason, coord));
        if !self.is_ready() {
            return refuse(CannotShootReason::NotReady);
        }
        match self.state.shooter() {
            None => return refuse(CannotShootReason::AlreadyOver),
            Some(current) if current != shooter => return refuse(CannotShootReason::OutOfTurn),
            Some(_) => {}
        }
        let target = shooter.opponent();
        let outcome = self
            .board_mut(target)
            .shoot(coord)
            .map_err(|reason| ShotError::new(reason, coord))?;
        if shooter == Player::Human {
            self.tracking[coord] = if outcome.is_hit() { Peg::Hit } else { Peg::Miss };
        }
        self.state = if self.board(target).remaining() == 0 {
            info!(winner = %shooter, "match over");
            TurnState::MatchOver(shooter)
        } else if outcome.is_hit() {
            TurnState::awaiting(shooter)
        } else {
            TurnState::awaiting(target)
        };
        debug!(%shooter, %coord, ?outcome, next = ?self.state, "shot resolved");
        Ok(ShotReport {
            shooter,
            coord,
            outcome,
            next: self.state,
        })
    }
}
