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
//! Errors raised while configuring and setting up a [`Game`][crate::game::Game].

use thiserror::Error;

/// Reason a [`GameConfig`][crate::game::GameConfig] was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The board side is outside the supported range.
    #[error("board size must be between {min} and {max}, got {got}")]
    BoardSize { got: usize, min: usize, max: usize },
    /// The number of ships is outside `[1, board size]`.
    #[error("number of ships must be between {min} and {max}, got {got}")]
    ShipsAmount { got: usize, min: usize, max: usize },
}

/// Raised when random placement gives up on a fleet that does not fit.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("placed only {placed} of {requested} ships after {attempts} attempts")]
pub struct PlacementExhausted {
    /// Number of ships on the board when placement stopped.
    pub placed: usize,
    /// Number of ships the game asked for.
    pub requested: usize,
    /// Total placement attempts made, successful or not.
    pub attempts: usize,
}

/// Error returned when parsing an unknown [`Player`][crate::game::Player].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown player {0:?}, expected \"human\" or \"machine\"")]
pub struct ParsePlayerError(pub(crate) String);
