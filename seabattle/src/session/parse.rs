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
//! Parsing of the lines typed by the human. Nothing here touches game state; every
//! function turns one line into a [`Reply`].
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    board::{Coordinate, Dimensions, BOARD_SIZE_RANGE},
    game::{GameConfig, Player},
    session::{Reply, RetryReason},
    ships::Orientation,
};

/// Separates tokens: whitespace, optionally with a comma between coordinates.
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*|\s+").unwrap());

/// A signed decimal integer and nothing else.
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Words that end the session from any prompt.
static QUIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:quit|exit|q)$").unwrap());

/// Split a line into its tokens.
pub fn tokens(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        Vec::new()
    } else {
        SEPARATOR.split(line).collect()
    }
}

/// Whether the line asks to leave the game.
pub fn is_quit(line: &str) -> bool {
    QUIT.is_match(line.trim())
}

/// Parse a single integer token. Values too large for `i64` are reported as out of
/// bounds rather than malformed.
pub fn integer(token: &str) -> Reply<i64> {
    if !INTEGER.is_match(token) {
        return Reply::Retry(RetryReason::MalformedInput);
    }
    match token.parse() {
        Ok(value) => Reply::Value(value),
        Err(_) => Reply::Retry(RetryReason::OutOfBounds),
    }
}

/// Parse a 1-based `x`, `y` pair into an in-bounds 0-based [`Coordinate`].
pub fn coordinate(x: &str, y: &str, dim: &Dimensions) -> Reply<Coordinate> {
    integer(x).and_then(|x| {
        integer(y).and_then(|y| match Coordinate::from_one_based(x, y) {
            Some(coord) if dim.contains(coord) => Reply::Value(coord),
            _ => Reply::Retry(RetryReason::OutOfBounds),
        })
    })
}

/// Parse a shot: `x y`, 1-based.
pub fn shot(line: &str, dim: &Dimensions) -> Reply<Coordinate> {
    match tokens(line).as_slice() {
        [x, y] => coordinate(x, y, dim),
        _ => Reply::Retry(RetryReason::MalformedInput),
    }
}

/// Parse a ship placement: `x y orientation`, 1-based, with the orientation given as
/// `H` or `V`. Coordinates are checked before the orientation.
pub fn placement(line: &str, dim: &Dimensions) -> Reply<(Coordinate, Orientation)> {
    match tokens(line).as_slice() {
        [x, y, orientation] => coordinate(x, y, dim).and_then(|anchor| {
            match Orientation::from_symbol(orientation) {
                Some(orientation) => Reply::Value((anchor, orientation)),
                None => Reply::Retry(RetryReason::BadOrientation),
            }
        }),
        _ => Reply::Retry(RetryReason::MalformedInput),
    }
}

/// Parse a whole-line number that must fall in `min..=max`, rejecting anything else
/// with the given reason.
fn bounded(line: &str, min: usize, max: usize, out_of_range: RetryReason) -> Reply<usize> {
    match tokens(line).as_slice() {
        [token] => match integer(token) {
            Reply::Value(v) if v >= min as i64 && v <= max as i64 => Reply::Value(v as usize),
            _ => Reply::Retry(out_of_range),
        },
        _ => Reply::Retry(out_of_range),
    }
}

/// Parse the board side length.
pub fn board_size(line: &str) -> Reply<usize> {
    let (min, max) = (*BOARD_SIZE_RANGE.start(), *BOARD_SIZE_RANGE.end());
    bounded(line, min, max, RetryReason::BoardSizeOutOfRange { min, max })
}

/// Parse the fleet size for a board of the given side.
pub fn ships_amount(line: &str, board_size: usize) -> Reply<usize> {
    let range = GameConfig::ships_amount_range(board_size);
    let (min, max) = (*range.start(), *range.end());
    bounded(line, min, max, RetryReason::ShipsAmountOutOfRange { min, max })
}

/// Parse the name of the player who shoots first.
pub fn player(line: &str) -> Reply<Player> {
    match line.parse() {
        Ok(player) => Reply::Value(player),
        Err(_) => Reply::Retry(RetryReason::UnknownPlayer),
    }
}
