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
//! Types used for defining ships and their geometry.
use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

pub use self::linear::Line;

mod linear;

/// Projection of a ship onto the board: the ordered list of cells it occupies. Cells are
/// not guaranteed to be in bounds.
pub type ShapeProjection = Vec<Coordinate>;

/// Kind of ship. The discriminant is the ship's length in cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipKind {
    /// Patrol boat: length 2.
    Patrol = 2,
    /// Cruiser: length 3.
    Cruiser = 3,
    /// Submarine: length 4.
    Submarine = 4,
    /// Battleship: length 5.
    Battleship = 5,
    /// Carrier: length 6.
    Carrier = 6,
}

/// Lookup table from display name to kind.
const KIND_NAMES: [(&str, ShipKind); 5] = [
    ("Patrol", ShipKind::Patrol),
    ("Cruiser", ShipKind::Cruiser),
    ("Submarine", ShipKind::Submarine),
    ("Battleship", ShipKind::Battleship),
    ("Carrier", ShipKind::Carrier),
];

/// Board glyph for each kind, indexed by `len - 2`.
const KIND_GLYPHS: [char; 5] = ['P', 'C', 'S', 'B', 'A'];

impl ShipKind {
    /// Every ship kind, shortest first.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Patrol,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        self as usize
    }

    /// Get the display name of this ship kind.
    pub fn name(self) -> &'static str {
        KIND_NAMES[self.len() - 2].0
    }

    /// Get the single-character glyph used when rendering this kind on a board.
    pub fn glyph(self) -> char {
        KIND_GLYPHS[self.len() - 2]
    }

    /// Look up a kind by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    /// Look up a kind by length.
    pub fn from_len(len: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.len() == len)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Cells run along `x`.
    Horizontal,
    /// Cells run along `y`.
    Vertical,
}

impl Orientation {
    /// Every orientation, in the order they are offered to players.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The symbol players type to select this orientation.
    pub fn symbol(self) -> &'static str {
        match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        }
    }

    /// Look up an orientation by its symbol, ignoring ASCII case.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s.trim()).ok_or(())
    }
}

impl Distribution<Orientation> for Standard {
    /// Draws a uniform index into [`Orientation::ALL`].
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0, Orientation::ALL.len())]
    }
}

/// Index of a ship within a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShipId(usize);

impl ShipId {
    pub(crate) fn new(index: usize) -> Self {
        ShipId(index)
    }

    /// Position of the ship in the order its owner placed them.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship: its kind, where it sits, and how badly it is damaged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    anchor: Coordinate,
    coords: ShapeProjection,
    hits: usize,
    destroyed: bool,
}

impl Ship {
    /// Construct an undamaged ship of the given kind, centered on `anchor`.
    pub fn new(anchor: Coordinate, kind: ShipKind, orientation: Orientation) -> Self {
        Self {
            kind,
            orientation,
            anchor,
            coords: Line::new(kind.len()).project(anchor, orientation),
            hits: 0,
            destroyed: false,
        }
    }

    /// Kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The coordinate the ship was centered on.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.coords.iter().copied()
    }

    /// Check whether the ship occupies the given coordinate.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Length of this ship.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if this ship has been sunk.
    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Record a hit on this ship. Returns true if this hit sank it. Hits on a ship that
    /// is already destroyed are ignored.
    pub fn register_hit(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.hits += 1;
        self.destroyed = self.hits == self.len();
        self.destroyed
    }
}
