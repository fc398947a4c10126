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
//! Player-facing text, looked up by key so that front-ends can swap in translations.
//!
//! Templates use `{0}`, `{1}`, ... as placeholders. Every key used by the engine has an
//! English template in [`ENGLISH`]; [`Texts::format`] falls back to it, and to the key
//! itself, when a catalog has no entry.

/// English templates for every key used by the engine.
pub const ENGLISH: &[(&str, &str)] = &[
    ("gameName", "Battleship"),
    ("shipsRemaining", "Ships remaining"),
    ("shipsRemainingPlayers", "You | Machine"),
    ("playerBoardName", "Your board"),
    ("trackingBoardName", "Tracking board"),
    ("boardSizeInput", "Board size ({0}-{1}): "),
    ("shipsAmountInput", "Number of ships ({0}-{1}): "),
    ("firstPlayerInput", "Who goes first? (Human or Machine): "),
    ("createShipInput", "Ship {0} (x y H|V): "),
    ("shootInput", "Shoot at (x y): "),
    ("pauseInput", "Press Enter to continue..."),
    ("invalidFormat", "Invalid format."),
    ("invalidCoords", "Invalid coordinates."),
    ("createShipInvalidOrientation", "Invalid orientation, use H or V."),
    ("createShipOutOfBounds", "You can't place a ship there: it does not fit on the board."),
    ("createShipOverlapping", "You can't place a ship there: it would overlap another ship."),
    ("createShipTouching", "You can't place a ship there: it would touch another ship."),
    ("createShipFleetComplete", "All ships were already placed."),
    ("shootAlreadyShot", "You already shot there."),
    ("boardSizeWrongInput", "Board size must be a number between {0} and {1}."),
    ("shipsAmountWrongInput", "Number of ships must be a number between {0} and {1}."),
    ("firstPlayerWrongInput", "Choose Human or Machine."),
    ("invalidMenu", "Choose one of: {0}."),
    (
        "getShipPlacementCoords",
        "Place your {0}s (length {1}) with coordinates from 1 to {2}, x first.",
    ),
    (
        "getShipPlacementOrientation",
        "Orientation is {0} or {1}; the coordinate is the ship's center.",
    ),
    ("machineShoots", "The machine shoots at {0}."),
    ("miss", "Miss!"),
    ("hitHuman", "Hit! You get another turn."),
    ("hitMachine", "Hit! The machine gets another turn."),
    ("sunkHuman", "Sunk the {0}! You get another turn."),
    ("sunkMachine", "Sunk the {0}! The machine gets another turn."),
    ("sunkLast", "Sunk! That was the last ship."),
    ("turn", "Turn: {0}"),
    ("win", "{0} wins!"),
];

/// Get the English template for a key.
pub fn english(key: &str) -> Option<&'static str> {
    ENGLISH.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Replace each `{i}` in the template with the `i`th argument.
pub fn fill(template: &str, args: &[String]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_owned(), |text, (i, arg)| {
            text.replace(&format!("{{{}}}", i), arg)
        })
}

/// A source of templates, such as a loaded language file.
pub trait Texts {
    /// Get the template for a key, if this source has one.
    fn template(&self, key: &str) -> Option<&str>;

    /// Look up the key and fill in its placeholders.
    fn format(&self, key: &str, args: &[String]) -> String {
        let template = self.template(key).or_else(|| english(key)).unwrap_or(key);
        fill(template, args)
    }

    /// Look up a key without placeholders.
    fn text(&self, key: &str) -> String {
        self.format(key, &[])
    }
}

/// The built-in English texts.
#[derive(Debug, Default, Copy, Clone)]
pub struct English;

impl Texts for English {
    fn template(&self, key: &str) -> Option<&str> {
        english(key)
    }
}

/// Something shown to the player that is rendered from a keyed template.
pub trait Localize {
    /// Key of the template.
    fn key(&self) -> &'static str;

    /// Values for the template's placeholders, in order.
    fn args(&self) -> Vec<String> {
        Vec::new()
    }

    /// Render with the given texts.
    fn localize(&self, texts: &dyn Texts) -> String {
        texts.format(self.key(), &self.args())
    }
}
