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
//! Text rendering of the match, as shown before every shot.
//!
//! The human's ship grid and the tracking grid are drawn side by side, row `y = 0` at the
//! bottom, each line centered in a [`TITLE_LENGTH`] column frame.
use crate::{
    game::{Game, Player},
    text::Texts,
};

/// Width of the frame the screen is centered in.
pub const TITLE_LENGTH: usize = 100;

/// Blank columns between the two boards.
pub const BOARDS_SEPARATION: usize = 10;

/// Pad `text` on the left so that it sits centered in `width` columns. The right side
/// is left unpadded; text wider than `width` is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let target = (width + len) / 2;
    format!("{:>width$}", text, width = target.max(len))
}

/// Center `text` in exactly `width` columns, padding both sides.
fn center_padded(text: &str, width: usize) -> String {
    format!("{:<width$}", center(text, width), width = width)
}

/// The `#` framed title block with the game's name, three lines ending in a newline.
pub fn title(texts: &dyn Texts) -> String {
    let frame = "#".repeat(TITLE_LENGTH);
    format!(
        "{frame}\n#{name}#\n{frame}\n",
        frame = frame,
        name = center_padded(&texts.text("gameName"), TITLE_LENGTH - 2)
    )
}

/// Render the full board dump: remaining ship counts, the human's ship grid and the
/// tracking grid.
pub fn render_boards(game: &Game, texts: &dyn Texts) -> String {
    let size = game.dimensions().size();
    let separator = " ".repeat(BOARDS_SEPARATION);
    let board_width = size * 2 + 1;

    let human = game.remaining(Player::Human).to_string();
    let machine = game.remaining(Player::Machine).to_string();
    let width = human.len().max(machine.len());
    let mut lines = vec![
        center(&texts.text("shipsRemaining"), TITLE_LENGTH),
        center(&texts.text("shipsRemainingPlayers"), TITLE_LENGTH),
        center(
            &format!("{:>width$} | {}", human, machine, width = width),
            TITLE_LENGTH,
        ),
        String::new(),
    ];

    let titles = format!(
        "{}{}{}",
        center_padded(&texts.text("playerBoardName"), board_width),
        separator,
        center_padded(&texts.text("trackingBoardName"), board_width)
    );
    lines.push(center(&titles, TITLE_LENGTH));
    lines.push(String::new());

    let ships: Vec<Vec<String>> = game
        .board(Player::Human)
        .iter_rows()
        .map(|row| row.map(|cell| cell.to_string()).collect())
        .collect();
    let pegs: Vec<Vec<String>> = game
        .tracking()
        .iter_rows()
        .map(|row| row.map(|peg| peg.to_string()).collect())
        .collect();
    for (own, tracking) in ships.iter().zip(pegs.iter()).rev() {
        let row = format!(
            "^ {}{}^ {}",
            own.join(" "),
            separator,
            tracking.join(" ")
        );
        lines.push(center(&row, TITLE_LENGTH));
    }

    let arrows = vec![">"; size].join(" ");
    let indicator = format!("  {}{}  {}", arrows, separator, arrows);
    lines.push(center(&indicator, TITLE_LENGTH));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Coordinate,
        game::GameConfig,
        ships::Orientation,
        text::English,
    };

    #[test]
    fn center_pads_left_only() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 4), "abcdef");
        assert_eq!(center_padded("ab", 6), "  ab  ");
    }

    #[test]
    fn title_is_framed() {
        let title = title(&English);
        let lines: Vec<&str> = title.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == TITLE_LENGTH));
        assert!(lines[1].contains("Battleship"));
    }

    #[test]
    fn origin_row_is_rendered_last() {
        let mut game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        game.place_ship(Player::Human, Coordinate::new(5, 0), Orientation::Horizontal)
            .unwrap();
        game.place_ship(Player::Machine, Coordinate::new(5, 9), Orientation::Horizontal)
            .unwrap();
        game.shoot(Player::Human, Coordinate::new(0, 9)).unwrap();

        let screen = render_boards(&game, &English);
        let rows: Vec<&str> = screen
            .lines()
            .filter(|l| l.trim_start().starts_with('^'))
            .map(str::trim)
            .collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(
            rows[0],
            format!("^ . . . . . . . . . .{}^ o . . . . . . . . .", " ".repeat(10))
        );
        assert_eq!(
            rows[9],
            format!("^ . . . S S S S . . .{}^ . . . . . . . . . .", " ".repeat(10))
        );
        assert!(screen.contains("1 | 1"));
    }

    #[test]
    fn headings_come_from_texts() {
        struct Spanish;

        impl Texts for Spanish {
            fn template(&self, key: &str) -> Option<&str> {
                match key {
                    "gameName" => Some("Batalla naval"),
                    "playerBoardName" => Some("Tu tablero"),
                    _ => None,
                }
            }
        }

        let game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        let screen = render_boards(&game, &Spanish);
        assert!(screen.contains("Tu tablero"));
        assert!(screen.contains("Tracking board"));
        assert!(title(&Spanish).contains("Batalla naval"));
    }
}
