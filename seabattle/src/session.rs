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
//! Drives a match over a text interface: collects setup values, ship placements and
//! shots from an injected [`Prompter`] and reports everything to a [`Presenter`].
//!
//! Each answer is parsed into a [`Reply`]; a [`Reply::Retry`] is reported and the same
//! question asked again, up to an optional retry limit. End of input aborts the session
//! with [`SessionError::Aborted`], which callers are expected to treat as a request to
//! exit.
use std::{fmt, io};

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::{
    board::{CannotPlaceReason, Coordinate, PlaceError, PlacementRule, ShotError, ShotOutcome, BOARD_SIZE_RANGE},
    game::{ConfigError, Game, GameConfig, PlacementExhausted, Player, ShotReport, TurnState},
    render,
    ships::{Orientation, Ship, ShipKind},
    text::{English, Localize, Texts},
};

pub mod parse;

/// Source of lines typed by the human.
pub trait Prompter {
    /// Show the prompt and read one line. Returns `Ok(None)` once input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Sink for everything shown to the human.
pub trait Presenter {
    /// Show a block of preformatted text, such as the title or the boards.
    fn show(&mut self, text: &str);

    /// Show a single message line.
    fn message(&mut self, message: &Message);

    /// Clear the screen before a new frame.
    fn clear(&mut self) {}

    /// Texts used for prompts, titles and board headings.
    fn texts(&self) -> &dyn Texts {
        &English
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show(&mut self, text: &str) {
        (**self).show(text)
    }

    fn message(&mut self, message: &Message) {
        (**self).message(message)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn texts(&self) -> &dyn Texts {
        (**self).texts()
    }
}

/// Why an answer was not accepted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RetryReason {
    /// Wrong number of tokens or a coordinate that is not a number.
    MalformedInput,
    /// A coordinate outside the board.
    OutOfBounds,
    /// An orientation other than `H` or `V`.
    BadOrientation,
    /// The placement validator rejected the ship.
    CannotPlaceHere(CannotPlaceReason),
    /// The cell was already shot.
    AlreadyShot,
    /// A board size outside the supported range.
    BoardSizeOutOfRange { min: usize, max: usize },
    /// A fleet size outside the range allowed for the board.
    ShipsAmountOutOfRange { min: usize, max: usize },
    /// A first player other than `Human` or `Machine`.
    UnknownPlayer,
    /// A menu entry that does not exist. Holds the valid entries.
    UnknownOption(String),
}

impl Localize for RetryReason {
    fn key(&self) -> &'static str {
        match self {
            RetryReason::MalformedInput => "invalidFormat",
            RetryReason::OutOfBounds => "invalidCoords",
            RetryReason::BadOrientation => "createShipInvalidOrientation",
            RetryReason::CannotPlaceHere(reason) => match reason {
                CannotPlaceReason::OutOfBounds => "createShipOutOfBounds",
                CannotPlaceReason::Overlapping => "createShipOverlapping",
                CannotPlaceReason::Touching => "createShipTouching",
                CannotPlaceReason::FleetComplete => "createShipFleetComplete",
            },
            RetryReason::AlreadyShot => "shootAlreadyShot",
            RetryReason::BoardSizeOutOfRange { .. } => "boardSizeWrongInput",
            RetryReason::ShipsAmountOutOfRange { .. } => "shipsAmountWrongInput",
            RetryReason::UnknownPlayer => "firstPlayerWrongInput",
            RetryReason::UnknownOption(_) => "invalidMenu",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            RetryReason::BoardSizeOutOfRange { min, max }
            | RetryReason::ShipsAmountOutOfRange { min, max } => {
                vec![min.to_string(), max.to_string()]
            }
            RetryReason::UnknownOption(options) => vec![options.clone()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.localize(&English))
    }
}

/// Result of parsing a single answer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Reply<T> {
    /// The answer was accepted.
    Value(T),
    /// The answer was rejected; ask again.
    Retry(RetryReason),
    /// The human asked to leave.
    Abort,
}

impl<T> Reply<T> {
    /// Chain another check onto an accepted answer.
    pub fn and_then<U, F: FnOnce(T) -> Reply<U>>(self, f: F) -> Reply<U> {
        match self {
            Reply::Value(v) => f(v),
            Reply::Retry(reason) => Reply::Retry(reason),
            Reply::Abort => Reply::Abort,
        }
    }

    /// Transform an accepted answer.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Reply<U> {
        self.and_then(|v| Reply::Value(f(v)))
    }
}

/// Questions asked of the human.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Prompt {
    BoardSize,
    ShipsAmount { board_size: usize },
    FirstPlayer,
    PlaceShip { number: usize },
    Shot,
    /// Wait for the human to read the outcome of a shot.
    Continue,
}

impl Localize for Prompt {
    fn key(&self) -> &'static str {
        match self {
            Prompt::BoardSize => "boardSizeInput",
            Prompt::ShipsAmount { .. } => "shipsAmountInput",
            Prompt::FirstPlayer => "firstPlayerInput",
            Prompt::PlaceShip { .. } => "createShipInput",
            Prompt::Shot => "shootInput",
            Prompt::Continue => "pauseInput",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            Prompt::BoardSize => vec![
                BOARD_SIZE_RANGE.start().to_string(),
                BOARD_SIZE_RANGE.end().to_string(),
            ],
            Prompt::ShipsAmount { board_size } => {
                let range = GameConfig::ships_amount_range(*board_size);
                vec![range.start().to_string(), range.end().to_string()]
            }
            Prompt::PlaceShip { number } => vec![number.to_string()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.localize(&English))
    }
}

/// Lines reported to the [`Presenter`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Message {
    /// An answer was rejected.
    Retry(RetryReason),
    /// How to type ship coordinates.
    PlacementInstructions { board_size: usize, kind: ShipKind },
    /// How to type ship orientations.
    OrientationInstructions,
    /// The machine picked its target.
    MachineShoots(Coordinate),
    /// A shot was resolved.
    Shot(ShotReport),
    /// Whose turn it is.
    Turn(Player),
    /// The match is over.
    Winner(Player),
}

impl Localize for Message {
    fn key(&self) -> &'static str {
        match self {
            Message::Retry(reason) => reason.key(),
            Message::PlacementInstructions { .. } => "getShipPlacementCoords",
            Message::OrientationInstructions => "getShipPlacementOrientation",
            Message::MachineShoots(_) => "machineShoots",
            Message::Shot(report) => match (report.outcome, report.shooter) {
                (ShotOutcome::Miss, _) => "miss",
                _ if report.next.winner().is_some() => "sunkLast",
                (ShotOutcome::Hit(_), Player::Human) => "hitHuman",
                (ShotOutcome::Hit(_), Player::Machine) => "hitMachine",
                (ShotOutcome::Sunk(_), Player::Human) => "sunkHuman",
                (ShotOutcome::Sunk(_), Player::Machine) => "sunkMachine",
            },
            Message::Turn(_) => "turn",
            Message::Winner(_) => "win",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            Message::Retry(reason) => reason.args(),
            Message::PlacementInstructions { board_size, kind } => vec![
                kind.name().to_ascii_lowercase(),
                kind.len().to_string(),
                board_size.to_string(),
            ],
            Message::OrientationInstructions => vec![
                Orientation::Horizontal.to_string(),
                Orientation::Vertical.to_string(),
            ],
            Message::MachineShoots(coord) => vec![coord.to_string()],
            Message::Shot(report) => report
                .outcome
                .kind()
                .map(|kind| vec![kind.to_string()])
                .unwrap_or_default(),
            Message::Turn(player) | Message::Winner(player) => vec![player.to_string()],
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.localize(&English))
    }
}

/// Setup values already known before the session starts, e.g. from the command line.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SetupDefaults {
    pub board_size: Option<usize>,
    pub ships_amount: Option<usize>,
    pub first_player: Option<Player>,
    pub rule: PlacementRule,
}

/// Reason a session stopped before the match was over.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input was closed or the human asked to quit.
    #[error("input closed")]
    Aborted,
    /// Too many rejected answers in a row.
    #[error("gave up after {0} rejected answers")]
    RetriesExhausted(usize),
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] PlaceError),
    #[error(transparent)]
    Fleet(#[from] PlacementExhausted),
    #[error(transparent)]
    Shot(#[from] ShotError),
    /// The machine had no cell left to shoot.
    #[error("no cell left to shoot at")]
    NoTarget,
}

/// The text front-end of a match.
pub struct Session<I, O> {
    input: I,
    output: O,
    /// Rejected answers tolerated per question. `None` asks forever.
    max_retries: Option<usize>,
    /// Wait for the human to acknowledge every resolved shot.
    pause_after_shots: bool,
}

impl<I: Prompter, O: Presenter> Session<I, O> {
    /// Construct a session that asks again for as long as answers are rejected.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            max_retries: None,
            pause_after_shots: false,
        }
    }

    /// Give up on a question after `retries` rejected answers.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Wait for an empty line after every resolved shot, so the outcome stays on screen
    /// until the next frame is drawn.
    pub fn with_pauses(mut self) -> Self {
        self.pause_after_shots = true;
        self
    }

    /// Get the presenter, to show text outside of a match.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Get the prompter back.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Take the session apart.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Ask a question until `step` accepts the answer. Rejections are reported to the
    /// presenter. Quit words and end of input abort.
    pub fn ask<T, F>(&mut self, prompt: &str, mut step: F) -> Result<T, SessionError>
    where
        F: FnMut(&str) -> Reply<T>,
    {
        let mut retries = 0;
        loop {
            let line = match self.input.read_line(prompt)? {
                Some(line) => line,
                None => return Err(SessionError::Aborted),
            };
            let line = line.trim();
            let reply = if parse::is_quit(line) {
                Reply::Abort
            } else {
                step(line)
            };
            match reply {
                Reply::Value(value) => return Ok(value),
                Reply::Abort => return Err(SessionError::Aborted),
                Reply::Retry(reason) => {
                    debug!(%reason, input = line, "answer rejected");
                    self.output.message(&Message::Retry(reason));
                    retries += 1;
                    if self.max_retries.map_or(false, |max| retries > max) {
                        return Err(SessionError::RetriesExhausted(retries));
                    }
                }
            }
        }
    }

    /// Text of a prompt in the presenter's language.
    fn prompt_text(&self, prompt: Prompt) -> String {
        prompt.localize(self.output.texts())
    }

    /// Block until the human sends a line. End of input aborts.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        let prompt = self.prompt_text(Prompt::Continue);
        match self.input.read_line(&prompt)? {
            Some(_) => Ok(()),
            None => Err(SessionError::Aborted),
        }
    }

    /// Collect the setup values not already given in `defaults`. Defaults outside their
    /// range are reported and asked for again.
    pub fn setup(&mut self, defaults: &SetupDefaults) -> Result<GameConfig, SessionError> {
        let board_size = match defaults.board_size {
            Some(size) if BOARD_SIZE_RANGE.contains(&size) => size,
            other => {
                if let Some(size) = other {
                    self.reject(parse::board_size(&size.to_string()));
                }
                let prompt = self.prompt_text(Prompt::BoardSize);
                self.ask(&prompt, parse::board_size)?
            }
        };
        let ships_amount = match defaults.ships_amount {
            Some(n) if GameConfig::ships_amount_range(board_size).contains(&n) => n,
            other => {
                if let Some(n) = other {
                    self.reject(parse::ships_amount(&n.to_string(), board_size));
                }
                let prompt = self.prompt_text(Prompt::ShipsAmount { board_size });
                self.ask(&prompt, |line| parse::ships_amount(line, board_size))?
            }
        };
        let first_player = match defaults.first_player {
            Some(player) => player,
            None => {
                let prompt = self.prompt_text(Prompt::FirstPlayer);
                self.ask(&prompt, parse::player)?
            }
        };
        Ok(GameConfig::new(board_size, ships_amount, first_player)?.with_rule(defaults.rule))
    }

    /// Report the reason of a rejected reply, if any.
    fn reject<T>(&mut self, reply: Reply<T>) {
        if let Reply::Retry(reason) = reply {
            self.output.message(&Message::Retry(reason));
        }
    }

    /// Ask for the human's ships until the fleet is complete. Coordinates are 1-based;
    /// every candidate is checked against the placement rule before it is accepted.
    pub fn collect_human_placements(&mut self, game: &mut Game) -> Result<(), SessionError> {
        let dim = *game.dimensions();
        let kind = game.config().fleet_kind();
        self.output.clear();
        let title = render::title(self.output.texts());
        self.output.show(&title);
        self.output.message(&Message::PlacementInstructions {
            board_size: dim.size(),
            kind,
        });
        self.output.message(&Message::OrientationInstructions);
        while !game.is_player_ready(Player::Human) {
            let number = game.board(Player::Human).ship_count() + 1;
            let prompt = self.prompt_text(Prompt::PlaceShip { number });
            let ship = {
                let game = &*game;
                self.ask(&prompt, |line| {
                    parse::placement(line, &dim).and_then(|(anchor, orientation)| {
                        let ship = Ship::new(anchor, kind, orientation);
                        match game.check_placement(Player::Human, &ship) {
                            Ok(()) => Reply::Value(ship),
                            Err(reason) => Reply::Retry(RetryReason::CannotPlaceHere(reason)),
                        }
                    })
                })?
            };
            game.place(Player::Human, ship)?;
        }
        Ok(())
    }

    /// Show the title and the boards.
    fn render(&mut self, game: &Game) {
        self.output.clear();
        let frame = format!(
            "{}{}",
            render::title(self.output.texts()),
            render::render_boards(game, self.output.texts())
        );
        self.output.show(&frame);
    }

    /// Run the turn state machine until one fleet is destroyed, rendering the boards
    /// before every shot. Returns the winner; a match that is already over returns its
    /// winner without asking anything.
    pub fn play_to_completion<R: Rng + ?Sized>(
        &mut self,
        game: &mut Game,
        rng: &mut R,
    ) -> Result<Player, SessionError> {
        let dim = *game.dimensions();
        let winner = loop {
            let shooter = match game.state() {
                TurnState::MatchOver(winner) => break winner,
                TurnState::AwaitingHumanShot => Player::Human,
                TurnState::AwaitingMachineShot => Player::Machine,
            };
            self.render(game);
            self.output.message(&Message::Turn(shooter));
            let coord = match shooter {
                Player::Human => {
                    let prompt = self.prompt_text(Prompt::Shot);
                    let game = &*game;
                    self.ask(&prompt, |line| {
                        parse::shot(line, &dim).and_then(|coord| {
                            if game.board(Player::Machine).is_shot(coord) {
                                Reply::Retry(RetryReason::AlreadyShot)
                            } else {
                                Reply::Value(coord)
                            }
                        })
                    })?
                }
                Player::Machine => {
                    let coord = game.machine_target(rng).ok_or(SessionError::NoTarget)?;
                    self.output.message(&Message::MachineShoots(coord));
                    coord
                }
            };
            let report = game.shoot(shooter, coord)?;
            self.output.message(&Message::Shot(report));
            if self.pause_after_shots {
                self.pause()?;
            }
        };
        self.render(game);
        self.output.message(&Message::Winner(winner));
        Ok(winner)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// Answers prompts from a fixed script; input closes when the script runs out.
    struct Script(VecDeque<String>);

    impl Script {
        fn new(lines: &[&str]) -> Self {
            Script(lines.iter().map(|l| l.to_string()).collect())
        }
    }

    impl Prompter for Script {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.0.pop_front())
        }
    }

    /// Records messages as text.
    #[derive(Default)]
    struct Record {
        messages: Vec<Message>,
        frames: usize,
    }

    impl Presenter for Record {
        fn show(&mut self, _text: &str) {}

        fn message(&mut self, message: &Message) {
            self.messages.push(message.clone());
        }

        fn clear(&mut self) {
            self.frames += 1;
        }
    }

    #[test]
    fn ask_retries_then_accepts() {
        let mut session = Session::new(Script::new(&["x", "9", "12"]), Record::default());
        let size = session.ask("size", parse::board_size).unwrap();
        assert_eq!(size, 12);
        let (_, record) = session.into_parts();
        assert_eq!(record.messages.len(), 2);
    }

    #[test]
    fn ask_aborts_on_end_of_input_and_quit() {
        let mut session = Session::new(Script::new(&[]), Record::default());
        assert!(matches!(
            session.ask("size", parse::board_size),
            Err(SessionError::Aborted)
        ));
        let mut session = Session::new(Script::new(&["quit"]), Record::default());
        assert!(matches!(
            session.ask("size", parse::board_size),
            Err(SessionError::Aborted)
        ));
    }

    #[test]
    fn ask_gives_up_after_retry_limit() {
        let mut session =
            Session::new(Script::new(&["a", "b", "c", "12"]), Record::default()).with_max_retries(2);
        assert!(matches!(
            session.ask("size", parse::board_size),
            Err(SessionError::RetriesExhausted(3))
        ));
    }

    #[test]
    fn setup_skips_known_values() {
        let defaults = SetupDefaults {
            board_size: Some(10),
            first_player: Some(Player::Machine),
            ..Default::default()
        };
        let mut session = Session::new(Script::new(&["11", "3"]), Record::default());
        let config = session.setup(&defaults).unwrap();
        assert_eq!(config.board_size(), 10);
        assert_eq!(config.ships_amount(), 3);
        assert_eq!(config.first_player(), Player::Machine);
    }

    #[test]
    fn setup_reports_bad_defaults() {
        let defaults = SetupDefaults {
            board_size: Some(5),
            ..Default::default()
        };
        let mut session = Session::new(Script::new(&["15", "2", "human"]), Record::default());
        let config = session.setup(&defaults).unwrap();
        assert_eq!(config.board_size(), 15);
        let (_, record) = session.into_parts();
        assert_eq!(record.messages.len(), 1);
    }

    #[test]
    fn placements_reprompt_until_valid() {
        let mut game = Game::new(GameConfig::new(10, 2, Player::Human).unwrap());
        let script = Script::new(&[
            "5 5",     // malformed
            "1 1 H",   // out of bounds once centered
            "6 6 Q",   // bad orientation
            "6 6 H",   // ok: x 3..=6 (0-based), y 5
            "6 9 V",   // y 6..=9, touches the first ship
            "6 3 v",   // ok: y 0..=3
        ]);
        let mut session = Session::new(script, Record::default());
        session.collect_human_placements(&mut game).unwrap();
        assert!(game.is_player_ready(Player::Human));
        let (_, record) = session.into_parts();
        let retries: Vec<_> = record
            .messages
            .iter()
            .filter_map(|m| match m {
                Message::Retry(reason) => Some(reason.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            retries,
            vec![
                RetryReason::MalformedInput,
                RetryReason::CannotPlaceHere(CannotPlaceReason::OutOfBounds),
                RetryReason::BadOrientation,
                RetryReason::CannotPlaceHere(CannotPlaceReason::Touching),
            ]
        );
    }

    #[test]
    fn human_cannot_shoot_twice() {
        let mut game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        game.place_ship(Player::Human, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        game.place_ship(Player::Machine, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        // A miss hands the turn over; the repeated cell is refused on the next turn
        // and the four hits that follow sink the only ship.
        let mut rng = StdRng::seed_from_u64(5);
        let script = Script::new(&["1 1", "1 1", "4 6", "5 6", "6 6", "7 6"]);
        let mut session = Session::new(script, Record::default());
        let winner = session.play_to_completion(&mut game, &mut rng).unwrap();
        assert_eq!(winner, Player::Human);
        let (_, record) = session.into_parts();
        assert!(record
            .messages
            .contains(&Message::Retry(RetryReason::AlreadyShot)));
        assert_eq!(record.messages.last(), Some(&Message::Winner(Player::Human)));
    }

    /// Records the prompts it was shown.
    struct Recording {
        script: Script,
        prompts: Vec<String>,
    }

    impl Prompter for Recording {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.prompts.push(prompt.to_owned());
            self.script.read_line(prompt)
        }
    }

    #[test]
    fn pauses_after_each_shot() {
        let mut game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        game.place_ship(Player::Human, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        game.place_ship(Player::Machine, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        let script = Script::new(&["4 6", "", "5 6", "", "6 6", "", "7 6", ""]);
        let mut session = Session::new(script, Record::default()).with_pauses();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            session.play_to_completion(&mut game, &mut rng).unwrap(),
            Player::Human
        );
        let (script, record) = session.into_parts();
        assert!(script.0.is_empty());
        // One frame per shot and the final one.
        assert_eq!(record.frames, 5);
    }

    #[test]
    fn closed_input_during_pause_aborts() {
        let mut game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        game.place_ship(Player::Human, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        game.place_ship(Player::Machine, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        let mut session = Session::new(Script::new(&["4 6"]), Record::default()).with_pauses();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            session.play_to_completion(&mut game, &mut rng),
            Err(SessionError::Aborted)
        ));
    }

    #[test]
    fn finished_match_reports_winner_without_asking() {
        let mut game = Game::new(GameConfig::new(10, 1, Player::Human).unwrap());
        game.place_ship(Player::Human, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        game.place_ship(Player::Machine, Coordinate::new(5, 5), Orientation::Horizontal)
            .unwrap();
        for x in 3..=6 {
            game.shoot(Player::Human, Coordinate::new(x, 5)).unwrap();
        }
        let mut session = Session::new(Script::new(&[]), Record::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            session.play_to_completion(&mut game, &mut rng).unwrap(),
            Player::Human
        );
        let (_, record) = session.into_parts();
        assert_eq!(record.messages, vec![Message::Winner(Player::Human)]);
    }

    #[test]
    fn prompts_use_presenter_texts() {
        struct Spanish(Record);

        impl Presenter for Spanish {
            fn show(&mut self, _text: &str) {}

            fn message(&mut self, message: &Message) {
                self.0.message(message)
            }

            fn texts(&self) -> &dyn Texts {
                self
            }
        }

        impl Texts for Spanish {
            fn template(&self, key: &str) -> Option<&str> {
                match key {
                    "boardSizeInput" => Some("Tamaño ({0}-{1}): "),
                    _ => None,
                }
            }
        }

        let input = Recording {
            script: Script::new(&["10", "1", "human"]),
            prompts: Vec::new(),
        };
        let mut session = Session::new(input, Spanish(Record::default()));
        session.setup(&SetupDefaults::default()).unwrap();
        let (input, _) = session.into_parts();
        assert_eq!(
            input.prompts,
            vec![
                "Tamaño (10-1000): ".to_owned(),
                "Number of ships (1-10): ".to_owned(),
                "Who goes first? (Human or Machine): ".to_owned(),
            ]
        );
    }

    #[test]
    fn english_messages() {
        let report = ShotReport {
            shooter: Player::Machine,
            coord: Coordinate::new(0, 0),
            outcome: ShotOutcome::Sunk(ShipKind::Submarine),
            next: TurnState::AwaitingMachineShot,
        };
        assert_eq!(
            Message::Shot(report).to_string(),
            "Sunk the Submarine! The machine gets another turn."
        );
        assert_eq!(
            Message::Retry(RetryReason::ShipsAmountOutOfRange { min: 1, max: 10 }).to_string(),
            "Number of ships must be a number between 1 and 10."
        );
        assert_eq!(
            Message::MachineShoots(Coordinate::new(2, 4)).to_string(),
            "The machine shoots at (3, 5)."
        );
    }
}
