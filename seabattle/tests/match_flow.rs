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
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    session::{parse, Reply},
    CannotPlaceReason, CellValue, Coordinate, Dimensions, Game, GameConfig, Orientation, Peg,
    PlacementRule, Player, Ship, ShipKind, ShotOutcome, TurnState,
};

fn ready_game(first: Player) -> Game {
    let mut game = Game::new(GameConfig::new(10, 1, first).unwrap());
    game.place_ship(Player::Human, Coordinate::new(5, 5), Orientation::Horizontal)
        .unwrap();
    game.place_ship(Player::Machine, Coordinate::new(5, 5), Orientation::Horizontal)
        .unwrap();
    game
}

#[test]
fn typed_anchor_is_centered() {
    let dim = Dimensions::new(10);
    let (anchor, orientation) = match parse::placement("6 6 H", &dim) {
        Reply::Value(v) => v,
        other => panic!("placement rejected: {:?}", other),
    };
    let ship = Ship::new(anchor, ShipKind::Submarine, orientation);
    let cells: Vec<_> = ship.coords().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(3, 5),
            Coordinate::new(4, 5),
            Coordinate::new(5, 5),
            Coordinate::new(6, 5),
        ]
    );
}

#[test]
fn four_straight_hits_end_the_match() {
    let mut game = ready_game(Player::Human);
    for x in 3..=5 {
        let report = game.shoot(Player::Human, Coordinate::new(x, 5)).unwrap();
        assert_eq!(report.outcome, ShotOutcome::Hit(ShipKind::Submarine));
        assert_eq!(report.next, TurnState::AwaitingHumanShot);
    }
    let report = game.shoot(Player::Human, Coordinate::new(6, 5)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk(ShipKind::Submarine));
    assert_eq!(game.state(), TurnState::MatchOver(Player::Human));
    assert_eq!(game.remaining(Player::Machine), 0);
    assert_eq!(game.tracking()[Coordinate::new(6, 5)], Peg::Hit);
}

#[test]
fn misses_alternate_turns() {
    let mut game = ready_game(Player::Machine);
    let report = game.shoot(Player::Machine, Coordinate::new(0, 0)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.next, TurnState::AwaitingHumanShot);
    // Every shot marks the cell, misses included.
    assert_eq!(
        game.board(Player::Human).cell(Coordinate::new(0, 0)),
        Some(CellValue::Hit)
    );

    let err = game.shoot(Player::Machine, Coordinate::new(1, 0)).unwrap_err();
    assert_eq!(err.coord(), Coordinate::new(1, 0));

    game.shoot(Player::Human, Coordinate::new(9, 9)).unwrap();
    assert_eq!(game.tracking()[Coordinate::new(9, 9)], Peg::Miss);
    assert_eq!(game.state(), TurnState::AwaitingMachineShot);
}

#[test]
fn repeated_shot_is_refused_without_changes() {
    let mut game = ready_game(Player::Human);
    game.shoot(Player::Human, Coordinate::new(3, 5)).unwrap();
    let before = game.state();
    assert!(game.shoot(Player::Human, Coordinate::new(3, 5)).is_err());
    assert_eq!(game.state(), before);
    assert_eq!(game.board(Player::Machine).iter_ships().next().unwrap().1.hits(), 1);
}

#[test]
fn adjacent_ships_follow_the_rule() {
    for &(rule, expected) in &[
        (PlacementRule::Strict, Err(CannotPlaceReason::Touching)),
        (PlacementRule::OverlapOnly, Ok(())),
    ] {
        let config = GameConfig::new(10, 2, Player::Human)
            .unwrap()
            .with_rule(rule)
            .with_fleet_kind(ShipKind::Patrol);
        let mut game = Game::new(config);
        game.place_ship(Player::Human, Coordinate::new(2, 2), Orientation::Horizontal)
            .unwrap();
        let second = Ship::new(Coordinate::new(2, 3), ShipKind::Patrol, Orientation::Horizontal);
        assert_eq!(game.check_placement(Player::Human, &second), expected);
    }
}

#[test]
fn seeded_machine_plays_a_full_match() {
    let mut rng = StdRng::seed_from_u64(2020);
    let mut game = Game::new(GameConfig::new(12, 4, Player::Machine).unwrap());
    game.place_random_fleet(&mut rng, Player::Human).unwrap();
    game.place_machine_fleet(&mut rng).unwrap();
    assert!(game.is_ready());

    let mut shots = 0;
    while let Some(shooter) = game.current() {
        let coord = match shooter {
            Player::Machine => game.machine_target(&mut rng).unwrap(),
            Player::Human => {
                let board = game.board(Player::Machine);
                board.iter_unshot().next().unwrap()
            }
        };
        game.shoot(shooter, coord).unwrap();
        shots += 1;
        assert!(shots <= 2 * 144);
    }
    let winner = game.winner().unwrap();
    assert_eq!(game.remaining(winner.opponent()), 0);
    assert!(game.remaining(winner) > 0);
}

#[test]
fn scripted_turn_order_from_machine_first() {
    let mut game = ready_game(Player::Machine);
    // Ships sit on x 3..=6, y 5 on both boards.
    let script = [
        (Player::Machine, Coordinate::new(0, 0), Player::Human),
        (Player::Human, Coordinate::new(3, 5), Player::Human),
        (Player::Human, Coordinate::new(0, 0), Player::Machine),
        (Player::Machine, Coordinate::new(4, 5), Player::Machine),
        (Player::Machine, Coordinate::new(5, 5), Player::Machine),
        (Player::Machine, Coordinate::new(9, 9), Player::Human),
    ];
    for &(shooter, coord, next) in &script {
        assert_eq!(game.current(), Some(shooter));
        game.shoot(shooter, coord).unwrap();
        assert_eq!(game.current(), Some(next));
    }
}
