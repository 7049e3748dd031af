//! Full game flows through the play-time session

use std::sync::OnceLock;

use oxo::{Coord, Engine, Error, Outcome, Player, Session};

fn engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::initialize)
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn human_x_full_game_never_beats_engine() {
    let mut session = Session::new(engine(), Player::X);

    // human plays greedily into the first open cell each turn
    while !session.is_over() {
        let pick = session.current().open_cells[0];
        session.human_move(pick).expect("first open cell is playable");
        if !session.is_over() {
            session.computer_move().expect("computer's turn");
        }
    }

    assert_ne!(session.outcome().unwrap(), Outcome::XWins);
}

#[test]
fn human_o_full_game_never_beats_engine() {
    let mut session = Session::new(engine(), Player::O);

    session.computer_move().expect("computer opens as X");
    while !session.is_over() {
        let pick = session.current().open_cells[0];
        session.human_move(pick).expect("first open cell is playable");
        if !session.is_over() {
            session.computer_move().expect("computer's turn");
        }
    }

    assert_ne!(session.outcome().unwrap(), Outcome::OWins);
}

#[test]
fn illegal_input_is_ignored_and_game_continues() {
    let mut session = Session::new(engine(), Player::X);

    session.human_move(coord(1, 1)).unwrap();
    session.computer_move().unwrap();

    // occupied and out-of-range picks both bounce without advancing
    assert!(matches!(
        session.human_move(coord(1, 1)),
        Err(Error::NoSuchMove { .. })
    ));
    assert!(matches!(
        session.human_move(coord(9, 9)),
        Err(Error::NoSuchMove { .. })
    ));
    assert_eq!(session.current().ply(), 2);

    session.human_move(coord(2, 2)).unwrap();
    assert_eq!(session.current().ply(), 3);
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut session = Session::new(engine(), Player::X);

    while !session.is_over() {
        let pick = session.current().open_cells[0];
        session.human_move(pick).unwrap();
        if !session.is_over() {
            session.computer_move().unwrap();
        }
    }

    assert_eq!(session.human_move(coord(0, 0)), Err(Error::GameOver));
    assert_eq!(session.computer_move(), Err(Error::GameOver));
}

#[test]
fn reset_starts_a_fresh_game_on_the_same_tree() {
    let mut session = Session::new(engine(), Player::X);

    session.human_move(coord(0, 0)).unwrap();
    session.computer_move().unwrap();
    assert_eq!(session.current().ply(), 2);

    session.reset();
    assert_eq!(session.current().ply(), 0);
    assert!(std::ptr::eq(session.current(), engine().root()));

    // the same line replays identically on the reused tree
    session.human_move(coord(0, 0)).unwrap();
    let reply = session.computer_move().unwrap();
    assert_eq!(reply, coord(1, 1), "center is the only drawing reply to a corner");
}

#[test]
fn rematch_with_swapped_seats() {
    let mut session = Session::new(engine(), Player::X);
    session.human_move(coord(1, 1)).unwrap();

    session.reset_as(Player::O);
    assert_eq!(session.human(), Player::O);
    assert_eq!(session.computer(), Player::X);

    // computer must open now; the human moving first is out of turn
    assert_eq!(
        session.human_move(coord(1, 1)),
        Err(Error::OutOfTurn { to_move: Player::X })
    );
    session.computer_move().unwrap();
}
