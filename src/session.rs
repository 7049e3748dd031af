//! Play-time traversal of the evaluated tree
//!
//! A [`Session`] replaces the ad-hoc shared state a front-end would
//! otherwise keep (current state, human seat): the only mutation points are
//! [`human_move`](Session::human_move), [`computer_move`](Session::computer_move),
//! and [`reset`](Session::reset). The prebuilt tree itself is never touched.

use crate::{
    board::{Coord, Player},
    engine::Engine,
    error::{Error, Result},
    minimax::{self, Outcome},
    tree::{GameState, NodeId},
};

/// One human-versus-computer game walking down the evaluated tree.
#[derive(Debug)]
pub struct Session<'e> {
    engine: &'e Engine,
    current: &'e GameState,
    human: Player,
}

impl<'e> Session<'e> {
    /// Start a game at the root. If the human plays O, the computer owns X
    /// and is expected to open via [`computer_move`](Self::computer_move).
    pub fn new(engine: &'e Engine, human: Player) -> Self {
        Session {
            engine,
            current: engine.root(),
            human,
        }
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// The state the game is currently in
    pub fn current(&self) -> &'e GameState {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Outcome of the finished game.
    ///
    /// # Errors
    ///
    /// `Error::NotTerminal` while the game is still in progress.
    pub fn outcome(&self) -> Result<Outcome> {
        self.current.outcome()
    }

    /// Apply the human's cell pick.
    ///
    /// # Errors
    ///
    /// - `Error::GameOver` if the game has already ended
    /// - `Error::OutOfTurn` if it is the computer's move
    /// - `Error::NoSuchMove` if the cell is occupied or off the board;
    ///   recoverable, the current state is unchanged and the input should
    ///   simply be ignored
    pub fn human_move(&mut self, coord: Coord) -> Result<&'e GameState> {
        self.ensure_turn(self.human)?;

        let child = self
            .current
            .child_by_coord(coord)
            .ok_or(Error::NoSuchMove { coord })?;
        self.current = child;
        Ok(child)
    }

    /// Let the computer pick its optimal move and return the cell it took.
    ///
    /// # Errors
    ///
    /// - `Error::GameOver` if the game has already ended
    /// - `Error::OutOfTurn` if it is the human's move
    pub fn computer_move(&mut self) -> Result<Coord> {
        self.ensure_turn(self.computer())?;

        let child = minimax::best_child(self.current, self.computer())?;
        self.current = child;
        match child.id {
            NodeId::Move(coord) => Ok(coord),
            NodeId::Root => unreachable!("children always carry a move id"),
        }
    }

    /// Start a new game on the same prebuilt tree
    pub fn reset(&mut self) {
        self.current = self.engine.root();
    }

    /// Start a new game, optionally switching the human's seat
    pub fn reset_as(&mut self, human: Player) {
        self.human = human;
        self.reset();
    }

    fn ensure_turn(&self, seat: Player) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.current.next_player != seat {
            return Err(Error::OutOfTurn {
                to_move: self.current.next_player,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_human_x_opens_and_computer_answers() {
        let engine = Engine::initialize();
        let mut session = Session::new(&engine, Player::X);

        session.human_move(coord(1, 1)).unwrap();
        assert_eq!(session.current().next_player, Player::O);

        // O's optimal replies to a center opening are the corners; the
        // row-major tie-break picks (0,0)
        let reply = session.computer_move().unwrap();
        assert_eq!(reply, coord(0, 0));
    }

    #[test]
    fn test_illegal_pick_is_recoverable() {
        let engine = Engine::initialize();
        let mut session = Session::new(&engine, Player::X);

        session.human_move(coord(0, 0)).unwrap();
        session.computer_move().unwrap();
        let before = session.current();

        let err = session.human_move(coord(0, 0)).unwrap_err();
        assert_eq!(err, Error::NoSuchMove { coord: coord(0, 0) });
        assert!(std::ptr::eq(session.current(), before));

        // a legal pick still goes through afterwards
        session.human_move(coord(2, 2)).unwrap();
    }

    #[test]
    fn test_out_of_turn_is_rejected() {
        let engine = Engine::initialize();
        let mut session = Session::new(&engine, Player::O);

        // X (the computer) opens, so the human cannot move first
        let err = session.human_move(coord(0, 0)).unwrap_err();
        assert_eq!(err, Error::OutOfTurn { to_move: Player::X });

        session.computer_move().unwrap();
        assert!(session.human_move(coord(1, 1)).is_ok());
    }

    #[test]
    fn test_outcome_requires_terminal() {
        let engine = Engine::initialize();
        let session = Session::new(&engine, Player::X);
        assert_eq!(session.outcome().unwrap_err(), Error::NotTerminal);
    }

    #[test]
    fn test_reset_reuses_the_tree() {
        let engine = Engine::initialize();
        let mut session = Session::new(&engine, Player::X);

        session.human_move(coord(0, 0)).unwrap();
        session.computer_move().unwrap();
        session.reset();

        assert!(std::ptr::eq(session.current(), engine.root()));
        assert_eq!(session.human(), Player::X);

        session.reset_as(Player::O);
        assert_eq!(session.computer(), Player::X);
    }
}
