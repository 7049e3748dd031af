//! Minimax evaluation of the game tree
//!
//! X is always the maximizer and O always the minimizer, matching the leaf
//! scoring in [`tree`](crate::tree) (+1 X win, -1 O win). This convention is
//! fixed regardless of which mark the human controls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    board::Player,
    error::{Error, Result},
    tree::GameState,
};

/// Annotate every node of the subtree with its minimax value.
///
/// Post-order depth-first: leaves keep the score assigned at build time,
/// internal nodes take the max (X to move) or min (O to move) of their
/// children's values. Each node's `value` is written exactly once.
pub fn evaluate(state: &mut GameState) -> i32 {
    if state.is_terminal() {
        return state.value;
    }

    let mover = state.next_player;
    let mut best = match mover {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };

    for child in &mut state.children {
        let v = evaluate(child);
        best = match mover {
            Player::X => best.max(v),
            Player::O => best.min(v),
        };
    }

    state.value = best;
    best
}

/// The child with the extremal value for `seat`: maximal for X, minimal
/// for O. Ties keep the first child in row-major order, which fixes which
/// of several equally good moves the computer plays.
///
/// # Errors
///
/// `Error::TerminalState` if the state has no children. That is a contract
/// violation: callers must check [`GameState::is_terminal`] first.
pub fn best_child(state: &GameState, seat: Player) -> Result<&GameState> {
    let (first, rest) = state.children.split_first().ok_or(Error::TerminalState)?;

    let mut best = first;
    for child in rest {
        let better = match seat {
            Player::X => child.value > best.value,
            Player::O => child.value < best.value,
        };
        if better {
            best = child;
        }
    }

    Ok(best)
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    /// Derive the outcome from a terminal state's value sign
    pub fn from_value(value: i32) -> Self {
        match value {
            v if v > 0 => Outcome::XWins,
            v if v < 0 => Outcome::OWins,
            _ => Outcome::Draw,
        }
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::XWins => "X won!",
            Outcome::OWins => "O won!",
            Outcome::Draw => "Game is tied!",
        })
    }
}

impl GameState {
    /// Outcome of a terminal state.
    ///
    /// # Errors
    ///
    /// `Error::NotTerminal` if the game is still in progress.
    pub fn outcome(&self) -> Result<Outcome> {
        if !self.is_terminal() {
            return Err(Error::NotTerminal);
        }
        Ok(Outcome::from_value(self.value))
    }
}
