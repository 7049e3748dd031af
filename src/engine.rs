//! Engine facade: one-time tree construction and evaluation
//!
//! The tree is built and annotated once at startup and never mutated
//! afterwards; play-time collaborators only read node structure and move a
//! current-state pointer (see [`Session`](crate::session::Session)).

use crate::{
    minimax,
    tree::{self, GameState, TreeStats},
};

/// An evaluated game tree, owned for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Engine {
    root: GameState,
}

impl Engine {
    /// Build the full game tree and run the minimax pass over it.
    ///
    /// This is a blocking, one-shot initialization; the tree is small enough
    /// (549,946 nodes) that it completes well before any interaction starts.
    pub fn initialize() -> Self {
        let mut root = tree::build();
        minimax::evaluate(&mut root);
        Engine { root }
    }

    /// The empty-board state with X to move
    pub fn root(&self) -> &GameState {
        &self.root
    }

    /// Shape statistics of the whole tree
    pub fn stats(&self) -> TreeStats {
        tree::stats(&self.root)
    }
}
