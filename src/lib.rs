//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Complete game tree construction from the empty 3x3 board (X first)
//! - Minimax evaluation annotating every state with its optimal value
//! - A play-time [`Session`] that walks the evaluated tree, so the computer
//!   opponent never loses
//! - A terminal front-end for interactive play and tree analysis
//!
//! The tree is built and evaluated once via [`Engine::initialize`]; games
//! only move a read-only pointer through it and reset back to the root.

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod lines;
pub mod minimax;
pub mod session;
pub mod tree;

pub use board::{Board, Cell, Coord, Player};
pub use engine::Engine;
pub use error::{Error, Result};
pub use minimax::{Outcome, best_child, evaluate};
pub use session::Session;
pub use tree::{GameState, NodeId, TreeStats, build, stats};
