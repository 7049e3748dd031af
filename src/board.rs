//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" | "0" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// A (row, column) coordinate on the 3x3 board.
///
/// The derived `Ord` gives row-major order, which is part of the observable
/// contract: children are enumerated and ties are broken in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Whether both components are within the 3x3 board
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major index into a flat 9-cell array
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Inverse of [`index`](Self::index); `idx` must be in 0..9
    pub fn from_index(idx: usize) -> Self {
        Coord {
            row: idx / 3,
            col: idx % 3,
        }
    }

    /// All nine coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 3x3 board.
///
/// Implements `Copy` since it is only 9 bytes; every move produces a fresh
/// board value, so a board attached to a game-tree node is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if a coordinate is empty
    pub fn is_open(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.get(coord) == Cell::Empty
    }

    /// All empty coordinates in row-major order
    pub fn open_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_open(c)).collect()
    }

    /// Check if no cells remain open
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place a mark and return the resulting board
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, coord: Coord, player: Player) -> crate::Result<Board> {
        if !self.is_open(coord) {
            return Err(crate::Error::IllegalMove { coord });
        }

        let mut next = *self;
        next.cells[coord.index()] = player.to_cell();
        Ok(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.get(Coord::new(row, col)).to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
