//! Game tree construction
//!
//! Builds the complete state tree reachable from the empty board with X to
//! move: one node per board configuration, children ordered by row-major
//! coordinate, expansion stopping at terminal states. Terminal leaves are
//! scored here (+1 X win, -1 O win, 0 draw); internal nodes are annotated by
//! the [`minimax`](crate::minimax) pass.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coord, Player},
    lines,
};

/// Identifier of the move that produced a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// The empty board; no move produced it
    Root,
    /// The coordinate of the cell just filled
    Move(Coord),
}

impl NodeId {
    /// The coordinate for a `Move` id, `None` for the root
    pub fn coord(self) -> Option<Coord> {
        match self {
            NodeId::Root => None,
            NodeId::Move(coord) => Some(coord),
        }
    }
}

/// One node of the game tree: a board configuration plus every state
/// reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The move that produced this state
    pub id: NodeId,
    /// The board after that move
    pub board: Board,
    /// The mark that moves next from this state
    pub next_player: Player,
    /// Coordinates not yet filled, in row-major order
    pub open_cells: Vec<Coord>,
    /// One child per open cell for non-terminal states, empty for terminal
    pub children: Vec<GameState>,
    /// Minimax value: +1 X win, -1 O win, 0 draw under optimal play
    pub value: i32,
}

impl GameState {
    /// A state is terminal iff it has no children
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of marks on the board
    pub fn ply(&self) -> usize {
        9 - self.open_cells.len()
    }

    /// The child produced by playing `coord`, if that move is available.
    ///
    /// `None` means an illegal or unavailable move; callers should treat it
    /// as ignored input and keep their current state.
    pub fn child_by_coord(&self, coord: Coord) -> Option<&GameState> {
        self.children
            .iter()
            .find(|child| child.id == NodeId::Move(coord))
    }
}

/// Heuristic score of a finished game won by `winner`
fn score(winner: Player) -> i32 {
    match winner {
        Player::X => 1,
        Player::O => -1,
    }
}

/// Build the subtree for the state produced by `id`, with `board` on the
/// table and `to_move` next.
///
/// The win check for the mark that just moved runs before the full-board
/// check on every node, so a ninth move that completes a line scores as a
/// win, never as a draw.
fn build_node(id: NodeId, board: Board, to_move: Player) -> GameState {
    let open_cells = board.open_cells();

    if let NodeId::Move(_) = id {
        let mover = to_move.opponent();
        if lines::is_winner(&board, mover) {
            return GameState {
                id,
                board,
                next_player: to_move,
                open_cells,
                children: Vec::new(),
                value: score(mover),
            };
        }
    }

    if open_cells.is_empty() {
        return GameState {
            id,
            board,
            next_player: to_move,
            open_cells,
            children: Vec::new(),
            value: 0,
        };
    }

    let mut children = Vec::with_capacity(open_cells.len());
    for &coord in &open_cells {
        let next_board = board
            .with_move(coord, to_move)
            .expect("open cells are always legal during construction");
        children.push(build_node(NodeId::Move(coord), next_board, to_move.opponent()));
    }

    GameState {
        id,
        board,
        next_player: to_move,
        open_cells,
        children,
        value: 0,
    }
}

/// Build the full game tree rooted at the empty board with X to move.
///
/// Deterministic: two builds produce structurally identical trees.
pub fn build() -> GameState {
    build_node(NodeId::Root, Board::new(), Player::X)
}

/// Shape statistics of a game tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub max_depth: usize,
}

/// Count nodes, leaves, and leaf outcomes of the subtree under `state`
pub fn stats(state: &GameState) -> TreeStats {
    let mut acc = TreeStats::default();
    collect_stats(state, 0, &mut acc);
    acc
}

fn collect_stats(state: &GameState, depth: usize, acc: &mut TreeStats) {
    acc.nodes += 1;
    acc.max_depth = acc.max_depth.max(depth);

    if state.is_terminal() {
        acc.leaves += 1;
        match state.value {
            v if v > 0 => acc.x_wins += 1,
            v if v < 0 => acc.o_wins += 1,
            _ => acc.draws += 1,
        }
        return;
    }

    for child in &state.children {
        collect_stats(child, depth + 1, acc);
    }
}
