//! Puzzle state and move application.
//!
//! `PuzzleState` is the aggregate handed to the solver: it owns one board
//! snapshot and composes the geometry and board rules into move
//! enumeration, legality testing and the goal test.

use rustc_hash::FxHashSet;

use crate::board::{Board, Square, START};
use crate::geometry::{Direction, Position};
use crate::StateSpace;

/// A move: the origin piece and the square it slides to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One configuration of the puzzle.
///
/// The board is stored inline, so `clone()` always produces an independent
/// copy; frontier branches in the solver never observe each other's
/// mutations. Equality and hashing are structural over the board contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    board: Board,
}

impl PuzzleState {
    /// The fixed starting configuration.
    pub fn initial() -> Self {
        Self { board: START }
    }

    /// A state with an explicit board, for positions other than the start.
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// The owned board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True if at least one legal step exists out of `position`.
    ///
    /// This only tests piece gating, so it can prune origins before full
    /// moves are generated; occupancy of any particular destination is
    /// checked by `is_legal`.
    pub fn has_move_from(&self, position: Position) -> bool {
        self.board.contains(position)
            && Direction::ALL
                .into_iter()
                .any(|direction| self.board.can_move_in(position, direction))
    }

    /// True if `mv` is legal in this state.
    ///
    /// The step direction is recovered from the move's delta pair; a
    /// non-adjacent or zero-delta move finds no direction and is illegal by
    /// that fact alone. Otherwise the destination must be an empty on-board
    /// square and the origin piece must be allowed to step that way.
    pub fn is_legal(&self, mv: Move) -> bool {
        let direction = Direction::from_deltas(mv.to.row - mv.from.row, mv.to.col - mv.from.col);
        match direction {
            Some(direction) => {
                self.board.is_empty_at(mv.to) && self.board.can_move_in(mv.from, direction)
            }
            None => false,
        }
    }

    /// Slides the origin piece into the destination square.
    ///
    /// Precondition: `mv` is legal in this state. No validation is
    /// performed; an illegal move corrupts the piece count.
    pub fn apply_move(&mut self, mv: Move) {
        let piece = self.board.square_at(mv.from).unwrap_or(Square::Empty);
        self.board.set(mv.to, piece);
        self.board.set(mv.from, Square::Empty);
    }

    /// Enumerates every legal move in this state.
    pub fn legal_moves(&self) -> FxHashSet<Move> {
        let mut moves = FxHashSet::default();
        for row in 0..crate::board::ROWS {
            for col in 0..crate::board::COLS {
                let from = Position::new(row, col);
                for direction in Direction::ALL {
                    if !self.board.can_move_in(from, direction) {
                        continue;
                    }
                    let to = from.translated(direction);
                    if !self.board.contains(to) {
                        continue;
                    }
                    let mv = Move::new(from, to);
                    if self.is_legal(mv) {
                        moves.insert(mv);
                    }
                }
            }
        }
        moves
    }

    /// True if the board matches the target arrangement.
    pub fn is_solved(&self) -> bool {
        self.board.is_target()
    }
}

/// Renders the start board and every board reached by `moves`, one
/// numbered step at a time.
///
/// The moves are assumed to be a legal sequence out of the start
/// configuration, as produced by the solver.
pub fn format_replay(moves: &[Move]) -> String {
    let mut state = PuzzleState::initial();
    let mut output = format!("Start:\n{state}");
    for (index, mv) in moves.iter().enumerate() {
        state.apply_move(*mv);
        output.push_str(&format!("\nMove {}: {}\n{}", index + 1, mv, state));
    }
    output
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl StateSpace for PuzzleState {
    type Move = Move;

    fn legal_moves(&self) -> FxHashSet<Move> {
        PuzzleState::legal_moves(self)
    }

    fn apply(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    fn is_goal(&self) -> bool {
        self.is_solved()
    }
}
