//! Directions and board coordinates.
//!
//! A move on the board is always a single step to one of the 8 neighbouring
//! squares, so directions carry unit row/column deltas and a candidate step
//! can be classified by looking its delta pair back up in the direction
//! table.

/// The 8 compass directions a piece can step in.
///
/// Each direction is one cell of the 3x3 neighbourhood around a square,
/// excluding the centre. `ALL` lists them clockwise starting from `Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Returns the unit `(row, col)` delta for this direction.
    ///
    /// Row grows downward, column grows rightward.
    #[inline]
    pub const fn deltas(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Looks up the direction matching a `(row, col)` delta pair.
    ///
    /// Returns `None` for `(0, 0)` and for any delta outside the unit
    /// neighbourhood; a candidate move whose endpoints are not adjacent is
    /// rejected here rather than by a separate distance check.
    pub fn from_deltas(row_delta: i32, col_delta: i32) -> Option<Direction> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.deltas() == (row_delta, col_delta))
    }

    /// True for the 4 rook-like directions.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Right | Direction::Down | Direction::Left
        )
    }

    /// True for the 4 bishop-like directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_orthogonal()
    }

    /// Returns the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Right => Direction::Left,
            Direction::DownRight => Direction::UpLeft,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::Left => Direction::Right,
            Direction::UpLeft => Direction::DownRight,
        }
    }
}

/// A 0-based board coordinate.
///
/// Plain value type; translation does not check bounds, so a position may
/// lie outside the board and callers test `is_within` separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position one step away in `direction`.
    #[inline]
    pub const fn translated(self, direction: Direction) -> Position {
        let (row_delta, col_delta) = direction.deltas();
        Position::new(self.row + row_delta, self.col + col_delta)
    }

    /// True if this position lies inside a `rows` x `cols` grid.
    #[inline]
    pub const fn is_within(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.row < rows && self.col >= 0 && self.col < cols
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
