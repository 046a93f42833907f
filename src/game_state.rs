//! Board representation for tic-tac-toe.
//!
//! A [`State`] is a small `Copy` value holding the 3x3 grid. It is never
//! mutated in place: every transition returns a new state, which lets it be
//! used directly as a key in the policy and value tables.

use std::fmt;

use crate::action::Action;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// One of the two players' symbols
///
/// `X` always moves first. An empty cell is represented as `None` in an
/// `Option<Mark>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other player's mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used when rendering the board
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Immutable tic-tac-toe board
///
/// Two states are equal iff their grids are cell-wise equal, and the derived
/// hash depends only on the nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct State {
    rows: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

/// Every winning line as (row, col) coordinates: rows, columns, diagonals
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

impl State {
    /// Creates the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows
    ///
    /// No validity check is performed; see [`State::is_valid`].
    pub fn from_rows(rows: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        State { rows }
    }

    /// Returns the content of a single cell
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.rows[row][col]
    }

    /// Returns a new state with `(row, col)` set to `mark`
    ///
    /// The cell is overwritten even if it was occupied. Callers are expected
    /// to pick coordinates from [`State::possible_actions`].
    pub fn put_mark(&self, row: usize, col: usize, mark: Mark) -> State {
        let mut rows = self.rows;
        rows[row][col] = Some(mark);
        State { rows }
    }

    /// Enumerates a `Play` action for every empty cell in row-major order
    ///
    /// The order is fixed so that seeded random choices are reproducible.
    pub fn possible_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    actions.push(Action::Play { row, col });
                }
            }
        }
        actions
    }

    /// Returns true if `mark` fills a full row, column or diagonal
    pub fn is_win(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.rows[r][c] == Some(mark)))
    }

    /// Returns the mark holding a winning line, checking `X` first
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&m| self.is_win(m))
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns true while at least one cell is empty
    pub fn has_space(&self) -> bool {
        self.rows.iter().flatten().any(|cell| cell.is_none())
    }

    /// Returns true once either mark has won or the board is full
    pub fn is_terminal(&self) -> bool {
        self.is_win(Mark::X) || self.is_win(Mark::O) || !self.has_space()
    }

    /// Reward from the perspective of `mark`
    ///
    /// `1.0` if `mark` has a line, `-1.0` if its opponent has one, `0.0`
    /// otherwise. Defined for every state, terminal or not.
    pub fn reward(&self, mark: Mark) -> f64 {
        if self.is_win(mark) {
            1.0
        } else if self.is_win(mark.opponent()) {
            -1.0
        } else {
            0.0
        }
    }

    /// Returns the mark to move next
    ///
    /// `X` has precedence whenever the counts are equal, including on the
    /// empty board.
    pub fn turn(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns true iff the mark counts differ by at most one
    pub fn is_valid(&self) -> bool {
        self.count(Mark::X).abs_diff(self.count(Mark::O)) <= 1
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cells) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = cell.map(Mark::symbol).unwrap_or(' ');
                write!(f, "[ {} ]", symbol)?;
            }
        }
        Ok(())
    }
}
