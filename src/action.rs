//! Moves that can be applied to a board.

use std::fmt;

use crate::game_state::{Mark, State, BOARD_SIZE};

/// A move descriptor
///
/// `NoOp` only appears as the padding action paired with the terminal state
/// at the end of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a mark at `(row, col)`
    Play { row: usize, col: usize },

    /// Leave the state unchanged
    NoOp,
}

impl Action {
    /// Applies this action for `mark`, returning the resulting state
    ///
    /// `Play` does not check that the target cell is empty.
    pub fn apply(&self, state: &State, mark: Mark) -> State {
        match *self {
            Action::Play { row, col } => state.put_mark(row, col, mark),
            Action::NoOp => *state,
        }
    }

    /// Returns true if this action places a mark on an empty cell of `state`
    ///
    /// Coordinates off the board are never legal.
    pub fn is_legal(&self, state: &State) -> bool {
        match *self {
            Action::Play { row, col } if row >= BOARD_SIZE || col >= BOARD_SIZE => false,
            Action::Play { row, col } => state.cell(row, col).is_none(),
            Action::NoOp => false,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play { row, col } => write!(f, "Play({}, {})", row, col),
            Action::NoOp => write!(f, "NoOp"),
        }
    }
}
