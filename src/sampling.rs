//! Random starting positions for training episodes.
//!
//! Positions are drawn by rejection: every cell is chosen uniformly from
//! {X, O, empty} and the grid is discarded unless it is valid (and, when
//! requested, non-terminal).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    game_state::{Mark, State, BOARD_SIZE},
    MonteCarloError, Result,
};

const CELL_CHOICES: [Option<Mark>; 3] = [Some(Mark::X), Some(Mark::O), None];

/// Draws a uniformly random grid, valid or not
fn random_grid<R: Rng + ?Sized>(rng: &mut R) -> State {
    let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
    for cell in rows.iter_mut().flatten() {
        *cell = CELL_CHOICES.choose(rng).copied().flatten();
    }
    State::from_rows(rows)
}

/// Samples a valid random state
///
/// With `non_terminal` set, terminal states are rejected as well.
///
/// # Errors
///
/// [`MonteCarloError::SamplingExhausted`] if no acceptable state was drawn
/// within `max_attempts` tries.
pub fn random_state<R: Rng + ?Sized>(
    rng: &mut R,
    non_terminal: bool,
    max_attempts: usize,
) -> Result<State> {
    random_state_with_attempts(rng, non_terminal, max_attempts).map(|(state, _)| state)
}

/// Like [`random_state`], also returning how many grids were drawn
pub fn random_state_with_attempts<R: Rng + ?Sized>(
    rng: &mut R,
    non_terminal: bool,
    max_attempts: usize,
) -> Result<(State, usize)> {
    for attempt in 1..=max_attempts {
        let state = random_grid(rng);
        if !state.is_valid() || (non_terminal && state.is_terminal()) {
            continue;
        }
        return Ok((state, attempt));
    }

    Err(MonteCarloError::SamplingExhausted(max_attempts))
}
