//! Episode rollout between two policies
//!
//! An episode is the trace of one game as `(state, action)` pairs. Every
//! non-terminal pair holds the state before X moves together with X's move;
//! O's replies only show up through the state of the following pair. The
//! trace always ends with `(terminal_state, Action::NoOp)`.

use std::fmt;

use log::trace;
use rand::Rng;

use super::Policy;
use crate::{
    action::Action,
    game_state::{Mark, State},
    MonteCarloError, Result,
};

/// Ordered `(state, action)` trace of one game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Episode {
    /// Steps in forward order
    pub steps: Vec<(State, Action)>,
}

impl Episode {
    /// Creates an empty episode
    pub fn new() -> Self {
        Episode { steps: Vec::new() }
    }

    /// Appends a step
    pub fn push(&mut self, state: State, action: Action) {
        self.steps.push((state, action));
    }

    /// Number of recorded steps, including the terminal one
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no step was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The state of the last step
    pub fn terminal_state(&self) -> Option<&State> {
        self.steps.last().map(|(state, _)| state)
    }

    /// The mark holding a line in the final state, if any
    pub fn winner(&self) -> Option<Mark> {
        self.terminal_state().and_then(State::winner)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (state, _)) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", state)?;
            write!(f, "--------------------------")?;
        }
        Ok(())
    }
}

impl Policy {
    /// Plays one full game from `initial_state` against `opponent`
    ///
    /// `self` owns `initial_action` and always plays X; `opponent` always
    /// plays O. When `initial_state.turn()` is O the opponent moves first and
    /// `initial_action` is used for X's first reply, unless the opponent has
    /// just taken that cell, in which case X draws a fresh action from
    /// `self`.
    ///
    /// # Errors
    ///
    /// * [`MonteCarloError::TerminalState`] if `initial_state` is terminal
    /// * [`MonteCarloError::IllegalAction`] if `initial_action` is not a legal
    ///   move in `initial_state`
    pub fn play_against<R: Rng + ?Sized>(
        &self,
        opponent: &Policy,
        initial_state: State,
        initial_action: Action,
        rng: &mut R,
    ) -> Result<Episode> {
        if initial_state.is_terminal() {
            return Err(MonteCarloError::TerminalState);
        }
        if !initial_action.is_legal(&initial_state) {
            return Err(MonteCarloError::IllegalAction(initial_action));
        }

        let mut episode = Episode::new();
        let mut state = initial_state;

        if initial_state.turn() == Mark::X {
            let mut action = initial_action;
            loop {
                episode.push(state, action);
                state = action.apply(&state, Mark::X);
                if state.is_terminal() {
                    episode.push(state, Action::NoOp);
                    break;
                }

                state = opponent.get_action(&state, rng)?.apply(&state, Mark::O);
                if state.is_terminal() {
                    episode.push(state, Action::NoOp);
                    break;
                }

                action = self.get_action(&state, rng)?;
            }
        } else {
            let mut pending = Some(initial_action);
            loop {
                state = opponent.get_action(&state, rng)?.apply(&state, Mark::O);
                if state.is_terminal() {
                    episode.push(state, Action::NoOp);
                    break;
                }

                let action = match pending.take() {
                    Some(action) if action.is_legal(&state) => action,
                    _ => self.get_action(&state, rng)?,
                };
                episode.push(state, action);
                state = action.apply(&state, Mark::X);
                if state.is_terminal() {
                    episode.push(state, Action::NoOp);
                    break;
                }
            }
        }

        trace!(
            "episode finished after {} steps, winner {:?}",
            episode.len(),
            episode.winner()
        );
        Ok(episode)
    }
}
