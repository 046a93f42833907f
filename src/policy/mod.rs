//! Policies mapping board states to actions
//!
//! A [`Policy`] is partly learned and partly random: states it has an entry
//! for return the stored action, every other state falls back to a uniform
//! choice among the legal moves. Episode generation lives in [`episode`].

pub mod episode;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{action::Action, game_state::State, MonteCarloError, Result};

pub use episode::Episode;

/// Mapping from board state to chosen action
///
/// A freshly constructed policy has no entries and therefore plays uniformly
/// at random. Every caller that wants a random player builds its own
/// instance; there is no shared default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    state_actions: HashMap<State, Action>,
}

impl Policy {
    /// Creates an empty (uniformly random) policy
    pub fn new() -> Self {
        Policy {
            state_actions: HashMap::new(),
        }
    }

    /// Returns the action to play in `state`
    ///
    /// Uses the learned entry when one exists, otherwise draws uniformly from
    /// [`State::possible_actions`].
    ///
    /// # Errors
    ///
    /// [`MonteCarloError::NoLegalActions`] if the state is unseen and has no
    /// empty cell.
    pub fn get_action<R: Rng + ?Sized>(&self, state: &State, rng: &mut R) -> Result<Action> {
        if let Some(action) = self.state_actions.get(state) {
            return Ok(*action);
        }

        state
            .possible_actions()
            .choose(rng)
            .copied()
            .ok_or(MonteCarloError::NoLegalActions)
    }

    /// Inserts or overwrites the learned action for `state`
    pub fn set_action(&mut self, state: State, action: Action) {
        self.state_actions.insert(state, action);
    }

    /// Returns the learned action for `state`, if any
    pub fn learned_action(&self, state: &State) -> Option<Action> {
        self.state_actions.get(state).copied()
    }

    /// Number of states with a learned action
    pub fn len(&self) -> usize {
        self.state_actions.len()
    }

    /// Returns true if nothing has been learned yet
    pub fn is_empty(&self) -> bool {
        self.state_actions.is_empty()
    }
}
