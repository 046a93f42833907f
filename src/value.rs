//! Sample-average action values
//!
//! The estimator keeps every observed return per `(state, action)` pair and
//! values an action by the arithmetic mean of its samples.

use std::collections::HashMap;

use crate::{action::Action, game_state::State, MonteCarloError, Result};

/// Returns observed for each action of a state, in first-recorded order
type ActionReturns = Vec<(Action, Vec<f64>)>;

/// Mapping from state to per-action lists of observed returns
///
/// Actions of a state are stored in the order their first return was
/// recorded. That order is the tie-break in [`ValueEstimator::best_action`],
/// which keeps training reproducible under a fixed seed.
#[derive(Debug, Clone, Default)]
pub struct ValueEstimator {
    returns: HashMap<State, ActionReturns>,
}

/// Mean of the recorded samples
///
/// The denominator is clamped to one, so an empty list is worth zero.
fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len().max(1) as f64
}

impl ValueEstimator {
    /// Creates an empty estimator
    pub fn new() -> Self {
        ValueEstimator {
            returns: HashMap::new(),
        }
    }

    /// Records one more return `g` for `(state, action)`
    ///
    /// Calling this twice with the same arguments records two samples.
    pub fn append_return(&mut self, state: State, action: Action, g: f64) {
        let actions = self.returns.entry(state).or_default();
        match actions.iter_mut().find(|(a, _)| *a == action) {
            Some((_, samples)) => samples.push(g),
            None => actions.push((action, vec![g])),
        }
    }

    /// Returns the action with the highest mean return in `state`
    ///
    /// Ties go to the action whose first return was recorded earliest.
    ///
    /// # Errors
    ///
    /// [`MonteCarloError::UnseenState`] if no return was ever recorded for
    /// `state`.
    pub fn best_action(&self, state: &State) -> Result<Action> {
        let mut best: Option<(Action, f64)> = None;

        for (action, samples) in self.returns.get(state).into_iter().flatten() {
            let value = mean(samples);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((*action, value)),
            }
        }

        best.map(|(action, _)| action)
            .ok_or(MonteCarloError::UnseenState)
    }

    /// Mean return of `(state, action)`, if it has any samples
    pub fn action_value(&self, state: &State, action: &Action) -> Option<f64> {
        self.returns(state, action).map(mean)
    }

    /// All returns recorded for `(state, action)`
    pub fn returns(&self, state: &State, action: &Action) -> Option<&[f64]> {
        self.returns
            .get(state)?
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, samples)| samples.as_slice())
    }

    /// Number of states with at least one recorded return
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Total number of recorded returns across all pairs
    pub fn sample_count(&self) -> usize {
        self.returns
            .values()
            .flatten()
            .map(|(_, samples)| samples.len())
            .sum()
    }
}
