//! Monte Carlo control loop
//!
//! Each iteration samples a random non-terminal starting state and a random
//! first move, rolls out a full episode between the learner and its
//! opponent, then walks the episode backward accumulating the discounted
//! return. Every `(state, action)` pair gets the return recorded in the
//! value estimator and the learner's policy is immediately switched to the
//! best action known for that state.

use std::time::Instant;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::{
    config::TrainingConfig,
    game_state::Mark,
    policy::{Episode, Policy},
    sampling::random_state_with_attempts,
    stats::TrainingStatistics,
    value::ValueEstimator,
    MonteCarloError, Result,
};

/// Trainer for a tic-tac-toe policy playing X
///
/// Returns are always computed from X's point of view, matching the episode
/// layout where the learner owns every recorded move.
pub struct MonteCarlo {
    /// Configuration for training
    config: TrainingConfig,

    /// Fixed policy playing O during rollouts
    opponent: Policy,

    /// Source of every random choice made during training
    rng: ChaCha20Rng,

    /// Statistics gathered during the last training run
    statistics: TrainingStatistics,
}

impl MonteCarlo {
    /// Creates a trainer that plays against a fresh random policy
    pub fn new(config: TrainingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        MonteCarlo {
            config,
            opponent: Policy::new(),
            rng,
            statistics: TrainingStatistics::new(),
        }
    }

    /// Sets the fixed opponent policy
    pub fn with_opponent(mut self, opponent: Policy) -> Self {
        self.opponent = opponent;
        self
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Returns the statistics of the last call to [`MonteCarlo::train`]
    pub fn statistics(&self) -> &TrainingStatistics {
        &self.statistics
    }

    /// Mutable access to the trainer's RNG
    ///
    /// Lets evaluation continue the same seeded random stream after training.
    pub fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }

    /// Runs the configured number of iterations and returns the learned policy
    ///
    /// Each call starts from an empty policy and an empty value estimator.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, when the state sampler exhausts its
    /// attempts, or when an internal invariant of the rollout or the backward
    /// pass is violated. Any error aborts the run.
    pub fn train(&mut self) -> Result<Policy> {
        self.config.validate()?;

        let mut policy = Policy::new();
        let mut value = ValueEstimator::new();
        self.statistics = TrainingStatistics::new();

        info!(
            "training for {} iterations, discount {}, opponent knows {} states",
            self.config.max_iterations,
            self.config.discount,
            self.opponent.len()
        );

        let start_time = Instant::now();

        for i in 0..self.config.max_iterations {
            let (initial_state, attempts) = random_state_with_attempts(
                &mut self.rng,
                true,
                self.config.max_sampling_attempts,
            )?;
            let initial_action = *initial_state
                .possible_actions()
                .choose(&mut self.rng)
                .ok_or(MonteCarloError::NoLegalActions)?;

            let episode =
                policy.play_against(&self.opponent, initial_state, initial_action, &mut self.rng)?;

            let recorded = self.improve(&episode, &mut policy, &mut value)?;

            self.statistics.iterations = i + 1;
            self.statistics.episode_steps += episode.len();
            self.statistics.returns_recorded += recorded;
            self.statistics.sampling_attempts += attempts;

            if self.config.log_interval > 0 && (i + 1) % self.config.log_interval == 0 {
                debug!(
                    "iteration {}: {} states learned, {} returns recorded",
                    i + 1,
                    policy.len(),
                    value.sample_count()
                );
            }
        }

        self.statistics.total_time = start_time.elapsed();
        self.statistics.states_learned = policy.len();

        info!(
            "training finished: {} states learned in {:.3} seconds",
            policy.len(),
            self.statistics.total_time.as_secs_f64()
        );

        Ok(policy)
    }

    /// Walks `episode` backward, recording returns and updating `policy`
    ///
    /// The reward of the state at step `t` is credited to the pair at step
    /// `t - 1`, i.e. to the move that led there. Returns the number of
    /// returns recorded.
    fn improve(
        &self,
        episode: &Episode,
        policy: &mut Policy,
        value: &mut ValueEstimator,
    ) -> Result<usize> {
        let gamma = self.config.discount;
        let mut g = 0.0;
        let mut recorded = 0;

        for t in (1..episode.len()).rev() {
            let (next_state, _) = episode.steps[t];
            g = gamma * g + next_state.reward(Mark::X);

            let (state, action) = episode.steps[t - 1];
            value.append_return(state, action, g);
            policy.set_action(state, value.best_action(&state)?);
            recorded += 1;
        }

        Ok(recorded)
    }
}
