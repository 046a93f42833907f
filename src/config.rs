//! Configuration options for Monte Carlo training
//!
//! This module defines the parameters that control a training run and the
//! evaluation that usually follows it.

use crate::{MonteCarloError, Result};

/// Configuration for a Monte Carlo control run
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use montecarlo_tictactoe::TrainingConfig;
///
/// let config = TrainingConfig::default()
///     .with_max_iterations(60_000)
///     .with_discount(0.5)
///     .with_seed(100);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Number of episodes to generate
    pub max_iterations: usize,

    /// Discount factor gamma applied while walking an episode backward
    ///
    /// Must lie in `[0, 1]`.
    pub discount: f64,

    /// Number of games played by an evaluation
    pub evaluation_episodes: usize,

    /// Seed for the training RNG
    ///
    /// `None` seeds from system entropy, so runs are not reproducible.
    pub seed: Option<u64>,

    /// Upper bound on grids drawn while sampling one starting state
    pub max_sampling_attempts: usize,

    /// Log progress every this many iterations; `0` disables progress logs
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            max_iterations: 30_000,
            discount: 0.3,
            evaluation_episodes: 1_000,
            seed: None,
            max_sampling_attempts: 100_000,
            log_interval: 5_000,
        }
    }
}

impl TrainingConfig {
    /// Sets the number of training episodes
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the discount factor
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the number of evaluation games
    pub fn with_evaluation_episodes(mut self, episodes: usize) -> Self {
        self.evaluation_episodes = episodes;
        self
    }

    /// Sets a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the rejection-sampling cap
    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Sets the progress log cadence
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Checks that the parameters describe a runnable configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(MonteCarloError::InvalidConfiguration(format!(
                "discount must lie in [0, 1], got {}",
                self.discount
            )));
        }
        if self.max_iterations == 0 {
            return Err(MonteCarloError::InvalidConfiguration(
                "max_iterations must be positive".to_string(),
            ));
        }
        if self.evaluation_episodes == 0 {
            return Err(MonteCarloError::InvalidConfiguration(
                "evaluation_episodes must be positive".to_string(),
            ));
        }
        if self.max_sampling_attempts == 0 {
            return Err(MonteCarloError::InvalidConfiguration(
                "max_sampling_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
