//! Statistics collection for training runs
//!
//! This module provides a structure for collecting and reporting statistics
//! about a Monte Carlo control run.

use std::time::Duration;

/// Statistics collected during training
#[derive(Debug, Clone)]
pub struct TrainingStatistics {
    /// Number of episodes generated
    pub iterations: usize,

    /// Total time spent training
    pub total_time: Duration,

    /// Sum of episode lengths, terminal steps included
    pub episode_steps: usize,

    /// Number of returns appended to the value estimator
    pub returns_recorded: usize,

    /// Number of states with a learned action at the end of training
    pub states_learned: usize,

    /// Number of random grids drawn to find the starting states
    pub sampling_attempts: usize,
}

impl TrainingStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        TrainingStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            episode_steps: 0,
            returns_recorded: 0,
            states_learned: 0,
            sampling_attempts: 0,
        }
    }

    /// Returns the mean number of steps per episode
    pub fn avg_episode_length(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.episode_steps as f64 / self.iterations as f64
    }

    /// Returns the number of iterations per second
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Monte Carlo Training Statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Avg episode length: {:.2} steps\n\
             - Returns recorded: {}\n\
             - States learned: {}\n\
             - Sampling attempts: {}\n\
             - Iterations per second: {:.1}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.avg_episode_length(),
            self.returns_recorded,
            self.states_learned,
            self.sampling_attempts,
            self.iterations_per_second()
        )
    }
}

impl Default for TrainingStatistics {
    fn default() -> Self {
        Self::new()
    }
}
