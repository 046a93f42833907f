//! # montecarlo-tictactoe
//!
//! Monte Carlo control for the game of tic-tac-toe.
//!
//! This crate trains a decision policy by playing complete games from random
//! starting positions, recording the discounted return observed after each
//! move, and greedily switching the policy to the move with the best mean
//! return.
//!
//! ## Features
//!
//! - Immutable, hashable board states usable as table keys
//! - Policies that fall back to uniform random play on unseen states
//! - Episode rollout between a learner (always X) and a fixed opponent
//! - Every-visit Monte Carlo control with a configurable discount factor
//! - Seeded, reproducible training and evaluation
//!
//! ## Basic Usage
//!
//! ```
//! use montecarlo_tictactoe::{evaluation::win_rate_against, MonteCarlo, Policy, TrainingConfig};
//!
//! fn main() -> Result<(), montecarlo_tictactoe::MonteCarloError> {
//!     // Keep the doctest quick: a real run uses the default 30 000 iterations
//!     let config = TrainingConfig::default()
//!         .with_max_iterations(500)
//!         .with_seed(100);
//!
//!     let random = Policy::new();
//!     let mut trainer = MonteCarlo::new(config).with_opponent(random.clone());
//!     let trained = trainer.train()?;
//!
//!     println!("{}", trainer.statistics().summary());
//!
//!     let rate = win_rate_against(&trained, &random, 100, trainer.rng_mut())?;
//!     assert!((0.0..=100.0).contains(&rate));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Each training iteration:
//!
//! 1. **Sampling**: draw a random valid, non-terminal board and a random legal
//!    first move for it.
//!
//! 2. **Rollout**: play the game out. The learner plays X, the opponent plays
//!    O. The episode records the state before every X move together with
//!    that move, and ends with the terminal state paired with `NoOp`.
//!
//! 3. **Backward pass**: walk the episode from the end, accumulating
//!    `g = gamma * g + reward_x(next_state)`, and append `g` to the returns
//!    of the preceding `(state, action)` pair.
//!
//! 4. **Improvement**: set the learner's action at that state to the action
//!    with the highest mean return.
//!
//! ## Rendering
//!
//! ```
//! use montecarlo_tictactoe::{Action, Mark, State};
//!
//! let state = Action::Play { row: 1, col: 1 }.apply(&State::new(), Mark::X);
//! assert_eq!(
//!     state.to_string(),
//!     "[   ][   ][   ]\n[   ][ x ][   ]\n[   ][   ][   ]"
//! );
//! ```

pub mod action;
pub mod config;
pub mod evaluation;
pub mod game_state;
pub mod monte_carlo;
pub mod policy;
pub mod sampling;
pub mod stats;
pub mod value;

pub use action::Action;
pub use config::TrainingConfig;
pub use evaluation::{play_matches, win_rate_against, MatchOutcomes};
pub use game_state::{Mark, State};
pub use monte_carlo::MonteCarlo;
pub use policy::{Episode, Policy};
pub use stats::TrainingStatistics;
pub use value::ValueEstimator;

/// Error types for training and evaluation
#[derive(thiserror::Error, Debug)]
pub enum MonteCarloError {
    /// An unseen state has no legal actions
    #[error("No legal actions available from current state")]
    NoLegalActions,

    /// A rollout was requested from a finished game
    #[error("Cannot play an episode from a terminal state")]
    TerminalState,

    /// The initial move of a rollout is not legal in its starting state
    #[error("Illegal initial action: {0}")]
    IllegalAction(Action),

    /// The best action was requested for a state without recorded returns
    #[error("No returns recorded for state")]
    UnseenState,

    /// Rejection sampling did not find an acceptable state
    #[error("No acceptable random state found after {0} attempts")]
    SamplingExhausted(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for training operations
pub type Result<T> = std::result::Result<T, MonteCarloError>;
