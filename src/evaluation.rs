//! Head-to-head evaluation of two policies.

use std::fmt;

use log::debug;
use rand::Rng;

use crate::{
    game_state::{Mark, State},
    policy::Policy,
    MonteCarloError, Result,
};

/// Outcome counts of a series of games, seen from X
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcomes {
    /// Games whose final state holds an X line
    pub x_wins: usize,

    /// Games whose final state holds an O line
    pub o_wins: usize,

    /// Games that filled the board without a line
    pub draws: usize,

    /// Total number of games played
    pub games: usize,
}

impl MatchOutcomes {
    fn percentage(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        100.0 * count as f64 / self.games as f64
    }

    /// Percentage of games won by X
    pub fn win_rate(&self) -> f64 {
        self.percentage(self.x_wins)
    }

    /// Percentage of games won by O
    pub fn loss_rate(&self) -> f64 {
        self.percentage(self.o_wins)
    }

    /// Percentage of games without a winner
    pub fn draw_rate(&self) -> f64 {
        self.percentage(self.draws)
    }
}

impl fmt::Display for MatchOutcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {:.1}% won, {:.1}% lost, {:.1}% drawn",
            self.games,
            self.win_rate(),
            self.loss_rate(),
            self.draw_rate()
        )
    }
}

/// Plays `episodes` games from the empty board and tallies the results
///
/// `player` supplies the opening move and plays X, `opponent` plays O.
pub fn play_matches<R: Rng + ?Sized>(
    player: &Policy,
    opponent: &Policy,
    episodes: usize,
    rng: &mut R,
) -> Result<MatchOutcomes> {
    if episodes == 0 {
        return Err(MonteCarloError::InvalidConfiguration(
            "evaluation needs at least one episode".to_string(),
        ));
    }

    let initial_state = State::new();
    let mut outcomes = MatchOutcomes::default();

    for _ in 0..episodes {
        let opening = player.get_action(&initial_state, rng)?;
        let episode = player.play_against(opponent, initial_state, opening, rng)?;

        match episode.winner() {
            Some(Mark::X) => outcomes.x_wins += 1,
            Some(Mark::O) => outcomes.o_wins += 1,
            None => outcomes.draws += 1,
        }
        outcomes.games += 1;
    }

    debug!("evaluation finished: {}", outcomes);
    Ok(outcomes)
}

/// Percentage of `episodes` games from the empty board won by `player`
///
/// `player` provides the opening move and therefore always plays X.
pub fn win_rate_against<R: Rng + ?Sized>(
    player: &Policy,
    opponent: &Policy,
    episodes: usize,
    rng: &mut R,
) -> Result<f64> {
    play_matches(player, opponent, episodes, rng).map(|outcomes| outcomes.win_rate())
}
