//! Training experiment for Monte Carlo tic-tac-toe
//!
//! Trains one policy against a random opponent, a second one against the
//! first, and prints how each fares. Run with `RUST_LOG=debug` to see
//! training progress.

use montecarlo_tictactoe::{
    play_matches, sampling::random_state, MonteCarlo, MonteCarloError, Policy, TrainingConfig,
};

fn main() -> Result<(), MonteCarloError> {
    // Initialize logging
    env_logger::init();

    println!("Monte Carlo Tic-Tac-Toe");
    println!("=======================");
    println!();

    let config = TrainingConfig::default().with_seed(100);
    let episodes = config.evaluation_episodes;

    // A fresh random policy, never shared with the trainers
    let pi_rand = Policy::new();

    let mut trainer = MonteCarlo::new(config.clone()).with_opponent(pi_rand.clone());
    let pi1 = trainer.train()?;
    println!("pi1 (vs random)\n{}\n", trainer.statistics().summary());

    let mut trainer = MonteCarlo::new(config.clone().with_seed(101)).with_opponent(pi1.clone());
    let pi2 = trainer.train()?;
    println!("pi2 (vs pi1)\n{}\n", trainer.statistics().summary());

    let rng = trainer.rng_mut();
    let matches = [
        ("random vs random", &pi_rand, &pi_rand),
        ("pi1 vs random", &pi1, &pi_rand),
        ("pi2 vs random", &pi2, &pi_rand),
        ("pi2 vs pi2", &pi2, &pi2),
        ("pi2 vs pi1", &pi2, &pi1),
    ];
    for (label, player, opponent) in matches {
        let outcomes = play_matches(player, opponent, episodes, rng)?;
        println!("{:<18} {}", label, outcomes);
    }
    println!();

    println!("Sample episode (pi2 vs random):");
    let initial_state = random_state(rng, true, config.max_sampling_attempts)?;
    let opening = pi2.get_action(&initial_state, rng)?;
    let episode = pi2.play_against(&pi_rand, initial_state, opening, rng)?;
    println!("{}", episode);

    match episode.winner() {
        Some(mark) => println!("Player {} wins!", mark),
        None => println!("The game is a draw!"),
    }

    Ok(())
}
