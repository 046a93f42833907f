use montecarlo_tictactoe::{
    evaluation::{play_matches, win_rate_against},
    sampling::random_state,
    MonteCarlo, MonteCarloError, Policy, TrainingConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const EVALUATION_EPISODES: usize = 1_000;

fn trained_against(opponent: &Policy, seed: u64) -> Policy {
    let config = TrainingConfig::default()
        .with_max_iterations(30_000)
        .with_discount(0.3)
        .with_seed(seed);

    MonteCarlo::new(config)
        .with_opponent(opponent.clone())
        .train()
        .expect("training should succeed")
}

#[test]
fn test_random_vs_random_has_both_outcomes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let random = Policy::new();
    let mut rng = ChaCha20Rng::seed_from_u64(100);

    let outcomes = play_matches(&random, &random, EVALUATION_EPISODES, &mut rng).unwrap();
    assert_eq!(outcomes.games, EVALUATION_EPISODES);
    assert_eq!(outcomes.x_wins + outcomes.o_wins + outcomes.draws, outcomes.games);

    let rate = outcomes.win_rate();
    assert!(rate > 0.0 && rate < 100.0, "win rate {} should be strictly inside (0, 100)", rate);
    assert!(outcomes.o_wins > 0);
    assert!(outcomes.draws > 0);
}

#[test]
fn test_training_beats_random_baseline() {
    let _ = env_logger::builder().is_test(true).try_init();

    let random = Policy::new();
    let trained = trained_against(&random, 100);

    let mut rng = ChaCha20Rng::seed_from_u64(200);
    let baseline = win_rate_against(&random, &random, EVALUATION_EPISODES, &mut rng).unwrap();
    let rate = win_rate_against(&trained, &random, EVALUATION_EPISODES, &mut rng).unwrap();

    assert!(
        rate > baseline + 10.0,
        "trained win rate {} should clearly exceed the random baseline {}",
        rate,
        baseline
    );
}

#[test]
fn test_training_against_trained_opponent_does_not_degrade() {
    let _ = env_logger::builder().is_test(true).try_init();

    let random = Policy::new();
    let first = trained_against(&random, 100);
    let second = trained_against(&first, 101);

    let mut rng = ChaCha20Rng::seed_from_u64(300);
    let baseline = win_rate_against(&random, &random, EVALUATION_EPISODES, &mut rng).unwrap();
    let rate = win_rate_against(&second, &random, EVALUATION_EPISODES, &mut rng).unwrap();

    assert!(
        rate >= baseline,
        "policy trained against a trained opponent ({}) fell below the random baseline ({})",
        rate,
        baseline
    );
}

#[test]
fn test_training_is_reproducible_with_seed() {
    let config = TrainingConfig::default()
        .with_max_iterations(2_000)
        .with_seed(5);

    let a = MonteCarlo::new(config.clone()).train().unwrap();
    let b = MonteCarlo::new(config).train().unwrap();

    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn test_each_run_starts_fresh() {
    let config = TrainingConfig::default()
        .with_max_iterations(1_000)
        .with_seed(9);
    let mut trainer = MonteCarlo::new(config);

    let _first = trainer.train().unwrap();
    let second = trainer.train().unwrap();

    // Statistics and learned tables cover the second run only
    let stats = trainer.statistics();
    assert_eq!(stats.iterations, 1_000);
    assert_eq!(stats.states_learned, second.len());
}

#[test]
fn test_statistics_track_the_run() {
    let config = TrainingConfig::default()
        .with_max_iterations(3_000)
        .with_seed(17)
        .with_log_interval(1_000);
    let mut trainer = MonteCarlo::new(config);

    let policy = trainer.train().unwrap();
    let stats = trainer.statistics();

    assert_eq!(stats.iterations, 3_000);
    assert_eq!(stats.states_learned, policy.len());
    // One return per step except the first of each episode
    assert_eq!(stats.returns_recorded, stats.episode_steps - stats.iterations);
    assert!(stats.sampling_attempts >= stats.iterations);
    assert!(stats.avg_episode_length() > 1.0);
    assert!(stats.summary().contains("Iterations: 3000"));
}

#[test]
fn test_learned_actions_are_legal() {
    let config = TrainingConfig::default()
        .with_max_iterations(5_000)
        .with_seed(23);
    let policy = MonteCarlo::new(config).train().unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(24);
    for _ in 0..500 {
        let state = random_state(&mut rng, true, 100_000).unwrap();
        if let Some(action) = policy.learned_action(&state) {
            assert!(action.is_legal(&state));
        }
    }
}

#[test]
fn test_invalid_configuration_aborts_training() {
    let config = TrainingConfig::default().with_discount(2.0);
    let result = MonteCarlo::new(config).train();

    assert!(matches!(result, Err(MonteCarloError::InvalidConfiguration(_))));
}

#[test]
fn test_zero_evaluation_episodes_rejected() {
    let random = Policy::new();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    assert!(win_rate_against(&random, &random, 0, &mut rng).is_err());
}
