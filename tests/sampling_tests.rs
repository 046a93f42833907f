use montecarlo_tictactoe::sampling::{random_state, random_state_with_attempts};
use montecarlo_tictactoe::{Mark, MonteCarloError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_sampled_states_are_valid_and_open() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..2_000 {
        let state = random_state(&mut rng, true, 100_000).unwrap();
        assert!(state.is_valid());
        assert!(!state.is_terminal());
        assert!(!state.possible_actions().is_empty());
        assert!(state.count(Mark::X).abs_diff(state.count(Mark::O)) <= 1);
    }
}

#[test]
fn test_terminal_states_allowed_when_requested() {
    let mut rng = ChaCha20Rng::seed_from_u64(43);

    let mut saw_terminal = false;
    for _ in 0..2_000 {
        let state = random_state(&mut rng, false, 100_000).unwrap();
        assert!(state.is_valid());
        saw_terminal |= state.is_terminal();
    }
    assert!(saw_terminal);
}

#[test]
fn test_same_seed_same_states() {
    let mut a = ChaCha20Rng::seed_from_u64(7);
    let mut b = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..100 {
        assert_eq!(
            random_state(&mut a, true, 100_000).unwrap(),
            random_state(&mut b, true, 100_000).unwrap()
        );
    }
}

#[test]
fn test_attempts_are_reported_and_capped() {
    let mut rng = ChaCha20Rng::seed_from_u64(44);

    let (_, attempts) = random_state_with_attempts(&mut rng, true, 100_000).unwrap();
    assert!(attempts >= 1);

    // A single draw cannot always succeed
    let mut failures = 0;
    for _ in 0..200 {
        match random_state(&mut rng, true, 1) {
            Err(MonteCarloError::SamplingExhausted(1)) => failures += 1,
            Err(e) => panic!("unexpected error: {}", e),
            Ok(state) => assert!(state.is_valid() && !state.is_terminal()),
        }
    }
    assert!(failures > 0);
}
