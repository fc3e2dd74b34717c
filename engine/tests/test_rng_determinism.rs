//! Tests for SimRng determinism
//!
//! Stochastic schedules are only reproducible if the generator under
//! them is: same seed, same stream, always.

use neural_sim_core_rs::SimRng;

#[test]
fn test_same_seed_same_stream() {
    let mut rng1 = SimRng::new(42);
    let mut rng2 = SimRng::new(42);

    for _ in 0..1000 {
        assert_eq!(rng1.next(), rng2.next());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = SimRng::new(42);
    let mut rng2 = SimRng::new(43);

    let stream1: Vec<u64> = (0..100).map(|_| rng1.next()).collect();
    let stream2: Vec<u64> = (0..100).map(|_| rng2.next()).collect();
    assert_ne!(stream1, stream2);
}

#[test]
fn test_state_snapshot_resumes_stream() {
    let mut rng = SimRng::new(42);
    for _ in 0..10 {
        rng.next();
    }

    let mut resumed = SimRng::new(rng.state());
    assert_eq!(rng.next(), resumed.next());
    assert_eq!(rng.next(), resumed.next());
}

#[test]
fn test_zero_seed_is_usable() {
    let mut rng = SimRng::new(0);

    // A zero state would make xorshift emit zeros forever
    let values: Vec<u64> = (0..10).map(|_| rng.next()).collect();
    assert!(values.iter().any(|&v| v != 0));
}

#[test]
fn test_exponential_mean_tracks_rate() {
    let mut rng = SimRng::new(7);
    let rate = 4.0;
    let n = 20_000;

    let total: f64 = (0..n).map(|_| rng.exponential(rate)).sum();
    let mean = total / n as f64;

    // Expected mean is 1/rate; loose bound, this is a sanity check
    assert!(
        (mean - 1.0 / rate).abs() < 0.02,
        "sample mean {} too far from {}",
        mean,
        1.0 / rate
    );
}
