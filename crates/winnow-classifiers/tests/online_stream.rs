//! End-to-end behaviour on a synthetic online stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use winnow_classifiers::logging::init_test_logging;
use winnow_classifiers::BalancedWinnowClassifier;

const N_FEATURES: usize = 20;
const N_EXAMPLES: usize = 2000;
const WINDOW: usize = 200;

/// Sparse binary examples labelled positive when feature 0 or 1 is on.
fn disjunction_stream(seed: u64) -> Vec<(bool, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..N_EXAMPLES)
        .map(|_| {
            let x: Vec<f64> = (0..N_FEATURES)
                .map(|_| if rng.gen_bool(0.2) { 1.0 } else { 0.0 })
                .collect();
            (x[0] > 0.0 || x[1] > 0.0, x)
        })
        .collect()
}

#[test]
fn mistakes_drop_as_the_stream_goes_on() {
    init_test_logging();
    let stream = disjunction_stream(42);
    let mut model = BalancedWinnowClassifier::default();

    let mut mistakes = Vec::with_capacity(N_EXAMPLES);
    for (label, x) in &stream {
        mistakes.push(model.predict(x).unwrap() != *label);
        model.learn(*label, x).unwrap();
    }

    let early = mistakes[..WINDOW].iter().filter(|&&m| m).count();
    let late = mistakes[N_EXAMPLES - WINDOW..].iter().filter(|&&m| m).count();
    assert!(early > 0, "the untrained model should make mistakes");
    assert!(late < early, "early mistakes: {}, late mistakes: {}", early, late);
}

#[test]
fn relevant_features_end_up_favouring_the_positive_model() {
    let stream = disjunction_stream(7);
    let mut model = BalancedWinnowClassifier::default();
    for (label, x) in &stream {
        model.learn(*label, x).unwrap();
    }

    let u = model.positive_weights().unwrap();
    let v = model.negative_weights().unwrap();
    for i in 0..2 {
        assert!(u[i] > v[i], "feature {}: u={} v={}", i, u[i], v[i]);
    }
    assert!(u.iter().chain(v.iter()).all(|w| w.is_finite() && *w > 0.0));
}
