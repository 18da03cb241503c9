use anyhow::Result;

use winnow_classifiers::logging::init_logging;
use winnow_classifiers::{load_config, BalancedWinnowClassifier, WinnowConfig};

fn main() -> Result<()> {
    init_logging("error,winnow_classifiers=debug");

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => WinnowConfig::default(),
    };
    let mut clf = BalancedWinnowClassifier::new(config)?;
    println!("{}", clf);

    // Tiny stream: positive when feature 0 or 2 is on
    let stream = [
        (true, [1.0, 0.0, 0.0, 1.0]),
        (false, [0.0, 1.0, 0.0, 1.0]),
        (true, [0.0, 0.0, 1.0, 0.0]),
        (false, [0.0, 1.0, 0.0, 0.0]),
        (true, [1.0, 1.0, 0.0, 0.0]),
        (false, [0.0, 0.0, 0.0, 1.0]),
    ];

    let mut mistakes = 0;
    for epoch in 0..5 {
        for (label, x) in &stream {
            if clf.predict(x)? != *label {
                mistakes += 1;
            }
            clf.learn(*label, x)?;
        }
        println!("epoch {}: {} mistakes so far", epoch, mistakes);
    }

    let snapshot = clf.snapshot();
    println!("u = {:?}", snapshot.positive);
    println!("v = {:?}", snapshot.negative);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
