//! winnow-classifiers: online, mistake-driven linear classifiers.
//!
//! The crate provides the Balanced Winnow binary classifier, which sees one
//! example at a time, predicts its label from the sign of a margin and
//! updates its two weight vectors multiplicatively whenever the prediction
//! was wrong. Models size themselves from the first feature vector they see.
//!
//! Around the model live small supporting modules: hyper-parameter
//! configuration (with JSON loading), a checked dot product, the crate error
//! type and an `env_logger` setup helper.
//!
//! ```
//! use winnow_classifiers::{BalancedWinnowClassifier, OnlineClassifier, WinnowConfig};
//!
//! let mut model = BalancedWinnowClassifier::new(WinnowConfig::default()).unwrap();
//! for _ in 0..5 {
//!     model.learn(true, &[1.0, 0.0, 1.0]).unwrap();
//!     model.learn(false, &[0.0, 1.0, 0.0]).unwrap();
//! }
//! assert!(model.predict(&[1.0, 0.0, 1.0]).unwrap());
//! assert!(!model.predict(&[0.0, 1.0, 0.0]).unwrap());
//! ```
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod models;

pub use config::{load_config, WinnowConfig};
pub use error::{Result, WinnowError};
pub use models::{BalancedWinnowClassifier, ModelSnapshot, OnlineClassifier};
