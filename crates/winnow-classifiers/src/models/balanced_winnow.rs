//! Balanced Winnow: a mistake-driven online linear classifier.
//!
//! The model keeps a positive weight vector `u` and a negative weight vector
//! `v` and predicts the positive class when
//! `dot(x, u) - dot(x, v) - threshold >= 0`. On a mistake, weights of the
//! features that are on (`x[i] > 0`) are scaled multiplicatively: the model
//! that should have been trusted is promoted, the other one demoted.
//!
//! Reference: Carvalho & Cohen, "Single-pass online learning: performance,
//! voting schemes and online feature selection" (KDD 2006).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{validate_demotion, validate_promotion, validate_threshold, WinnowConfig};
use crate::error::{Result, WinnowError};
use crate::math::dot;
use crate::models::classifier_trait::OnlineClassifier;

/// Paired weight vectors; both always have the same non-zero length.
#[derive(Debug, Clone, PartialEq)]
struct Weights {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl Weights {
    /// Starting point for `dimension` features: `u = 2t/d`, `v = t/d`.
    fn uniform(dimension: usize, threshold: f64) -> Self {
        let d = dimension as f64;
        Self {
            positive: vec![2.0 * threshold / d; dimension],
            negative: vec![threshold / d; dimension],
        }
    }

    fn from_parts(positive: Vec<f64>, negative: Vec<f64>) -> Result<Self> {
        if positive.len() != negative.len() {
            return Err(WinnowError::WeightLengthMismatch {
                positive: positive.len(),
                negative: negative.len(),
            });
        }
        if positive.is_empty() {
            return Err(WinnowError::ZeroDimension);
        }
        Ok(Self { positive, negative })
    }

    fn dimension(&self) -> usize {
        self.positive.len()
    }

    fn margin(&self, features: &[f64], threshold: f64) -> Result<f64> {
        Ok(dot(&self.positive, features)? - dot(&self.negative, features)? - threshold)
    }
}

/// Copy of a classifier's full state, suitable for persistence.
///
/// Empty weight vectors stand for a model that has not seen any data yet.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ModelSnapshot {
    #[serde(flatten)]
    pub config: WinnowConfig,
    #[serde(default)]
    pub positive: Vec<f64>,
    #[serde(default)]
    pub negative: Vec<f64>,
}

/// Balanced Winnow binary classifier.
///
/// Weights are allocated lazily from the length of the first feature vector
/// passed to [`predict`](Self::predict) or [`learn`](Self::learn); every
/// later vector must have that same length until [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use winnow_classifiers::BalancedWinnowClassifier;
///
/// let mut model = BalancedWinnowClassifier::default();
/// assert!(!model.predict(&[1.0, 0.0]).unwrap());
///
/// model.learn(true, &[1.0, 0.0]).unwrap();
/// assert_eq!(model.positive_weights(), Some(&[1.5, 1.0][..]));
/// assert_eq!(model.negative_weights(), Some(&[0.25, 0.5][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalancedWinnowClassifier {
    config: WinnowConfig,
    weights: Option<Weights>,
}

impl BalancedWinnowClassifier {
    /// Create an untrained classifier, validating the hyper-parameters.
    pub fn new(config: WinnowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            weights: None,
        })
    }

    pub fn with_params(promotion: f64, demotion: f64, threshold: f64) -> Result<Self> {
        Self::new(WinnowConfig::new(promotion, demotion, threshold))
    }

    /// Rebuild a classifier from a [`ModelSnapshot`].
    pub fn restore(snapshot: ModelSnapshot) -> Result<Self> {
        let mut model = Self::new(snapshot.config)?;
        if !(snapshot.positive.is_empty() && snapshot.negative.is_empty()) {
            model.weights = Some(Weights::from_parts(snapshot.positive, snapshot.negative)?);
        }
        log::debug!(
            "Restored balanced winnow model ({}) with dimension {:?}",
            model.config,
            model.dimension()
        );
        Ok(model)
    }

    /// Copy out hyper-parameters and weights.
    pub fn snapshot(&self) -> ModelSnapshot {
        let (positive, negative) = match &self.weights {
            Some(weights) => (weights.positive.clone(), weights.negative.clone()),
            None => (Vec::new(), Vec::new()),
        };
        ModelSnapshot {
            config: self.config,
            positive,
            negative,
        }
    }

    /// Allocate the weights on first use, or check `dimension` against them.
    fn ensure_initialized(&mut self, dimension: usize) -> Result<&mut Weights> {
        if let Some(weights) = &self.weights {
            if weights.dimension() != dimension {
                return Err(WinnowError::DimensionMismatch {
                    expected: weights.dimension(),
                    got: dimension,
                });
            }
        } else if dimension == 0 {
            return Err(WinnowError::ZeroDimension);
        }

        let threshold = self.config.threshold;
        Ok(self.weights.get_or_insert_with(|| {
            let weights = Weights::uniform(dimension, threshold);
            log::debug!(
                "Initialized balanced winnow weights: dimension={}, u={}, v={}",
                dimension,
                weights.positive[0],
                weights.negative[0]
            );
            weights
        }))
    }

    /// Predict the label of `features`, initializing the model if needed.
    ///
    /// Ties (a margin of exactly zero) go to the positive class.
    pub fn predict(&mut self, features: &[f64]) -> Result<bool> {
        let threshold = self.config.threshold;
        let weights = self.ensure_initialized(features.len())?;
        Ok(weights.margin(features, threshold)? >= 0.0)
    }

    /// Margin of `features` against the current weights, without side effects.
    pub fn margin(&self, features: &[f64]) -> Result<f64> {
        let weights = self.weights.as_ref().ok_or(WinnowError::Uninitialized)?;
        weights.margin(features, self.config.threshold)
    }

    /// Predict `features` and, if the prediction disagrees with `label`,
    /// rescale the weights of every strictly positive feature.
    pub fn learn(&mut self, label: bool, features: &[f64]) -> Result<()> {
        let WinnowConfig {
            promotion,
            demotion,
            threshold,
        } = self.config;
        let weights = self.ensure_initialized(features.len())?;
        let predicted = weights.margin(features, threshold)? >= 0.0;
        if predicted == label {
            return Ok(());
        }

        // A false positive shifts mass to the negative model, a false negative to the positive one.
        let (positive_factor, negative_factor) = if predicted {
            (demotion, promotion)
        } else {
            (promotion, demotion)
        };

        let mut active = 0usize;
        for ((&x, u), v) in features
            .iter()
            .zip(weights.positive.iter_mut())
            .zip(weights.negative.iter_mut())
        {
            if x > 0.0 {
                *u *= positive_factor;
                *v *= negative_factor;
                active += 1;
            }
        }

        log::trace!(
            "{} step on {} of {} features",
            if predicted { "Demotion" } else { "Promotion" },
            active,
            features.len()
        );
        Ok(())
    }

    /// Drop the weights; the next call re-derives the dimensionality.
    pub fn reset(&mut self) {
        if let Some(weights) = self.weights.take() {
            log::debug!("Reset balanced winnow model (dimension was {})", weights.dimension());
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.weights.is_some()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.weights.as_ref().map(Weights::dimension)
    }

    /// Positive model `u`.
    pub fn positive_weights(&self) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| w.positive.as_slice())
    }

    /// Negative model `v`.
    pub fn negative_weights(&self) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| w.negative.as_slice())
    }

    /// Replace both weight vectors at once. They must be non-empty and of
    /// equal length; later feature vectors must match that length.
    pub fn set_weights(&mut self, positive: Vec<f64>, negative: Vec<f64>) -> Result<()> {
        self.weights = Some(Weights::from_parts(positive, negative)?);
        Ok(())
    }

    pub fn config(&self) -> WinnowConfig {
        self.config
    }

    pub fn set_config(&mut self, config: WinnowConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn promotion(&self) -> f64 {
        self.config.promotion
    }

    pub fn set_promotion(&mut self, promotion: f64) -> Result<()> {
        validate_promotion(promotion)?;
        self.config.promotion = promotion;
        Ok(())
    }

    pub fn demotion(&self) -> f64 {
        self.config.demotion
    }

    pub fn set_demotion(&mut self, demotion: f64) -> Result<()> {
        validate_demotion(demotion)?;
        self.config.demotion = demotion;
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Existing weights are kept as they are; only the margin offset and the
    /// next initialization see the new threshold.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        validate_threshold(threshold)?;
        self.config.threshold = threshold;
        Ok(())
    }
}

impl fmt::Display for BalancedWinnowClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BalancedWinnowClassifier [{}]", self.config)
    }
}

impl OnlineClassifier for BalancedWinnowClassifier {
    fn predict(&mut self, features: &[f64]) -> Result<bool> {
        BalancedWinnowClassifier::predict(self, features)
    }

    fn learn(&mut self, label: bool, features: &[f64]) -> Result<()> {
        BalancedWinnowClassifier::learn(self, label, features)
    }

    fn reset(&mut self) {
        BalancedWinnowClassifier::reset(self)
    }

    fn name(&self) -> &str {
        "balanced_winnow"
    }
}
