use crate::error::Result;

/// Contract shared by single-example (online) binary classifiers.
///
/// Implementations see one feature vector at a time and update themselves
/// from the true label immediately; past examples are never revisited.
pub trait OnlineClassifier {
    /// Predict the label of `features` (`true` is the positive class).
    ///
    /// Takes `&mut self` because models may size themselves lazily from the
    /// first vector they see.
    fn predict(&mut self, features: &[f64]) -> Result<bool>;

    /// Incorporate the ground-truth `label` for `features`.
    fn learn(&mut self, label: bool, features: &[f64]) -> Result<()>;

    /// Forget everything learned so far.
    fn reset(&mut self);

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
