pub mod balanced_winnow;
pub mod classifier_trait;

pub use balanced_winnow::{BalancedWinnowClassifier, ModelSnapshot};
pub use classifier_trait::OnlineClassifier;
