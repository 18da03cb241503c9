//! Vector helpers backing the linear classifiers.
//!
//! Only the inner product is needed by the models; it checks lengths and
//! reports a mismatch as a `WinnowError` instead of panicking.
pub mod vector;

pub use vector::dot;
