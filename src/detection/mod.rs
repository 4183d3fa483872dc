//! Scam detection.

pub mod classifier;

pub use classifier::{SCAM_KEYWORDS, ScamClassifier, is_scam};
