//! Intelligence extraction from scammer messages.

pub mod extractor;

pub use extractor::extract;
