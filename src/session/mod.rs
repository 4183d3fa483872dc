//! Conversation sessions and the store that owns them.

pub mod model;
pub mod store;

pub use model::{
    HONEYPOT_SENDER, IntelCategory, IntelligenceLog, Session, SessionMemory, Turn,
};
pub use store::{SessionGuard, SessionStore};
