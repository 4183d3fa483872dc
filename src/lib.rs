//! Scam honeypot: conversation-state engine plus a thin HTTP boundary.

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod intel;
pub mod orchestrator;
pub mod replies;
pub mod session;
