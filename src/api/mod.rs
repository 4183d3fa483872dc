//! HTTP boundary: authentication, request parsing, response shaping.

pub mod routes;

pub use routes::{API_KEY_HEADER, AnalyzeRequest, AnalyzeResponse, ApiState, honeypot_routes};
