//! # Advisor Module
//!
//! Rule-based conversational guidance for EduPath. Selects a response
//! category for each free-text message through an ordered keyword cascade;
//! no language model and no semantic inference.
//!
//! ## Components
//! - `rules`: the ordered (keywords, responder) rule list and response texts
//! - `engine`: first-match-wins evaluation with a randomized fallback

pub mod engine;
pub mod rules;

pub use engine::AdvisorEngine;
