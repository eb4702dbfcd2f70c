//! EduPath Advisor decision core.
//!
//! The recommendation and matching logic behind a student-facing guidance
//! tool: quiz scoring, catalog filtering, the rule-based chat advisor and
//! the conversation session that drives it. Rendering, navigation, auth
//! verification and persistence live in the consuming presentation layer;
//! everything here is in-memory and session-scoped.

pub mod advisor;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod models;
pub mod quiz;
pub mod session;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use advisor::AdvisorEngine;
pub use catalog::Catalog;
pub use error::AppError;
pub use session::{AdvisorGenerator, ChatSession, SessionState};
