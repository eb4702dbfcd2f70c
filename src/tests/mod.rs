//! Test Module
//!
//! Behavioral test suite for the EduPath core.
//!
//! ## Test Categories
//! - `quiz_tests`: scoring algorithm, tie-breaks, boundaries, session navigation
//! - `filter_tests`: criteria composition, idempotence, monotonicity
//! - `advisor_tests`: rule priority, personalization, fallback behavior
//! - `session_tests`: turn-taking, mutual exclusion, failure substitution

pub mod filter_tests;

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG` so a failing test can be
/// rerun with log output visible. Tests run in one process; repeat installs
/// are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
