//! First-match-wins evaluation of the advisor rule cascade.
//!
//! Deterministic except for the fallback branch, which draws uniformly from
//! a fixed 3-element response pool. The random source is an explicit
//! parameter so tests can seed it.

use rand::Rng;
use tracing::debug;

use super::rules::{Rule, FALLBACK_RESPONSES, RULES};
use crate::models::AuthContext;

pub struct AdvisorEngine {
    rules: &'static [Rule],
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisorEngine {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Produces the response for one message using the thread-local RNG for
    /// the fallback branch.
    pub fn respond(&self, input: &str, auth: &AuthContext) -> String {
        self.respond_with_rng(input, auth, &mut rand::thread_rng())
    }

    /// Produces the response for one message. The first rule whose keyword
    /// predicate passes short-circuits the cascade; `rng` is consulted only
    /// when no rule fires.
    pub fn respond_with_rng<R: Rng + ?Sized>(
        &self,
        input: &str,
        auth: &AuthContext,
        rng: &mut R,
    ) -> String {
        let lowered = input.to_lowercase();
        for rule in self.rules {
            if rule.matches(&lowered) {
                debug!(rule = rule.name, "Advisor rule matched");
                return (rule.respond)(&lowered, auth);
            }
        }
        debug!("No advisor rule matched, using fallback pool");
        let pick = rng.gen_range(0..FALLBACK_RESPONSES.len());
        FALLBACK_RESPONSES[pick].to_string()
    }

    /// Name of the rule that would claim `input`, if any. Used for logging
    /// and behavioral tests; `None` means the fallback pool would answer.
    pub fn match_rule(&self, input: &str) -> Option<&'static str> {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.name)
    }
}
