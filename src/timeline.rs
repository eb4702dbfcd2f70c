//! Timeline planner.
//!
//! Session-scoped view over the catalog's timeline events. Events are the
//! only catalog entities with in-session mutable state: the student can
//! toggle completion. The planner works on its own copy, so the injected
//! catalog stays read-only and independent sessions never observe each
//! other's toggles.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Priority, TimelineEvent};

#[derive(Debug, Clone)]
pub struct Planner {
    events: Vec<TimelineEvent>,
}

impl Planner {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            events: catalog.events().to_vec(),
        }
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Flips the completed flag of the event with the given id. Returns the
    /// new state, or `None` when no such event exists (ignored, not an
    /// error).
    pub fn toggle(&mut self, event_id: &str) -> Option<bool> {
        let event = self.events.iter_mut().find(|e| e.id == event_id)?;
        event.completed = !event.completed;
        debug!(event_id, completed = event.completed, "Timeline event toggled");
        Some(event.completed)
    }

    /// Count of open high-priority deadlines, shown as the "urgent" badge.
    pub fn urgent_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.priority == Priority::High && !e.completed)
            .count()
    }

    pub fn completed_count(&self) -> usize {
        self.events.iter().filter(|e| e.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let catalog = Catalog::seeded();
        let mut planner = Planner::from_catalog(&catalog);

        assert_eq!(planner.toggle("1"), Some(true));
        assert_eq!(planner.completed_count(), 1);
        assert_eq!(planner.toggle("1"), Some(false));
        assert_eq!(planner.completed_count(), 0);
    }

    #[test]
    fn test_unknown_event_ignored() {
        let catalog = Catalog::seeded();
        let mut planner = Planner::from_catalog(&catalog);
        assert_eq!(planner.toggle("404"), None);
    }

    #[test]
    fn test_planner_does_not_mutate_catalog() {
        let catalog = Catalog::seeded();
        let mut planner = Planner::from_catalog(&catalog);
        planner.toggle("2");
        assert!(catalog.events().iter().all(|e| !e.completed));
    }

    #[test]
    fn test_urgent_badge_counts_open_high_priority() {
        let catalog = Catalog::seeded();
        let mut planner = Planner::from_catalog(&catalog);
        assert_eq!(planner.urgent_count(), 2);
        planner.toggle("1");
        assert_eq!(planner.urgent_count(), 1);
    }
}
