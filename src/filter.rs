//! Filter Engine.
//!
//! A single stable-order filtering mechanism shared by the college, course
//! and timeline views. Criteria are ANDed; an absent or default criterion
//! always passes, and an empty result set is a valid outcome rather than an
//! error. No pagination and no reordering beyond input order.

use serde::{Deserialize, Serialize};

use crate::models::{
    College, CollegeType, Course, EventType, Medium, Priority, Stream, TimelineEvent,
};

/// A predicate set applicable to catalog records of type `T`.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Applies `criteria` to `items`, preserving relative order.
pub fn apply<'a, T>(items: &'a [T], criteria: &impl Criteria<T>) -> Vec<&'a T> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Search and filter fields for the college directory. Mirrors the filter
/// panel: free-text search over name and location, plus structured fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollegeCriteria {
    /// Case-insensitive substring matched against name or location.
    pub search: String,
    pub college_type: Option<CollegeType>,
    /// Require this medium of instruction to be offered.
    pub medium: Option<Medium>,
    /// When set, only colleges with hostel facilities pass.
    pub hostel_only: bool,
    /// Upper bound on annual fees, inclusive.
    pub max_fees: Option<u32>,
}

impl Criteria<College> for CollegeCriteria {
    fn matches(&self, college: &College) -> bool {
        let matches_search = self.search.is_empty()
            || contains_ignore_case(&college.name, &self.search)
            || contains_ignore_case(&college.location, &self.search);
        let matches_type = self
            .college_type
            .map_or(true, |t| college.college_type == t);
        let matches_medium = self
            .medium
            .map_or(true, |m| college.medium.contains(&m));
        let matches_hostel = !self.hostel_only || college.has_hostel;
        let matches_fees = self.max_fees.map_or(true, |max| college.fees <= max);

        matches_search && matches_type && matches_medium && matches_hostel && matches_fees
    }
}

/// Search and filter fields for the course explorer: name search plus an
/// optional stream tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseCriteria {
    /// Case-insensitive substring matched against the course name only.
    pub search: String,
    pub stream: Option<Stream>,
}

impl Criteria<Course> for CourseCriteria {
    fn matches(&self, course: &Course) -> bool {
        let matches_search =
            self.search.is_empty() || contains_ignore_case(&course.name, &self.search);
        let matches_stream = self.stream.map_or(true, |s| course.stream == s);
        matches_search && matches_stream
    }
}

/// The timeline page's filters: an event-type tab ANDed with an optional
/// priority selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventCriteria {
    pub event_type: Option<EventType>,
    pub priority: Option<Priority>,
}

impl Criteria<TimelineEvent> for EventCriteria {
    fn matches(&self, event: &TimelineEvent) -> bool {
        let matches_type = self.event_type.map_or(true, |t| event.event_type == t);
        let matches_priority = self.priority.map_or(true, |p| event.priority == p);
        matches_type && matches_priority
    }
}

// Shared course references filter the same way as owned records.
impl<T, C: Criteria<T>> Criteria<std::sync::Arc<T>> for C {
    fn matches(&self, item: &std::sync::Arc<T>) -> bool {
        Criteria::<T>::matches(self, item.as_ref())
    }
}
