use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// One of the four broad post-secondary academic tracks.
///
/// The declaration order is a contract: quiz tie-breaks resolve to the
/// earlier variant, so reordering these changes scoring behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
    Vocational,
}

impl Stream {
    /// All streams, in tie-break order.
    pub const ALL: [Stream; 4] = [
        Stream::Science,
        Stream::Commerce,
        Stream::Arts,
        Stream::Vocational,
    ];

    /// Returns a human-readable label for the stream.
    pub fn label(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
            Stream::Vocational => "Vocational",
        }
    }

    /// The question category that earns this stream the 3-point affinity
    /// bonus instead of the base 2 points.
    pub fn affinity(&self) -> QuizCategory {
        match self {
            Stream::Science => QuizCategory::Analytical,
            Stream::Commerce => QuizCategory::Interpersonal,
            Stream::Arts => QuizCategory::Creative,
            Stream::Vocational => QuizCategory::Practical,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aptitude category tag attached to each quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizCategory {
    Logical,
    Creative,
    Analytical,
    Interpersonal,
    Practical,
}

/// A single aptitude quiz question with exactly four ordered options.
///
/// The option *position* (0..=3) is what the scoring engine consumes; the
/// option text is presentation-only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizQuestion {
    pub id: String,
    #[validate(length(min = 1))]
    pub question: String,
    pub options: [String; 4],
    pub category: QuizCategory,
}

/// Outcome of a completed quiz pass. Derived, never stored; replaced
/// wholesale on retake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub stream: Stream,
    /// Integer percentage match for the winning stream.
    pub score: u32,
    pub strengths: Vec<String>,
    pub recommended_careers: Vec<String>,
}

/// An immutable course catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Course {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub duration: String,
    pub eligibility: String,
    pub career_paths: Vec<String>,
    /// Average annual salary in rupees.
    pub average_salary: u32,
    pub stream: Stream,
}

/// Ownership category of a college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeType {
    Government,
    Private,
    Deemed,
}

/// Medium of instruction offered by a college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medium {
    English,
    Hindi,
    Regional,
}

/// Geographic coordinates. Carried as data only; the core performs no
/// distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// An immutable college catalog entry. Courses are shared references into
/// the catalog's course list; colleges do not own course lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct College {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub location: String,
    pub college_type: CollegeType,
    pub courses: Vec<Arc<Course>>,
    /// Annual fees in rupees.
    pub fees: u32,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
    pub has_hostel: bool,
    pub medium: Vec<Medium>,
    pub coordinates: Coordinates,
    pub image: String,
}

/// Kind of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Admission,
    Exam,
    Scholarship,
}

/// Urgency of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A deadline or milestone shown on the timeline. The `completed` flag is
/// the only mutable catalog state, toggled through a session-owned planner
/// copy (see [`crate::timeline::Planner`]), never through the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub priority: Priority,
    pub completed: bool,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message within a conversation session. Never mutated after
/// creation; the history is append-only and cleared wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Authentication context passed in by the presentation layer.
///
/// The core never validates or derives this; it only branches on
/// `authenticated` to personalize phrasing with `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    pub authenticated: bool,
    pub name: String,
}

impl AuthContext {
    /// An anonymous visitor.
    pub fn guest() -> Self {
        Self {
            authenticated: false,
            name: "Student".to_string(),
        }
    }

    /// A signed-in student with a display name.
    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            name: name.into(),
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::guest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_order_is_tiebreak_order() {
        assert_eq!(Stream::ALL[0], Stream::Science);
        assert_eq!(Stream::ALL[1], Stream::Commerce);
        assert_eq!(Stream::ALL[2], Stream::Arts);
        assert_eq!(Stream::ALL[3], Stream::Vocational);
    }

    #[test]
    fn test_stream_affinity_mapping() {
        assert_eq!(Stream::Science.affinity(), QuizCategory::Analytical);
        assert_eq!(Stream::Commerce.affinity(), QuizCategory::Interpersonal);
        assert_eq!(Stream::Arts.affinity(), QuizCategory::Creative);
        assert_eq!(Stream::Vocational.affinity(), QuizCategory::Practical);
    }

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hello");
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "hello");

        let bot = ChatMessage::bot("hi there");
        assert_eq!(bot.sender, Sender::Bot);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn test_college_rating_validation() {
        let college = College {
            id: "x".to_string(),
            name: "Test College".to_string(),
            location: "Nowhere".to_string(),
            college_type: CollegeType::Private,
            courses: vec![],
            fees: 100_000,
            rating: 7.5,
            has_hostel: false,
            medium: vec![Medium::English],
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            image: String::new(),
        };
        assert!(college.validate().is_err());
    }
}
