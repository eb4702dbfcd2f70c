//! Catalog Store.
//!
//! Read-only in-memory collections of quiz questions, courses, colleges and
//! timeline events. The catalog is explicitly constructed and injected into
//! the engines that need it; it is never a process-wide singleton, performs
//! no logic itself, and is supplied once at session start (no refresh or
//! invalidation protocol).

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::models::{
    College, CollegeType, Coordinates, Course, EventType, Medium, Priority, QuizCategory,
    QuizQuestion, Stream, TimelineEvent,
};

/// Immutable record store backing the quiz, filter and timeline engines.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<QuizQuestion>,
    courses: Vec<Arc<Course>>,
    colleges: Vec<College>,
    events: Vec<TimelineEvent>,
}

impl Catalog {
    /// Builds a catalog from explicit record collections, validating every
    /// record up front. An invalid record (empty name, rating outside 0-5)
    /// is a contract violation from the data supplier.
    pub fn new(
        questions: Vec<QuizQuestion>,
        courses: Vec<Arc<Course>>,
        colleges: Vec<College>,
        events: Vec<TimelineEvent>,
    ) -> Result<Self, AppError> {
        for question in &questions {
            question.validate()?;
        }
        for course in &courses {
            course.validate()?;
        }
        for college in &colleges {
            college.validate()?;
        }
        info!(
            questions = questions.len(),
            courses = courses.len(),
            colleges = colleges.len(),
            events = events.len(),
            "Catalog constructed"
        );
        Ok(Self {
            questions,
            courses,
            colleges,
            events,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn courses(&self) -> &[Arc<Course>] {
        &self.courses
    }

    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// The production fixture dataset: five quiz questions, four courses,
    /// three colleges and four timeline events.
    pub fn seeded() -> Self {
        let questions = seed_questions();
        let courses = seed_courses();
        let colleges = seed_colleges(&courses);
        let events = seed_events();
        // The fixture is known-valid, so construction cannot fail.
        Self::new(questions, courses, colleges, events)
            .unwrap_or_else(|e| unreachable!("seed dataset failed validation: {e}"))
    }
}

fn seed_questions() -> Vec<QuizQuestion> {
    let q = |id: &str, question: &str, options: [&str; 4], category: QuizCategory| QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.map(str::to_string),
        category,
    };
    vec![
        q(
            "1",
            "What type of problems do you enjoy solving the most?",
            [
                "Mathematical equations and formulas",
                "Creative design challenges",
                "Understanding human behavior",
                "Building or fixing things",
            ],
            QuizCategory::Analytical,
        ),
        q(
            "2",
            "Which activity sounds most interesting to you?",
            [
                "Conducting scientific experiments",
                "Managing a business project",
                "Writing stories or articles",
                "Learning a new skill or trade",
            ],
            QuizCategory::Practical,
        ),
        q(
            "3",
            "In group projects, you usually:",
            [
                "Handle the research and data analysis",
                "Take charge and organize the team",
                "Come up with creative ideas",
                "Focus on practical implementation",
            ],
            QuizCategory::Interpersonal,
        ),
        q(
            "4",
            "What type of work environment appeals to you?",
            [
                "Laboratory or research facility",
                "Corporate office or business setting",
                "Art studio or creative space",
                "Workshop or technical facility",
            ],
            QuizCategory::Practical,
        ),
        q(
            "5",
            "Which subject combination interests you most?",
            [
                "Physics, Chemistry, Mathematics",
                "Economics, Business Studies, Accountancy",
                "History, Literature, Psychology",
                "Computer Applications, Engineering Drawing",
            ],
            QuizCategory::Analytical,
        ),
    ]
}

fn seed_courses() -> Vec<Arc<Course>> {
    let c = |id: &str,
             name: &str,
             duration: &str,
             eligibility: &str,
             career_paths: &[&str],
             average_salary: u32,
             stream: Stream| {
        Arc::new(Course {
            id: id.to_string(),
            name: name.to_string(),
            duration: duration.to_string(),
            eligibility: eligibility.to_string(),
            career_paths: career_paths.iter().map(|s| s.to_string()).collect(),
            average_salary,
            stream,
        })
    };
    vec![
        c(
            "1",
            "B.Tech Computer Science",
            "4 years",
            "12th with PCM (75%+)",
            &[
                "Software Engineer",
                "Data Scientist",
                "AI Specialist",
                "Product Manager",
            ],
            800_000,
            Stream::Science,
        ),
        c(
            "2",
            "BBA",
            "3 years",
            "12th (50%+)",
            &[
                "Business Analyst",
                "Marketing Manager",
                "Operations Manager",
                "Entrepreneur",
            ],
            500_000,
            Stream::Commerce,
        ),
        c(
            "3",
            "B.A. Psychology",
            "3 years",
            "12th (45%+)",
            &[
                "Clinical Psychologist",
                "Counselor",
                "HR Specialist",
                "Researcher",
            ],
            400_000,
            Stream::Arts,
        ),
        c(
            "4",
            "Diploma in Digital Marketing",
            "1 year",
            "12th (40%+)",
            &[
                "Digital Marketer",
                "Social Media Manager",
                "Content Creator",
                "SEO Specialist",
            ],
            350_000,
            Stream::Vocational,
        ),
    ]
}

fn seed_colleges(courses: &[Arc<Course>]) -> Vec<College> {
    vec![
        College {
            id: "1".to_string(),
            name: "Indian Institute of Technology Delhi".to_string(),
            location: "New Delhi, Delhi".to_string(),
            college_type: CollegeType::Government,
            courses: vec![courses[0].clone()],
            fees: 200_000,
            rating: 4.8,
            has_hostel: true,
            medium: vec![Medium::English],
            coordinates: Coordinates {
                lat: 28.5449,
                lng: 77.1928,
            },
            image: "https://images.pexels.com/photos/1454360/pexels-photo-1454360.jpeg".to_string(),
        },
        College {
            id: "2".to_string(),
            name: "Delhi University".to_string(),
            location: "New Delhi, Delhi".to_string(),
            college_type: CollegeType::Government,
            courses: vec![courses[1].clone(), courses[2].clone()],
            fees: 50_000,
            rating: 4.5,
            has_hostel: true,
            medium: vec![Medium::English, Medium::Hindi],
            coordinates: Coordinates {
                lat: 28.6857,
                lng: 77.2167,
            },
            image: "https://images.pexels.com/photos/256490/pexels-photo-256490.jpeg".to_string(),
        },
        College {
            id: "3".to_string(),
            name: "Symbiosis International University".to_string(),
            location: "Pune, Maharashtra".to_string(),
            college_type: CollegeType::Private,
            courses: vec![courses[1].clone(), courses[3].clone()],
            fees: 300_000,
            rating: 4.3,
            has_hostel: true,
            medium: vec![Medium::English],
            coordinates: Coordinates {
                lat: 18.5596,
                lng: 73.8131,
            },
            image: "https://images.pexels.com/photos/1438081/pexels-photo-1438081.jpeg".to_string(),
        },
    ]
}

fn seed_events() -> Vec<TimelineEvent> {
    let e = |id: &str,
             title: &str,
             description: &str,
             date: (i32, u32, u32),
             event_type: EventType,
             priority: Priority| {
        TimelineEvent {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            // Fixture dates are static and known-valid.
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap_or_else(|| unreachable!("invalid fixture date")),
            event_type,
            priority,
            completed: false,
        }
    };
    vec![
        e(
            "1",
            "JEE Main Registration",
            "Registration opens for JEE Main 2024",
            (2024, 2, 1),
            EventType::Exam,
            Priority::High,
        ),
        e(
            "2",
            "NEET Application",
            "Last date to apply for NEET 2024",
            (2024, 2, 15),
            EventType::Exam,
            Priority::High,
        ),
        e(
            "3",
            "DU Admission Process",
            "Delhi University admission process begins",
            (2024, 3, 1),
            EventType::Admission,
            Priority::Medium,
        ),
        e(
            "4",
            "Merit Scholarship",
            "Application deadline for merit-based scholarships",
            (2024, 3, 15),
            EventType::Scholarship,
            Priority::Medium,
        ),
    ]
}
