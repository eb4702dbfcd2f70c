//! Quiz Scoring Engine.
//!
//! Maps an ordered sequence of answer indices to a stream recommendation
//! with a percentage match, strengths and career suggestions. Scoring is a
//! pure function of its inputs; there is no hidden randomness and no
//! calibration.

use tracing::debug;

use crate::error::AppError;
use crate::models::{QuizQuestion, QuizResult, Stream};

/// Points awarded when the question category matches the stream's affinity
/// category, and in every other case.
const AFFINITY_POINTS: u32 = 3;
const BASE_POINTS: u32 = 2;

/// Static per-stream profile backing the result's strengths and careers.
struct StreamProfile {
    strengths: [&'static str; 3],
    careers: [&'static str; 5],
}

fn profile_for(stream: Stream) -> StreamProfile {
    match stream {
        Stream::Science => StreamProfile {
            strengths: [
                "Analytical Thinking",
                "Problem Solving",
                "Mathematical Skills",
            ],
            careers: ["Engineer", "Doctor", "Scientist", "Data Analyst", "Researcher"],
        },
        Stream::Commerce => StreamProfile {
            strengths: ["Business Acumen", "Financial Planning", "Leadership"],
            careers: [
                "CA/CPA",
                "Business Analyst",
                "Marketing Manager",
                "Entrepreneur",
                "Banker",
            ],
        },
        Stream::Arts => StreamProfile {
            strengths: ["Creative Thinking", "Communication", "Cultural Awareness"],
            careers: ["Writer", "Teacher", "Psychologist", "Journalist", "Designer"],
        },
        Stream::Vocational => StreamProfile {
            strengths: ["Practical Skills", "Hands-on Learning", "Technical Expertise"],
            careers: [
                "Digital Marketer",
                "Web Developer",
                "Chef",
                "Photographer",
                "Technician",
            ],
        },
    }
}

/// Scores a completed quiz pass.
///
/// `answers` and `questions` are parallel sequences: `answers[i]` is the
/// chosen option position (0..=3) for `questions[i]`. The option position,
/// not its text, determines the candidate stream (0 Science, 1 Commerce,
/// 2 Arts, 3 Vocational); the question category only modulates the weight.
/// Ties resolve to the earlier stream in [`Stream::ALL`] order.
///
/// A length mismatch, an empty quiz or an out-of-range answer index is a
/// contract violation and returns [`AppError::Validation`].
///
/// The percentage is `round(winner / (answers.len() * 3) * 100)` and is
/// deliberately left unclamped to match the original scoring rule; its
/// arithmetic ceiling is exactly 100 (every answer feeding the winner with
/// the affinity bonus), so clamping would never fire anyway.
pub fn score(answers: &[usize], questions: &[QuizQuestion]) -> Result<QuizResult, AppError> {
    if answers.len() != questions.len() {
        return Err(AppError::Validation(format!(
            "answer count {} does not match question count {}",
            answers.len(),
            questions.len()
        )));
    }
    if answers.is_empty() {
        return Err(AppError::Validation("cannot score an empty quiz".to_string()));
    }

    let mut totals = [0u32; 4];
    for (answer, question) in answers.iter().zip(questions) {
        let candidate = *Stream::ALL.get(*answer).ok_or_else(|| {
            AppError::Validation(format!("answer index {} outside 0..=3", answer))
        })?;
        let points = if question.category == candidate.affinity() {
            AFFINITY_POINTS
        } else {
            BASE_POINTS
        };
        totals[*answer] += points;
    }

    // Stable left-to-right maximum: the first-listed stream wins ties.
    let (winner_idx, winner_total) = totals
        .iter()
        .copied()
        .enumerate()
        .fold((0, totals[0]), |(best_idx, best), (idx, total)| {
            if total > best {
                (idx, total)
            } else {
                (best_idx, best)
            }
        });
    let winner = Stream::ALL[winner_idx];

    let max_possible = answers.len() as u32 * AFFINITY_POINTS;
    let percentage = ((winner_total as f64 / max_possible as f64) * 100.0).round() as u32;

    debug!(
        stream = winner.label(),
        science = totals[0],
        commerce = totals[1],
        arts = totals[2],
        vocational = totals[3],
        percentage,
        "Quiz scored"
    );

    let profile = profile_for(winner);
    Ok(QuizResult {
        stream: winner,
        score: percentage,
        strengths: profile.strengths.iter().map(|s| s.to_string()).collect(),
        recommended_careers: profile.careers.iter().map(|s| s.to_string()).collect(),
    })
}

/// Per-session quiz state: the growing answer record plus navigation.
///
/// Answers accumulate as the student advances and shrink on back-navigation;
/// the record never exceeds the question count and indices are checked at
/// the submission boundary (rejected, not erroring).
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    /// Records the answer for the current question and advances. Returns
    /// `false` without state change when the quiz is already complete or
    /// the index is outside 0..=3.
    pub fn answer(&mut self, option: usize) -> bool {
        if self.is_complete() || option > 3 {
            return false;
        }
        self.answers.push(option);
        true
    }

    /// Steps back one question, returning the previously chosen option so
    /// the presentation layer can restore the selection.
    pub fn back(&mut self) -> Option<usize> {
        self.answers.pop()
    }

    /// Index of the question currently awaiting an answer.
    pub fn current_question(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Scores the completed pass. Requesting a result before every question
    /// is answered is a contract violation.
    pub fn result(&self) -> Result<QuizResult, AppError> {
        if !self.is_complete() {
            return Err(AppError::Validation(format!(
                "quiz incomplete: {} of {} questions answered",
                self.answers.len(),
                self.questions.len()
            )));
        }
        score(&self.answers, &self.questions)
    }

    /// Discards the answer record for a retake. Any previously derived
    /// result is the caller's to drop.
    pub fn restart(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_score_is_deterministic() {
        let catalog = Catalog::seeded();
        let answers = vec![0, 1, 2, 3, 0];
        let first = score(&answers, catalog.questions()).unwrap();
        let second = score(&answers, catalog.questions()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let catalog = Catalog::seeded();
        let result = score(&[0, 1], catalog.questions());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let catalog = Catalog::seeded();
        let result = score(&[0, 0, 0, 0, 4], catalog.questions());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_session_navigation() {
        let catalog = Catalog::seeded();
        let mut session = QuizSession::new(catalog.questions().to_vec());

        assert!(session.answer(0));
        assert!(session.answer(2));
        assert_eq!(session.current_question(), 2);

        assert_eq!(session.back(), Some(2));
        assert_eq!(session.current_question(), 1);

        assert!(!session.answer(4));
        assert_eq!(session.answers(), &[0]);
    }
}
