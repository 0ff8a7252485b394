//! Core data models for Orangutan Quest.
//! Records produced by the content generator and the entries kept on the leaderboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points awarded for each correctly answered question.
pub const POINTS_PER_CORRECT: u32 = 10;
/// Number of questions asked of the generator per quiz.
pub const QUIZ_LENGTH: usize = 5;
/// Number of fact cards asked of the generator.
pub const FACT_COUNT: usize = 6;
/// Level label stamped on every saved score.
pub const SAVED_LEVEL_LABEL: &str = "Super Star!";

/// One multiple-choice question. Field names follow the generator's JSON schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    /// Display order is generation order.
    pub options: Vec<String>,
    /// Must equal exactly one entry of `options`.
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionDefect {
    #[error("only {0} option(s), need at least 2")]
    TooFewOptions(usize),
    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),
    #[error("correct answer {0:?} is not one of the options")]
    AnswerNotAnOption(String),
}

impl QuizQuestion {
    pub fn validate(&self) -> Result<(), QuestionDefect> {
        if self.options.len() < 2 {
            return Err(QuestionDefect::TooFewOptions(self.options.len()));
        }
        for (i, opt) in self.options.iter().enumerate() {
            if self.options[..i].contains(opt) {
                return Err(QuestionDefect::DuplicateOption(opt.clone()));
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionDefect::AnswerNotAnOption(self.correct_answer.clone()));
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }
}

/// A "Did you know?" card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunFact {
    pub title: String,
    pub fact: String,
    /// Short display glyph, usually a single emoji.
    pub emoji: String,
}

/// A saved leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: String,
    pub name: String,
    pub score: u32,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub level: String,
}

impl ScoreEntry {
    /// Builds an entry for a finished quiz. Returns `None` when the name is blank.
    pub fn for_player(id: String, name: &str, score: u32, date: String) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id,
            name: name.to_string(),
            score,
            date,
            level: SAVED_LEVEL_LABEL.to_string(),
        })
    }
}
