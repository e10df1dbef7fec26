//! Core data model types for cheatquiz.
//!
//! A cheatsheet parses into an ordered list of [`Record`]s; each one is a
//! single question with every answer the quiz accepts for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One question from the cheatsheet.
///
/// Field order is also the key order of the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Text of the most recent `## ` header above the question, or empty.
    pub category: String,
    /// The question as written, inline backtick spans included.
    pub question: String,
    /// Accepted answers, in source order. Never empty.
    #[serde(rename = "solution")]
    pub answers: Vec<String>,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        answers: Vec<String>,
    ) -> Self {
        Self {
            category: category.into(),
            question: question.into(),
            answers,
        }
    }

    /// Whether `guess` equals one of the accepted answers exactly.
    ///
    /// No trimming and no case folding: `"dd "` does not match `"dd"`.
    pub fn accepts(&self, guess: &str) -> bool {
        self.answers.iter().any(|a| a == guess)
    }

    /// All accepted answers joined by `", "`.
    pub fn answer_list(&self) -> String {
        self.answers.join(", ")
    }
}

/// How many questions a session asks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// A quick round of ten questions.
    Flash,
    /// A standard round of fifty questions.
    Regular,
    /// Every question in the cheatsheet.
    #[default]
    All,
}

impl GameMode {
    /// Maximum number of questions, `None` meaning no limit.
    pub fn question_limit(self) -> Option<usize> {
        match self {
            GameMode::Flash => Some(10),
            GameMode::Regular => Some(50),
            GameMode::All => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Flash => write!(f, "flash"),
            GameMode::Regular => write!(f, "regular"),
            GameMode::All => write!(f, "all"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flash" => Ok(GameMode::Flash),
            "regular" => Ok(GameMode::Regular),
            "all" | "master" => Ok(GameMode::All),
            other => Err(format!("unknown game mode: {other}")),
        }
    }
}
