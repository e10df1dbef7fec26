//! Quiz error types.
//!
//! These cover the fatal paths of a quiz run: a cheatsheet that cannot be
//! read, or a terminal stream that breaks mid-session. Lines that fail to
//! parse are not errors; they are skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or playing a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The cheatsheet file could not be opened or read.
    #[error("failed to read quiz source {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the answer or writing the dialogue failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if the error happened before any interaction started.
    pub fn is_source_error(&self) -> bool {
        matches!(self, QuizError::SourceUnreadable { .. })
    }
}
