//! the game-state machine behind the board
//!
//! Everything here is synchronous and renderer agnostic: the UI feeds input
//! events into a [`PuzzleSession`] and re-renders from its [`Snapshot`].

use thiserror::Error;

pub use models::*;
pub use session::*;
mod models;
mod session;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// the exact same phrase is already in the history, no attempt consumed
    #[error("already tried {0}")]
    DuplicateGuess(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle has no words")]
    NoWords,
    #[error("word #{index} is empty")]
    EmptyWord { index: usize },
    #[error("{word:?} has characters outside a-z")]
    InvalidWord { word: String },
    #[error("acronym {acronym:?} doesn't match the words, expected {expected:?}")]
    AcronymMismatch { acronym: String, expected: String },
}

/// the puzzle source couldn't deliver, the fallback puzzle takes over
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleSourceError {
    #[error("puzzle source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed puzzle: {0}")]
    Malformed(#[from] PuzzleError),
    #[error("puzzle source timed out")]
    TimedOut,
}
