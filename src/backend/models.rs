use serde::{Deserialize, Serialize};

use crate::game::{Puzzle, PuzzleError};

/// one catalog entry as it travels over the wire
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub acronym: String,
    pub words: Vec<String>,
    pub category: Option<String>,
}

pub type PuzzleCatalog = Vec<PuzzleRecord>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub word: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReply {
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

impl TryFrom<PuzzleRecord> for Puzzle {
    type Error = PuzzleError;

    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        let puzzle = Puzzle::new(&record.words, record.category)?;
        let acronym = record.acronym.trim().to_ascii_uppercase();
        if !acronym.is_empty() && acronym != puzzle.acronym() {
            return Err(PuzzleError::AcronymMismatch {
                acronym,
                expected: puzzle.acronym(),
            });
        }
        Ok(puzzle)
    }
}

impl From<&Puzzle> for PuzzleRecord {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            acronym: puzzle.acronym(),
            words: puzzle.words().to_vec(),
            category: puzzle.category().map(String::from),
        }
    }
}
