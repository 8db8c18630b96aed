use super::PuzzleError;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_MAX_HINTS: usize = 2;
pub const DEFAULT_SUFFIX_CAP: usize = 9;

/// the phrase to reconstruct, immutable for the whole session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    words: Vec<String>,
    category: Option<String>,
}

impl Puzzle {
    /// lowercases every word and rejects anything outside `a-z`
    ///
    /// # Errors
    /// if there are no words, or a word is empty or has non-letters
    pub fn new<S: AsRef<str>>(words: &[S], category: Option<String>) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }
        let words = words
            .iter()
            .enumerate()
            .map(|(index, word)| normalize_word(index, word.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let category = category.filter(|c| !c.trim().is_empty());
        Ok(Self { words, category })
    }

    /// used whenever the puzzle source can't deliver, must stay playable offline
    pub fn fallback() -> Self {
        Self {
            words: ["on", "the", "way"].map(String::from).to_vec(),
            category: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// first letters, uppercase
    pub fn acronym(&self) -> String {
        self.words
            .iter()
            .filter_map(|w| w.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

fn normalize_word(index: usize, word: &str) -> Result<String, PuzzleError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord { index });
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PuzzleError::InvalidWord {
            word: word.to_string(),
        });
    }
    Ok(word.to_ascii_lowercase())
}

/// how many letters may be typed after the locked first letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuffixCap {
    /// exactly `len(word) - 1`, over-length input is dropped immediately
    Exact,
    /// a generous ceiling, allows over- and under-length guesses for feedback;
    /// never shorter than the word itself
    Fixed(usize),
}

impl SuffixCap {
    pub fn for_word(self, word: &str) -> usize {
        match self {
            SuffixCap::Exact => word.len().saturating_sub(1),
            SuffixCap::Fixed(cap) => cap.max(word.len().saturating_sub(1)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub max_hints: usize,
    pub suffix_cap: SuffixCap,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_hints: DEFAULT_MAX_HINTS,
            suffix_cap: SuffixCap::Fixed(DEFAULT_SUFFIX_CAP),
        }
    }
}

/// one target word's editable unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSlot {
    pub(super) target: String,
    pub(super) locked_prefix: char,
    pub(super) suffix: String,
    pub(super) max_suffix_len: usize,
    pub(super) solved: bool,
    pub(super) revealed_by_hint: bool,
}

impl WordSlot {
    pub(super) fn new(target: &str, cap: SuffixCap) -> Self {
        Self {
            target: target.to_string(),
            // `Puzzle::new` guarantees non-empty words
            locked_prefix: target.chars().next().unwrap_or('a'),
            suffix: String::new(),
            max_suffix_len: cap.for_word(target),
            solved: false,
            revealed_by_hint: false,
        }
    }

    /// locked prefix and suffix, lowercase
    pub(super) fn guess(&self) -> String {
        format!("{}{}", self.locked_prefix, self.suffix)
    }

    /// what the grid shows and what gets scored: the solution once solved, uppercase
    pub(super) fn display(&self) -> String {
        match self.solved {
            true => self.target.to_ascii_uppercase(),
            false => self.guess().to_ascii_uppercase(),
        }
    }

    /// single-letter targets are complete with just their lock
    pub(super) fn ready(&self) -> bool {
        self.solved || !self.suffix.is_empty() || self.target.len() == 1
    }
}

/// per-word verdict shown in the guess history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordMark {
    Correct,
    /// right length, wrong letters
    Wrong,
    TooShort,
    TooLong,
}

impl WordMark {
    pub fn judge(guess: &str, target: &str) -> Self {
        use std::cmp::Ordering;
        if guess.eq_ignore_ascii_case(target) {
            return WordMark::Correct;
        }
        match guess.len().cmp(&target.len()) {
            Ordering::Less => WordMark::TooShort,
            Ordering::Greater => WordMark::TooLong,
            Ordering::Equal => WordMark::Wrong,
        }
    }

    pub fn is_correct(self) -> bool {
        self == WordMark::Correct
    }
}

/// a past submission, words kept uppercase as displayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessRecord {
    pub words: Vec<String>,
    pub marks: Vec<WordMark>,
}

impl GuessRecord {
    /// whole phrase, the key for duplicate detection
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// `by_hint` is set when a hint solved the last open word
    Won { by_hint: bool },
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotView {
    /// what the grid shows: the solution once solved, otherwise prefix and suffix
    pub display: String,
    pub max_suffix_len: usize,
    pub solved: bool,
    pub revealed_by_hint: bool,
}

/// everything a renderer needs, detached from the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub acronym: String,
    pub category: Option<String>,
    pub slots: Vec<SlotView>,
    pub active_slot: usize,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub hints_used: usize,
    pub max_hints: usize,
    pub history: Vec<GuessRecord>,
    pub status: GameStatus,
    /// the full phrase, only filled in once the game is over
    pub answer: Option<Vec<String>>,
}

impl Snapshot {
    pub fn hints_left(&self) -> usize {
        self.max_hints.saturating_sub(self.hints_used)
    }
}

/// what `advance_or_submit` did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// nothing to do: game over, or a word still has nothing typed
    Ignored,
    /// moved on to the next open word
    Advanced { to: usize },
    Scored {
        marks: Vec<WordMark>,
        status: GameStatus,
    },
}
