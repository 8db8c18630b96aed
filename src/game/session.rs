use dioxus::logger::tracing::{debug, trace};

use super::{
    GameConfig, GameError, GameStatus, GuessRecord, Puzzle, SlotView, Snapshot, Submission,
    WordMark, WordSlot,
};

/// one round of the game against a single [`Puzzle`]
///
/// Every operation either applies fully or leaves the session untouched.
/// Invalid input (typing into a solved word, submitting with an empty word,
/// asking for a hint with none left, anything after the game ended) is a
/// silent no-op, reported only through the `bool`/[`Submission::Ignored`]
/// return values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    config: GameConfig,
    slots: Vec<WordSlot>,
    /// always an unsolved slot while one exists
    active_slot: usize,
    attempts_used: usize,
    history: Vec<GuessRecord>,
    hints_used: usize,
    status: GameStatus,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle, config: GameConfig) -> Self {
        let slots = puzzle
            .words()
            .iter()
            .map(|word| WordSlot::new(word, config.suffix_cap))
            .collect();
        Self {
            puzzle,
            config,
            slots,
            active_slot: 0,
            attempts_used: 0,
            history: Vec::new(),
            hints_used: 0,
            status: GameStatus::InProgress,
        }
    }

    /// throws away all progress and starts over on `puzzle`, same config
    pub fn restart(&mut self, puzzle: Puzzle) {
        debug!("restarting on {}", puzzle.acronym());
        *self = Self::new(puzzle, self.config);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// letters typed after the lock of slot `index`
    pub fn suffix(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.suffix.as_str())
    }

    pub fn locked_prefix(&self, index: usize) -> Option<char> {
        self.slots.get(index).map(|slot| slot.locked_prefix)
    }

    /// uppercase text of slot `index` as the grid shows it
    pub fn display(&self, index: usize) -> Option<String> {
        self.slots.get(index).map(WordSlot::display)
    }

    fn first_open(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.solved)
    }

    fn next_open_after(&self, index: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, slot)| !slot.solved)
            .map(|(i, _)| i)
    }

    fn editable_slot(&mut self) -> Option<&mut WordSlot> {
        if self.status.is_over() {
            return None;
        }
        self.slots
            .get_mut(self.active_slot)
            .filter(|slot| !slot.solved)
    }

    /// appends `ch` to the active word; only `A-Z`, folded to lowercase
    pub fn type_letter(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() {
            return false;
        }
        let Some(slot) = self.editable_slot() else {
            return false;
        };
        if slot.suffix.len() >= slot.max_suffix_len {
            return false;
        }
        slot.suffix.push(ch.to_ascii_lowercase());
        true
    }

    /// drops the last typed letter, never the locked prefix
    pub fn delete_letter(&mut self) -> bool {
        self.editable_slot()
            .is_some_and(|slot| slot.suffix.pop().is_some())
    }

    /// moves typing focus to slot `index` if it's still open
    pub fn select_slot(&mut self, index: usize) -> bool {
        if self.status.is_over() || !self.slots.get(index).is_some_and(|slot| !slot.solved) {
            return false;
        }
        self.active_slot = index;
        true
    }

    /// ENTER: move to the next open word, or score the whole phrase from the last one
    ///
    /// # Errors
    /// [`GameError::DuplicateGuess`] if the assembled phrase was already tried,
    /// nothing changes in that case
    pub fn advance_or_submit(&mut self) -> Result<Submission, GameError> {
        if self.status.is_over() {
            return Ok(Submission::Ignored);
        }
        if let Some(next) = self.next_open_after(self.active_slot) {
            trace!("advancing from slot {} to {next}", self.active_slot);
            self.active_slot = next;
            return Ok(Submission::Advanced { to: next });
        }
        if !self.slots.iter().all(WordSlot::ready) {
            return Ok(Submission::Ignored);
        }

        let words: Vec<String> = self.slots.iter().map(WordSlot::display).collect();
        let marks: Vec<WordMark> = words
            .iter()
            .zip(&self.slots)
            .map(|(word, slot)| WordMark::judge(word, &slot.target))
            .collect();
        let record = GuessRecord { words, marks };

        let text = record.text();
        if self.history.iter().any(|past| past.text() == text) {
            debug!("rejecting duplicate guess {text}");
            return Err(GameError::DuplicateGuess(text));
        }

        for (slot, mark) in self.slots.iter_mut().zip(&record.marks) {
            if mark.is_correct() {
                slot.solved = true;
            }
            slot.suffix.clear();
        }
        let marks = record.marks.clone();
        if self.history.len() < self.config.max_attempts {
            self.history.push(record);
        }

        match self.first_open() {
            None => self.status = GameStatus::Won { by_hint: false },
            Some(open) => {
                self.attempts_used = (self.attempts_used + 1).min(self.config.max_attempts);
                self.active_slot = open;
                if self.attempts_used >= self.config.max_attempts {
                    self.status = GameStatus::Lost;
                }
            }
        }
        debug!(
            "scored {text}: {marks:?}, attempts {}/{}, {:?}",
            self.attempts_used, self.config.max_attempts, self.status
        );

        Ok(Submission::Scored {
            marks,
            status: self.status,
        })
    }

    /// reveals the first open word, costs a hint but never an attempt
    pub fn request_hint(&mut self) -> bool {
        if self.status.is_over() || self.hints_used >= self.config.max_hints {
            return false;
        }
        let Some(index) = self.first_open() else {
            return false;
        };

        let slot = &mut self.slots[index];
        slot.solved = true;
        slot.revealed_by_hint = true;
        slot.suffix.clear();
        self.hints_used += 1;
        debug!(
            "hint {}/{} revealed slot {index}",
            self.hints_used, self.config.max_hints
        );

        match self.first_open() {
            None => self.status = GameStatus::Won { by_hint: true },
            Some(open) if self.slots[self.active_slot].solved => self.active_slot = open,
            Some(_) => {}
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        let slots = self
            .slots
            .iter()
            .map(|slot| SlotView {
                display: slot.display(),
                max_suffix_len: slot.max_suffix_len,
                solved: slot.solved,
                revealed_by_hint: slot.revealed_by_hint,
            })
            .collect();

        Snapshot {
            acronym: self.puzzle.acronym(),
            category: self.puzzle.category().map(String::from),
            slots,
            active_slot: self.active_slot,
            attempts_used: self.attempts_used,
            max_attempts: self.config.max_attempts,
            hints_used: self.hints_used,
            max_hints: self.config.max_hints,
            history: self.history.clone(),
            status: self.status,
            answer: self.status.is_over().then(|| self.puzzle.words().to_vec()),
        }
    }
}
