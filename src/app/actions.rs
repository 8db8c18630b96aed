use std::{pin::pin, time::Duration};

use dioxus::prelude::*;
use futures_util::future::{Either, select};

use crate::{
    app::{
        models::{KeyPress, Popup},
        utils::{edits_between, input_out_of_sync, popup_error, popup_normal, suffix_from_input},
    },
    backend::models::PuzzleRecord,
    game::{GameStatus, Puzzle, PuzzleSession, PuzzleSourceError, Submission, WordMark},
};

const PUZZLE_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

async fn request_puzzle() -> Result<PuzzleRecord, PuzzleSourceError> {
    let request = pin!(crate::backend::endpoints::puzzle());
    let timeout = pin!(gloo_timers::future::sleep(PUZZLE_FETCH_TIMEOUT));
    match select(request, timeout).await {
        Either::Left((Ok(record), _)) => Ok(record),
        Either::Left((Err(e), _)) => Err(PuzzleSourceError::Unavailable(e.to_string())),
        Either::Right(_) => Err(PuzzleSourceError::TimedOut),
    }
}

/// anything wrong with the source, including a record that isn't a valid puzzle,
/// means the built-in puzzle
fn puzzle_or_fallback(response: Result<PuzzleRecord, PuzzleSourceError>) -> Puzzle {
    let puzzle = response.and_then(|record| Puzzle::try_from(record).map_err(PuzzleSourceError::from));
    match puzzle {
        Ok(puzzle) => puzzle,
        Err(e) => {
            warn!("{e}, playing the fallback puzzle");
            Puzzle::fallback()
        }
    }
}

pub async fn fetch_puzzle() -> Puzzle {
    puzzle_or_fallback(request_puzzle().await)
}

pub async fn handle_restart(mut session: Signal<PuzzleSession>, mut loading: Signal<bool>) {
    loading.set(true);
    let puzzle = fetch_puzzle().await;
    session.write().restart(puzzle);
    loading.set(false);
}

pub fn handle_key(mut session: Signal<PuzzleSession>, mut message: Signal<Popup>, key: KeyPress) {
    match key {
        KeyPress::Letter(ch) => {
            session.write().type_letter(ch);
        }
        KeyPress::Delete => {
            session.write().delete_letter();
        }
        KeyPress::Enter => {
            let result = session.write().advance_or_submit();
            match result {
                Ok(Submission::Scored { marks, status }) => announce(&mut message, &marks, status),
                Ok(Submission::Advanced { .. } | Submission::Ignored) => {}
                Err(e) => popup_error(&mut message, e),
            }
        }
    }
}

fn announce(message: &mut Signal<Popup>, marks: &[WordMark], status: GameStatus) {
    match status {
        GameStatus::Won { .. } => popup_normal(message, "Solved!"),
        GameStatus::Lost => popup_error(message, "Out of attempts"),
        GameStatus::InProgress => {
            let right = marks.iter().filter(|mark| mark.is_correct()).count();
            if right > 0 {
                popup_normal(message, format!("{right} of {} words right", marks.len()));
            }
        }
    }
}

pub fn handle_hint(mut session: Signal<PuzzleSession>, mut message: Signal<Popup>) {
    if !session.write().request_hint() {
        popup_error(&mut message, "No hints left");
    }
}

/// replays free text typed into word `index` as single-letter edits
///
/// returns what the input should show instead, when some of `raw` was rejected
pub fn handle_input(mut session: Signal<PuzzleSession>, index: usize, raw: String) -> Option<String> {
    let mut session = session.write();
    let lock = session.locked_prefix(index)?;
    if !session.select_slot(index) {
        return None;
    }
    let current = session.suffix(index).unwrap_or_default().to_string();
    let (deletes, letters) = edits_between(&current, &suffix_from_input(&raw, lock));
    for _ in 0..deletes {
        session.delete_letter();
    }
    for ch in letters.chars() {
        session.type_letter(ch);
    }
    let shown = session.display(index)?;
    input_out_of_sync(&raw, &shown).then_some(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PuzzleError;

    fn record(acronym: &str, words: &[&str]) -> PuzzleRecord {
        PuzzleRecord {
            acronym: acronym.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
            category: Some("chat".into()),
        }
    }

    #[test]
    fn valid_record_is_played() {
        let puzzle = puzzle_or_fallback(Ok(record("BRB", &["be", "right", "back"])));
        assert_eq!(puzzle.acronym(), "BRB");
        assert_eq!(puzzle.category(), Some("chat"));
    }

    #[test]
    fn unreachable_source_falls_back() {
        let unavailable = PuzzleSourceError::Unavailable("404 no puzzles loaded".into());
        assert_eq!(puzzle_or_fallback(Err(unavailable)), Puzzle::fallback());
        assert_eq!(puzzle_or_fallback(Err(PuzzleSourceError::TimedOut)), Puzzle::fallback());
    }

    #[test]
    fn malformed_record_falls_back() {
        assert_eq!(
            puzzle_or_fallback(Ok(record("XYZ", &["be", "right", "back"]))),
            Puzzle::fallback()
        );
        assert_eq!(
            puzzle_or_fallback(Ok(record("BRB", &["be", "r1ght", "back"]))),
            Puzzle::fallback()
        );
        assert_eq!(puzzle_or_fallback(Ok(record("", &[]))), Puzzle::fallback());

        let malformed: PuzzleSourceError = PuzzleError::NoWords.into();
        assert_eq!(malformed, PuzzleSourceError::Malformed(PuzzleError::NoWords));
        assert_eq!(puzzle_or_fallback(Err(malformed)), Puzzle::fallback());
    }
}
