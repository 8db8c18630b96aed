use super::models::*;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use super::{catalog::*, logic::*};

#[get("/api/health")]
pub async fn health() -> Result<Health> {
    Ok(Health { ok: true })
}

/// every stored phrase, in catalog order
#[get("/api/solutions")]
pub async fn solutions() -> Result<Vec<SolutionRecord>> {
    Ok(solution_records(catalog().await))
}

/// expects `{ guess }`, compared case-insensitively against the first solution
#[post("/api/check")]
pub async fn check(guess: String) -> Result<CheckReply> {
    Ok(CheckReply {
        correct: check_guess(catalog().await, &guess),
    })
}

/// a random puzzle for a fresh game
#[get("/api/puzzle")]
pub async fn puzzle() -> Result<PuzzleRecord, HttpError> {
    let record = pick_random(catalog().await).or_not_found("no puzzles loaded")?;
    debug!("handing out {}", record.acronym);
    Ok(record.clone())
}
