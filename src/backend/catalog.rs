use std::collections::HashSet;

use csv::ReaderBuilder;
use dioxus::logger::tracing::warn;
use serde::Deserialize;

use super::models::{PuzzleCatalog, PuzzleRecord, SolutionRecord};
use crate::game::Puzzle;

pub const DEFAULT_CATALOG_PATH: &str = "data/puzzles.csv";

#[derive(Debug, Deserialize)]
struct CatalogRow {
    acronym: String,
    /// space separated
    words: String,
    category: Option<String>,
}

/// parses `acronym,words,category` rows, returns the valid entries and how many rows were skipped
///
/// rows are skipped if they don't parse, don't make a valid puzzle,
/// or repeat an acronym seen earlier in the file
pub fn parse_catalog_csv(csv_text: &str) -> (PuzzleCatalog, usize) {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut catalog = PuzzleCatalog::new();
    let mut seen = HashSet::new();
    let mut skipped = 0;

    for (line, result) in rdr.deserialize::<CatalogRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping unreadable catalog row {}: {e}", line + 1);
                skipped += 1;
                continue;
            }
        };
        let record = PuzzleRecord {
            acronym: row.acronym,
            words: row.words.split_whitespace().map(String::from).collect(),
            category: row.category,
        };
        let puzzle = match Puzzle::try_from(record) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                warn!("skipping catalog row {}: {e}", line + 1);
                skipped += 1;
                continue;
            }
        };
        if !seen.insert(puzzle.acronym()) {
            warn!("skipping catalog row {}: duplicate {}", line + 1, puzzle.acronym());
            skipped += 1;
            continue;
        }
        catalog.push(PuzzleRecord::from(&puzzle));
    }

    (catalog, skipped)
}

/// every phrase as a single `word`, the legacy `/api/solutions` shape
pub fn solution_records(catalog: &PuzzleCatalog) -> Vec<SolutionRecord> {
    catalog
        .iter()
        .map(|record| SolutionRecord {
            word: record.words.join(" "),
        })
        .collect()
}

/// compares against the first solution only, case-insensitively
pub fn check_guess(catalog: &PuzzleCatalog, guess: &str) -> bool {
    solution_records(catalog)
        .first()
        .is_some_and(|solution| solution.word.eq_ignore_ascii_case(guess.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
acronym,words,category
OTW,on the way,chat
brb,Be Right Back,
OTW,over the wall,sports
XYZ,on the way,
IDK,i dont kn0w,chat
LOL,laughing out loud,chat,extra
H,house,
";

    #[test]
    fn keeps_only_valid_rows() {
        let (catalog, skipped) = parse_catalog_csv(CSV);

        let acronyms: Vec<_> = catalog.iter().map(|r| r.acronym.as_str()).collect();
        assert_eq!(acronyms, ["OTW", "BRB", "H"]);
        // duplicate OTW, acronym mismatch, digit, extra column
        assert_eq!(skipped, 4);

        assert_eq!(catalog[0].category.as_deref(), Some("chat"));
        assert_eq!(catalog[1].words, ["be", "right", "back"]);
        assert_eq!(catalog[1].category, None);
    }

    #[test]
    fn every_shipped_puzzle_can_be_won() {
        use crate::game::{GameConfig, GameStatus, PuzzleSession, Submission};

        let (catalog, skipped) = parse_catalog_csv(include_str!("../../data/puzzles.csv"));
        assert_eq!(skipped, 0);
        assert_eq!(catalog.len(), 12);

        for record in catalog {
            let acronym = record.acronym.clone();
            let words = record.words.clone();
            let mut session = PuzzleSession::new(Puzzle::try_from(record).unwrap(), GameConfig::default());
            let mut result = Ok(Submission::Ignored);
            for word in &words {
                for ch in word.chars().skip(1) {
                    assert!(session.type_letter(ch), "{acronym}: couldn't type {word}");
                }
                result = session.advance_or_submit();
            }
            assert_eq!(
                result.map(|submission| matches!(
                    submission,
                    Submission::Scored { status: GameStatus::Won { by_hint: false }, .. }
                )),
                Ok(true),
                "{acronym} not winnable"
            );
        }
    }

    #[test]
    fn empty_input_is_an_empty_catalog() {
        assert_eq!(parse_catalog_csv(""), (PuzzleCatalog::new(), 0));
        assert_eq!(parse_catalog_csv("acronym,words,category\n"), (PuzzleCatalog::new(), 0));
    }

    #[test]
    fn solutions_join_words() {
        let (catalog, _) = parse_catalog_csv(CSV);
        let solutions = solution_records(&catalog);
        assert_eq!(solutions[0].word, "on the way");
        assert_eq!(solutions[2].word, "house");
    }

    #[test]
    fn check_uses_first_solution() {
        let (catalog, _) = parse_catalog_csv(CSV);
        assert!(check_guess(&catalog, "On The Way"));
        assert!(check_guess(&catalog, " on the way "));
        assert!(!check_guess(&catalog, "be right back"));
        assert!(!check_guess(&PuzzleCatalog::new(), ""));
    }

    #[test]
    fn record_round_trips_into_puzzle() {
        let record = PuzzleRecord {
            acronym: "otw".into(),
            words: vec!["On".into(), "the".into(), "WAY".into()],
            category: Some("chat".into()),
        };
        let puzzle = Puzzle::try_from(record).unwrap();
        assert_eq!(puzzle.words(), ["on", "the", "way"]);
        assert_eq!(PuzzleRecord::from(&puzzle).acronym, "OTW");

        let unnamed = PuzzleRecord {
            acronym: String::new(),
            words: vec!["be".into(), "right".into(), "back".into()],
            category: None,
        };
        assert_eq!(Puzzle::try_from(unnamed).unwrap().acronym(), "BRB");
    }
}
