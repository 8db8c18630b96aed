use super::catalog::{DEFAULT_CATALOG_PATH, parse_catalog_csv};
use super::models::{PuzzleCatalog, PuzzleRecord};
use dioxus::prelude::*;
use rand::seq::IndexedRandom;
use std::{env, path::PathBuf};
use tokio::sync::OnceCell;

static CATALOG: OnceCell<PuzzleCatalog> = OnceCell::const_new();

/// `ACRONYMLE_PUZZLES` if set and non-empty, otherwise the default location
fn catalog_path() -> PathBuf {
    env::var("ACRONYMLE_PUZZLES")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from)
}

/// read once on first use, an unreadable file means no puzzles rather than no server
pub(super) async fn catalog() -> &'static PuzzleCatalog {
    CATALOG.get_or_init(load_catalog).await
}

async fn load_catalog() -> PuzzleCatalog {
    let path = catalog_path();
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "couldn't read puzzle catalog {}: {e}, starting with no puzzles",
                path.display()
            );
            return PuzzleCatalog::new();
        }
    };

    let (catalog, skipped) = parse_catalog_csv(&text);
    if skipped > 0 {
        warn!("skipped {skipped} invalid rows in {}", path.display());
    }
    info!("loaded {} puzzles from {}", catalog.len(), path.display());
    catalog
}

pub(super) fn pick_random(catalog: &PuzzleCatalog) -> Option<&PuzzleRecord> {
    catalog.choose(&mut rand::rng())
}
