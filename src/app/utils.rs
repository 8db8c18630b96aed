use dioxus::prelude::*;

use crate::app::models::{Notice, Popup};

pub fn popup_error(message: &mut Signal<Popup>, text: impl std::fmt::Display) {
    message.set(Some((Notice::Error, text.to_string())));
}

pub fn popup_normal(message: &mut Signal<Popup>, text: impl std::fmt::Display) {
    message.set(Some((Notice::Info, text.to_string())));
}

/// the suffix a raw text input stands for
///
/// non-letters are dropped and the locked first letter is put back if the user removed it
pub fn suffix_from_input(raw: &str, lock: char) -> String {
    let letters: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match letters.strip_prefix(lock.to_ascii_lowercase()) {
        Some(rest) => rest.to_string(),
        None => letters,
    }
}

/// how many trailing letters to delete from `current` and which letters to type after,
/// so that it turns into `target`
pub fn edits_between(current: &str, target: &str) -> (usize, String) {
    let common = current
        .chars()
        .zip(target.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let deletes = current.chars().count() - common;
    (deletes, target.chars().skip(common).collect())
}

/// whether the text input holds something other than what the session kept,
/// e.g. a digit or a letter past the cap
pub fn input_out_of_sync(raw: &str, shown: &str) -> bool {
    !raw.eq_ignore_ascii_case(shown)
}
