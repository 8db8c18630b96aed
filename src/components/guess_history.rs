use dioxus::prelude::*;

use crate::game::{GuessRecord, WordMark};

fn mark_class(mark: WordMark) -> &'static str {
    match mark {
        WordMark::Correct => "guess-word correct",
        _ => "guess-word wrong",
    }
}

/// arrow telling which way the word length is off
fn length_hint(mark: WordMark) -> &'static str {
    match mark {
        WordMark::TooShort => "⇧",
        WordMark::TooLong => "⇩",
        WordMark::Correct | WordMark::Wrong => "",
    }
}

#[component]
pub fn GuessHistory(history: Vec<GuessRecord>) -> Element {
    rsx! {
        ul { class: "guesses",
            for (index, record) in history.iter().enumerate() {
                li { class: "guess-item", key: "{index}",
                    for (word, mark) in record.words.iter().zip(record.marks.iter().copied()) {
                        span { class: mark_class(mark),
                            "{word}"
                            sup { class: "length-hint", {length_hint(mark)} }
                        }
                    }
                }
            }
        }
    }
}
