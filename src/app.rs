use dioxus::prelude::*;

use crate::{
    app::{
        actions::{handle_hint, handle_key, handle_restart},
        models::{KeyPress, Popup},
    },
    components::{
        attempt_indicators::AttemptIndicators, game_over::GameOverPanel,
        guess_history::GuessHistory, keyboard::Keyboard, message_popup::MessagePopup,
        word_grid::WordGrid,
    },
    game::{GameConfig, GameStatus, Puzzle, PuzzleSession, Snapshot},
};

pub mod actions;
pub mod hooks;
pub mod models;
pub mod utils;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// the session starts on the fallback puzzle, which mustn't show while the real one loads
fn header_acronym(snapshot: &Snapshot, loading: bool) -> &str {
    match loading {
        true => "...",
        false => &snapshot.acronym,
    }
}

#[component]
pub fn App() -> Element {
    trace!("kicking off app");
    let session = use_signal(|| PuzzleSession::new(Puzzle::fallback(), GameConfig::default()));
    let message = use_signal(|| None::<(models::Notice, String)>);
    let loading = use_signal(|| true);

    hooks::load_puzzle(session, loading);
    hooks::dismiss_popup(message);

    let snapshot = session.read().snapshot();
    let over = snapshot.status.is_over();
    let won = matches!(snapshot.status, GameStatus::Won { .. });
    let hints_left = snapshot.hints_left();
    let popup: Popup = message.read().clone();
    let loading_now = *loading.read();
    let acronym = header_acronym(&snapshot, loading_now).to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "game",
            header {
                h1 { class: "acronym", "{acronym}" }
                if !loading_now {
                    if let Some(category) = &snapshot.category {
                        p { class: "category", "{category}" }
                    }
                }
            }

            if loading_now {
                p { class: "loading", "Loading puzzle..." }
            } else {
                AttemptIndicators { used: snapshot.attempts_used, max: snapshot.max_attempts, won: won }

                WordGrid { snapshot: snapshot.clone(), session: session, message: message }

                div { class: "controls",
                    button { class: "hint",
                        disabled: over || hints_left == 0,
                        onclick: move |_| handle_hint(session, message),
                        "Hint ({hints_left})"
                    }
                }

                GuessHistory { history: snapshot.history.clone() }

                Keyboard {
                    disabled: over,
                    on_key: move |key: KeyPress| handle_key(session, message, key),
                }

                if over {
                    GameOverPanel {
                        snapshot: snapshot.clone(),
                        on_restart: move |_| {
                            spawn(handle_restart(session, loading));
                        },
                    }
                }
            }

            if let Some((level, text)) = popup {
                MessagePopup { text: text, level: level }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_hidden_while_loading() {
        let snapshot = PuzzleSession::new(Puzzle::fallback(), GameConfig::default()).snapshot();
        assert_eq!(header_acronym(&snapshot, true), "...");
        assert_eq!(header_acronym(&snapshot, false), "OTW");
    }
}
