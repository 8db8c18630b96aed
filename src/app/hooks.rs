use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    app::{actions::handle_restart, models::Popup},
    game::PuzzleSession,
};

const POPUP_DURATION: Duration = Duration::from_secs(3);

/// fetches the first puzzle once the page is live, effects don't run during SSR
pub fn load_puzzle(session: Signal<PuzzleSession>, loading: Signal<bool>) {
    use_effect(move || {
        spawn(handle_restart(session, loading));
    });
}

/// hides the popup a few seconds after it was set
pub fn dismiss_popup(mut message: Signal<Popup>) {
    use_effect(move || {
        if message.read().is_some() {
            spawn(async move {
                gloo_timers::future::sleep(POPUP_DURATION).await;
                message.set(None);
            });
        }
    });
}
