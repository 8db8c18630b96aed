use dioxus::prelude::*;

/// one box per allowed attempt: X for each miss, a check on the next box once won
#[component]
pub fn AttemptIndicators(used: usize, max: usize, won: bool) -> Element {
    rsx! {
        div { class: "indicators",
            for index in 0..max {
                if index < used {
                    span { class: "indicator wrong", "X" }
                } else if won && index == used {
                    span { class: "indicator correct", "✓" }
                } else {
                    span { class: "indicator" }
                }
            }
        }
    }
}
