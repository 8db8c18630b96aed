pub mod attempt_indicators;
pub mod game_over;
pub mod guess_history;
pub mod keyboard;
pub mod message_popup;
pub mod word_grid;
