//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The same key
//! means different things while the player is typing a guess, so mapping
//! depends on the current [`InputMode`].

pub mod map;

pub use spoticards_types as types;

pub use map::{handle_key_event, should_quit, InputMode};
