//! Error types for session operations.
//!
//! Every error here is a sequencing mistake by the caller and leaves the
//! session untouched, so the presentation layer can report it and carry on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `place_current_card` or `check_guess` was called with no card in flight.
    #[error("No current card: draw a card first")]
    NoCurrentCard,

    /// Insertion index outside `0..=len` of the timeline.
    #[error("Invalid position {position}: timeline accepts 0..={len}")]
    InvalidPosition { position: usize, len: usize },

    /// A session needs a target of at least one card.
    #[error("Invalid target: at least one correct card is required to win")]
    InvalidTarget,
}
