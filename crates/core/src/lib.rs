//! Session engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the timeline game: dealing cards from a
//! shuffled playlist, inserting them into the player's timeline, judging the
//! placement against its neighbors, judging title/artist guesses, and keeping
//! score. It has **no dependencies** on rendering, storage, or networking:
//!
//! - **Deterministic**: the same seed deals the same cards in the same order
//! - **Testable**: every rule is a plain method on [`GameSession`]
//! - **Portable**: any front end can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`session`]: the [`GameSession`] aggregate and placement judging
//! - [`rng`]: seeded LCG, Fisher-Yates shuffle, and the [`Deck`]
//! - [`guess`]: case/whitespace-insensitive title and artist matching
//! - [`error`]: [`GameError`] for out-of-order calls
//! - [`snapshot`]: [`SessionSnapshot`] for views
//!
//! # Game Rules
//!
//! - **One shuffle**: the deck is shuffled once when the session is created
//! - **One card in flight**: drawing again before placing forfeits the pending card
//! - **Neighbor check**: a placement is correct when the card's year is not
//!   earlier than its left neighbor and not later than its right neighbor
//!   (ties are fine); older placements are never re-judged
//! - **Wrong cards stay**: a wrongly placed card remains in the timeline
//! - **Sticky win**: reaching the target sets `is_won`, and nothing clears it
//!
//! # Example
//!
//! ```
//! use spoticards_core::GameSession;
//! use spoticards_types::Track;
//!
//! let tracks = vec![
//!     Track::new("Yellow", "Coldplay", 2000),
//!     Track::new("Heroes", "David Bowie", 1977),
//! ];
//! let mut session = GameSession::with_target(&tracks, 2, 12345).unwrap();
//!
//! // The first card always fits an empty timeline.
//! session.draw_next_card();
//! assert_eq!(session.place_current_card(0), Ok(true));
//!
//! // Put the second card on whichever side its year belongs.
//! let first_year = session.timeline()[0].release_year;
//! let year = session.draw_next_card().unwrap().release_year;
//! let position = if year < first_year { 0 } else { 1 };
//! assert_eq!(session.place_current_card(position), Ok(true));
//! assert!(session.is_won());
//! ```
//!
//! # Concurrency
//!
//! A session is a plain value with no interior locking. One owner drives it;
//! concurrent callers must serialize access themselves.

pub mod error;
pub mod guess;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use spoticards_types as types;

pub use error::GameError;
pub use guess::{field_matches, judge, GuessVerdict};
pub use rng::{Deck, SimpleRng};
pub use session::{placement_is_chronological, GameSession, Placement, SessionPhase};
pub use snapshot::SessionSnapshot;
