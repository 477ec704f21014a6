//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small helpers, so they can
//! be shared by the session engine, the storage layer, and the terminal view.
//!
//! # Cards
//!
//! A card is one [`Track`]. The front of a printed card shows the year, title
//! and artist; the back shows a QR code linking to the song. A card's image
//! files are looked up by [`CardKey`] (`release_year`, `name_cleaned`) and a
//! [`CardSide`].
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TARGET_CARDS` | 10 | Correct placements needed to win |
//! | `GUESS_BONUS_POINTS` | 1 | Bonus awarded for a correct title+artist guess |
//!
//! # Examples
//!
//! ```
//! use spoticards_types::{CardSide, GameAction, Track};
//!
//! let track = Track::new("Yellow", "Coldplay", 2000);
//! assert_eq!(track.key().release_year, 2000);
//!
//! assert_eq!(CardSide::from_str("BACK"), Some(CardSide::Back));
//! assert_eq!(GameAction::from_str("draw"), Some(GameAction::Draw));
//! ```

use serde::{Deserialize, Serialize};

/// Number of correctly placed cards needed to win when nothing else is configured.
pub const DEFAULT_TARGET_CARDS: u32 = 10;

/// Bonus points awarded for guessing both title and artist of the current card.
pub const GUESS_BONUS_POINTS: u32 = 1;

/// A normalized song record, as produced by the metadata cleaner upstream.
///
/// The engine compares `release_year` values directly; tracks without a year
/// are rejected before they reach a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub name_original: String,
    pub name_cleaned: String,
    pub artists: String,
    pub album: String,
    pub release_year: i32,
    pub spotify_uri: String,
}

impl Track {
    /// Build a track with only the fields the game logic reads.
    ///
    /// `name_original` mirrors `name_cleaned`, the album and URI are left empty.
    pub fn new(name: &str, artists: &str, release_year: i32) -> Self {
        Self {
            name_original: name.to_string(),
            name_cleaned: name.to_string(),
            artists: artists.to_string(),
            album: String::new(),
            release_year,
            spotify_uri: String::new(),
        }
    }

    /// Identity used to find this card's rendered images.
    pub fn key(&self) -> CardKey {
        CardKey {
            release_year: self.release_year,
            name_cleaned: self.name_cleaned.clone(),
        }
    }
}

/// Image lookup key: `(release_year, name_cleaned)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardKey {
    pub release_year: i32,
    pub name_cleaned: String,
}

/// Which face of a printed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    /// Year, title and artist.
    Front,
    /// QR code.
    Back,
}

impl CardSide {
    /// Parse a side from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "front" => Some(CardSide::Front),
            "back" => Some(CardSide::Back),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }
}

/// The player's scratch guess for the current card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub title: String,
    pub artist: String,
}

impl Guess {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.artist.is_empty()
    }

    pub fn field(&self, field: GuessField) -> &str {
        match field {
            GuessField::Title => &self.title,
            GuessField::Artist => &self.artist,
        }
    }

    pub fn field_mut(&mut self, field: GuessField) -> &mut String {
        match field {
            GuessField::Title => &mut self.title,
            GuessField::Artist => &mut self.artist,
        }
    }
}

/// One of the two text fields of a [`Guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessField {
    Title,
    Artist,
}

impl GuessField {
    /// The other field (Tab cycles between the two).
    pub fn next(&self) -> Self {
        match self {
            GuessField::Title => GuessField::Artist,
            GuessField::Artist => GuessField::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuessField::Title => "Title",
            GuessField::Artist => "Artist",
        }
    }
}

/// Player actions produced by the input layer and consumed by the play screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Draw the next card from the deck.
    Draw,
    /// Move the insertion cursor one slot left.
    CursorLeft,
    /// Move the insertion cursor one slot right.
    CursorRight,
    /// Jump the insertion cursor to the front of the timeline.
    CursorHome,
    /// Jump the insertion cursor to the end of the timeline.
    CursorEnd,
    /// Place the current card at the insertion cursor.
    Place,
    /// Start editing a guess field.
    Edit(GuessField),
    /// Switch to the other guess field while editing.
    NextField,
    /// Append a character to the field being edited.
    Type(char),
    /// Delete the last character of the field being edited.
    Backspace,
    /// Submit the current guess for checking.
    SubmitGuess,
    /// Leave text entry without submitting.
    CancelEdit,
    /// Shuffle the same playlist again and start over.
    NewGame,
}

impl GameAction {
    /// Parse a navigation action from string (case-insensitive).
    ///
    /// Text-entry actions (`Type`, `Edit`) carry data and are not parsed here.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draw" => Some(GameAction::Draw),
            "left" | "cursorleft" => Some(GameAction::CursorLeft),
            "right" | "cursorright" => Some(GameAction::CursorRight),
            "home" => Some(GameAction::CursorHome),
            "end" => Some(GameAction::CursorEnd),
            "place" => Some(GameAction::Place),
            "submit" | "submitguess" => Some(GameAction::SubmitGuess),
            "newgame" | "restart" => Some(GameAction::NewGame),
            _ => None,
        }
    }
}
