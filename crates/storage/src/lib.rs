//! Storage module - playlists on disk and card image lookup
//!
//! The game reads what the card generator left behind:
//!
//! ```text
//! <data>/playlists/
//!   <folder>/
//!     metadata.json        # array of track records
//!     cards/
//!       2000_Yellow_front.png
//!       2000_Yellow_back.png
//! ```
//!
//! - [`playlist`]: discover playlist folders and load their track records
//! - [`cards`]: resolve a card's image file, reporting absence without failing
//!
//! Writing metadata and rendering images belong to the card generator and are
//! not handled here.

pub mod cards;
pub mod playlist;

pub use spoticards_types as types;

pub use cards::{card_file_name, CardImageResolver, DirCardResolver};
pub use playlist::{
    available_playlists, into_tracks, load_playlist_metadata, load_playlist_tracks, TrackRecord,
    CARDS_DIR_NAME, METADATA_FILE_NAME,
};
