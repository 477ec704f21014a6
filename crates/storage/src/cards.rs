//! Card image lookup.
//!
//! Images are named `<year>_<name>_<side>.png`, with spaces in the
//! `<year>_<name>` part replaced by underscores. A missing image is reported as
//! `None` and logged; the game carries on without the picture.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::types::{CardKey, CardSide};

/// Finds the rendered image for one side of a card.
pub trait CardImageResolver {
    /// Path of the image, or `None` if it has not been rendered.
    fn resolve(&self, key: &CardKey, side: CardSide) -> Option<PathBuf>;
}

/// File name (no directory) of a card image.
pub fn card_file_name(key: &CardKey, side: CardSide) -> String {
    let stem = format!("{}_{}", key.release_year, key.name_cleaned).replace(' ', "_");
    format!("{}_{}.png", stem, side.as_str())
}

/// Resolves images inside one playlist's `cards/` directory.
#[derive(Debug, Clone)]
pub struct DirCardResolver {
    cards_dir: PathBuf,
}

impl DirCardResolver {
    pub fn new(cards_dir: impl Into<PathBuf>) -> Self {
        Self {
            cards_dir: cards_dir.into(),
        }
    }

    pub fn cards_dir(&self) -> &Path {
        &self.cards_dir
    }

    /// Where the image would be, whether or not it exists.
    pub fn expected_path(&self, key: &CardKey, side: CardSide) -> PathBuf {
        self.cards_dir.join(card_file_name(key, side))
    }
}

impl CardImageResolver for DirCardResolver {
    fn resolve(&self, key: &CardKey, side: CardSide) -> Option<PathBuf> {
        let path = self.expected_path(key, side);
        if !path.exists() {
            warn!("[Storage] card image not found at {}", path.display());
            return None;
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn key(year: i32, name: &str) -> CardKey {
        CardKey {
            release_year: year,
            name_cleaned: name.to_string(),
        }
    }

    #[test]
    fn test_file_name_replaces_spaces() {
        assert_eq!(
            card_file_name(&key(1981, "Under Pressure"), CardSide::Front),
            "1981_Under_Pressure_front.png"
        );
        assert_eq!(
            card_file_name(&key(2000, "Yellow"), CardSide::Back),
            "2000_Yellow_back.png"
        );
    }

    #[test]
    fn test_resolve_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2000_Yellow_front.png"), b"png").unwrap();
        let resolver = DirCardResolver::new(dir.path());

        let found = resolver.resolve(&key(2000, "Yellow"), CardSide::Front);
        assert_eq!(found, Some(dir.path().join("2000_Yellow_front.png")));

        assert_eq!(resolver.resolve(&key(2000, "Yellow"), CardSide::Back), None);
    }
}
