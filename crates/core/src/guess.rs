//! Guess judging.
//!
//! A guess matches when each field equals the canonical value after trimming
//! surrounding whitespace and lowercasing. There is no fuzzy matching: the
//! artist string must match the full comma-joined artist list.

use spoticards_types::{Guess, Track};

/// Per-field outcome of judging a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessVerdict {
    pub title: bool,
    pub artist: bool,
}

impl GuessVerdict {
    /// Both fields matched.
    pub fn is_correct(&self) -> bool {
        self.title && self.artist
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed equality.
pub fn field_matches(guess: &str, canonical: &str) -> bool {
    normalize(guess) == normalize(canonical)
}

/// Judge `guess` against the title (`name_cleaned`) and `artists` of `track`.
pub fn judge(guess: &Guess, track: &Track) -> GuessVerdict {
    GuessVerdict {
        title: field_matches(&guess.title, &track.name_cleaned),
        artist: field_matches(&guess.artist, &track.artists),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        let track = Track::new("Yellow", "Coldplay", 2000);
        let verdict = judge(&Guess::new(" yellow ", "COLDPLAY"), &track);
        assert!(verdict.title);
        assert!(verdict.artist);
        assert!(verdict.is_correct());
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let track = Track::new("Yellow", "Coldplay", 2000);
        let verdict = judge(&Guess::new("Yellow", "Cold Play"), &track);
        assert!(verdict.title);
        assert!(!verdict.artist);
        assert!(!verdict.is_correct());
    }

    #[test]
    fn test_multi_artist_must_match_in_full() {
        let track = Track::new("Under Pressure", "Queen, David Bowie", 1981);
        assert!(!judge(&Guess::new("Under Pressure", "Queen"), &track).is_correct());
        assert!(judge(&Guess::new("under pressure", "queen, david bowie"), &track).is_correct());
    }

    #[test]
    fn test_empty_guess_is_wrong() {
        let track = Track::new("Yellow", "Coldplay", 2000);
        assert_eq!(judge(&Guess::default(), &track), GuessVerdict::default());
    }

    #[test]
    fn test_unicode_lowercase() {
        assert!(field_matches("BJÖRK", "björk"));
    }
}
