use spoticards_types::{Guess, Track, DEFAULT_TARGET_CARDS};

use crate::session::{Placement, SessionPhase};

/// Read-only copy of a session for the presentation layer.
///
/// `snapshot_into` reuses the vectors and strings of an existing snapshot, so
/// a view can keep one around and refresh it every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub timeline: Vec<Track>,
    pub current_card: Option<Track>,
    pub guess: Guess,
    pub last_placement: Option<Placement>,
    pub phase: SessionPhase,
    pub target_cards: u32,
    pub cards_placed_correctly: u32,
    pub bonus_points: u32,
    pub score: u32,
    pub is_won: bool,
    pub remaining: usize,
    pub cards_forfeited: u32,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.timeline.clear();
        self.current_card = None;
        self.guess = Guess::default();
        self.last_placement = None;
        self.phase = SessionPhase::AwaitingDraw;
        self.target_cards = DEFAULT_TARGET_CARDS;
        self.cards_placed_correctly = 0;
        self.bonus_points = 0;
        self.score = 0;
        self.is_won = false;
        self.remaining = 0;
        self.cards_forfeited = 0;
        self.seed = 0;
    }

    /// Whether a placement can be made right now.
    pub fn can_place(&self) -> bool {
        self.phase == SessionPhase::CardPending
    }

    /// Fraction of the target reached, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.target_cards == 0 {
            return 0.0;
        }
        (self.cards_placed_correctly as f32 / self.target_cards as f32).min(1.0)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            timeline: Vec::new(),
            current_card: None,
            guess: Guess::default(),
            last_placement: None,
            phase: SessionPhase::AwaitingDraw,
            target_cards: DEFAULT_TARGET_CARDS,
            cards_placed_correctly: 0,
            bonus_points: 0,
            score: 0,
            is_won: false,
            remaining: 0,
            cards_forfeited: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        let mut snap = SessionSnapshot::default();
        assert_eq!(snap.progress(), 0.0);

        snap.target_cards = 4;
        snap.cards_placed_correctly = 2;
        assert!((snap.progress() - 0.5).abs() < f32::EPSILON);

        snap.cards_placed_correctly = 9;
        assert_eq!(snap.progress(), 1.0);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut snap = SessionSnapshot::default();
        snap.timeline.push(Track::new("a", "b", 2000));
        snap.is_won = true;
        snap.clear();
        assert!(snap.timeline.is_empty());
        assert!(!snap.is_won);
        assert!(!snap.can_place());
    }
}
