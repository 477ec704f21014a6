//! Game session module - one play-through of the timeline game
//!
//! A session owns a shuffled deck, the player's timeline, the card currently
//! in flight, and the score. It is mutated only through the operations on
//! [`GameSession`] and performs no I/O.

use spoticards_types::{Guess, Track, DEFAULT_TARGET_CARDS};
use tracing::debug;

use crate::error::GameError;
use crate::guess::{judge, GuessVerdict};
use crate::rng::Deck;

/// Where the session stands between operations.
///
/// Winning is tracked separately by [`GameSession::is_won`]; a won session
/// keeps accepting draws and placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No card in flight and the deck still has cards.
    AwaitingDraw,
    /// A card has been drawn and awaits placement.
    CardPending,
    /// No card in flight and nothing left to draw.
    DeckExhausted,
}

/// Outcome of the most recent placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub card: Track,
    pub position: usize,
    pub correct: bool,
}

/// Whether the card at `position` sits in non-decreasing year order with its
/// immediate neighbors. Ties count as correct. Only the two neighbors are
/// inspected; the rest of the timeline is not re-validated.
pub fn placement_is_chronological(timeline: &[Track], position: usize) -> bool {
    let Some(card) = timeline.get(position) else {
        return false;
    };
    let year = card.release_year;

    if position > 0 && timeline[position - 1].release_year > year {
        return false;
    }

    if let Some(right) = timeline.get(position + 1) {
        if year > right.release_year {
            return false;
        }
    }

    true
}

/// Complete state of one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The caller's tracks, kept so the same playlist can be reshuffled.
    source: Vec<Track>,
    target_cards: u32,
    deck: Deck,
    timeline: Vec<Track>,
    current_card: Option<Track>,
    current_guess: Guess,
    cards_placed_correctly: u32,
    bonus_points: u32,
    is_won: bool,
    /// Cards drawn over a pending card and never placed.
    cards_forfeited: u32,
    last_placement: Option<Placement>,
}

impl GameSession {
    /// Start a session aiming for [`DEFAULT_TARGET_CARDS`].
    ///
    /// Every track must carry a real release year; filtering out incomplete
    /// records is the loader's job. An empty list gives a session whose first
    /// draw returns `None`.
    pub fn new(tracks: &[Track], seed: u32) -> Self {
        Self::build(tracks, DEFAULT_TARGET_CARDS, seed)
    }

    /// Start a session that is won after `target_cards` correct placements.
    pub fn with_target(tracks: &[Track], target_cards: u32, seed: u32) -> Result<Self, GameError> {
        if target_cards == 0 {
            return Err(GameError::InvalidTarget);
        }
        Ok(Self::build(tracks, target_cards, seed))
    }

    fn build(tracks: &[Track], target_cards: u32, seed: u32) -> Self {
        debug!(
            "[Session] new session: {} tracks, target {}, seed {}",
            tracks.len(),
            target_cards,
            seed
        );
        Self {
            source: tracks.to_vec(),
            target_cards,
            deck: Deck::new(tracks, seed),
            timeline: Vec::with_capacity(tracks.len()),
            current_card: None,
            current_guess: Guess::default(),
            cards_placed_correctly: 0,
            bonus_points: 0,
            is_won: false,
            cards_forfeited: 0,
            last_placement: None,
        }
    }

    /// Throw away all progress and deal a fresh shuffle of the same tracks.
    ///
    /// The new order continues the RNG sequence, so it differs from the last game.
    pub fn restart(&mut self) {
        let seed = self.deck.seed();
        *self = Self::build(&self.source, self.target_cards, seed);
    }

    pub fn target_cards(&self) -> u32 {
        self.target_cards
    }

    pub fn timeline(&self) -> &[Track] {
        &self.timeline
    }

    pub fn current_card(&self) -> Option<&Track> {
        self.current_card.as_ref()
    }

    pub fn current_guess(&self) -> &Guess {
        &self.current_guess
    }

    /// Scratch guess for the current card; cleared on every draw.
    pub fn guess_mut(&mut self) -> &mut Guess {
        &mut self.current_guess
    }

    pub fn set_guess(&mut self, guess: Guess) {
        self.current_guess = guess;
    }

    pub fn cards_placed_correctly(&self) -> u32 {
        self.cards_placed_correctly
    }

    pub fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Correct placements plus bonus points.
    pub fn score(&self) -> u32 {
        self.cards_placed_correctly.saturating_add(self.bonus_points)
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn cards_forfeited(&self) -> u32 {
        self.cards_forfeited
    }

    /// Cards still in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn seed(&self) -> u32 {
        self.deck.seed()
    }

    pub fn last_placement(&self) -> Option<&Placement> {
        self.last_placement.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.current_card.is_some() {
            SessionPhase::CardPending
        } else if self.deck.is_empty() {
            SessionPhase::DeckExhausted
        } else {
            SessionPhase::AwaitingDraw
        }
    }

    /// Deal the next card and make it the current card.
    ///
    /// Returns `None` and changes nothing when the deck is empty. Drawing while
    /// a card is still pending forfeits that card: it never reaches the
    /// timeline and does not affect the score.
    pub fn draw_next_card(&mut self) -> Option<&Track> {
        let card = self.deck.draw()?;
        debug!(
            "[Session] drew '{}' ({} left)",
            card.name_cleaned,
            self.deck.len()
        );

        if let Some(forfeited) = self.current_card.replace(card) {
            debug!("[Session] forfeited '{}'", forfeited.name_cleaned);
            self.cards_forfeited = self.cards_forfeited.saturating_add(1);
        }
        self.current_guess = Guess::default();
        self.current_card.as_ref()
    }

    /// Insert the current card into the timeline at `position` and judge it.
    ///
    /// `position` must be in `0..=timeline().len()`; cards at or after it move
    /// right by one. The card stays in the timeline whether or not it was
    /// placed correctly. Returns whether the placement is correct.
    ///
    /// Once the target is reached the correct-placement counter stops
    /// growing, so it never exceeds `target_cards`.
    pub fn place_current_card(&mut self, position: usize) -> Result<bool, GameError> {
        if self.current_card.is_none() {
            return Err(GameError::NoCurrentCard);
        }
        if position > self.timeline.len() {
            return Err(GameError::InvalidPosition {
                position,
                len: self.timeline.len(),
            });
        }
        let Some(card) = self.current_card.take() else {
            return Err(GameError::NoCurrentCard);
        };

        self.timeline.insert(position, card);
        let correct = placement_is_chronological(&self.timeline, position);

        if correct && self.cards_placed_correctly < self.target_cards {
            self.cards_placed_correctly += 1;
            if self.cards_placed_correctly >= self.target_cards {
                self.is_won = true;
            }
        }

        let placed = &self.timeline[position];
        debug!(
            "[Session] placed '{}' ({}) at {}: {}",
            placed.name_cleaned,
            placed.release_year,
            position,
            if correct { "correct" } else { "wrong" }
        );
        self.last_placement = Some(Placement {
            card: placed.clone(),
            position,
            correct,
        });

        Ok(correct)
    }

    /// Judge the current guess field by field without changing any state.
    pub fn judge_guess(&self) -> Result<GuessVerdict, GameError> {
        let card = self.current_card.as_ref().ok_or(GameError::NoCurrentCard)?;
        Ok(judge(&self.current_guess, card))
    }

    /// True when both title and artist of the current guess match the current card.
    pub fn check_guess(&self) -> Result<bool, GameError> {
        self.judge_guess().map(|verdict| verdict.is_correct())
    }

    /// Add to the bonus score. The unsigned type rules out negative awards.
    pub fn add_bonus_points(&mut self, points: u32) {
        self.bonus_points = self.bonus_points.saturating_add(points);
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::SessionSnapshot) {
        out.timeline.clone_from(&self.timeline);
        out.current_card.clone_from(&self.current_card);
        out.guess.clone_from(&self.current_guess);
        out.last_placement.clone_from(&self.last_placement);
        out.phase = self.phase();
        out.target_cards = self.target_cards;
        out.cards_placed_correctly = self.cards_placed_correctly;
        out.bonus_points = self.bonus_points;
        out.score = self.score();
        out.is_won = self.is_won;
        out.remaining = self.deck.len();
        out.cards_forfeited = self.cards_forfeited;
        out.seed = self.deck.seed();
    }

    pub fn snapshot(&self) -> crate::snapshot::SessionSnapshot {
        let mut s = crate::snapshot::SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn timeline_mut(&mut self) -> &mut Vec<Track> {
        &mut self.timeline
    }

    #[cfg(test)]
    pub(crate) fn set_current_card(&mut self, card: Option<Track>) {
        self.current_card = card;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: i32) -> Track {
        Track::new(&format!("Song {y}"), "Artist", y)
    }

    fn session_with_timeline(years: &[i32]) -> GameSession {
        let mut session = GameSession::new(&[], 1);
        session.timeline_mut().extend(years.iter().map(|&y| year(y)));
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let tracks = vec![year(1990), year(2000)];
        let session = GameSession::new(&tracks, 42);

        assert_eq!(session.target_cards(), DEFAULT_TARGET_CARDS);
        assert_eq!(session.remaining(), 2);
        assert!(session.timeline().is_empty());
        assert!(session.current_card().is_none());
        assert_eq!(session.cards_placed_correctly(), 0);
        assert_eq!(session.bonus_points(), 0);
        assert!(!session.is_won());
        assert_eq!(session.phase(), SessionPhase::AwaitingDraw);
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = GameSession::with_target(&[year(2000)], 0, 1).unwrap_err();
        assert_eq!(err, GameError::InvalidTarget);
    }

    #[test]
    fn test_empty_deck_draw_returns_none() {
        let mut session = GameSession::new(&[], 1);
        assert!(session.draw_next_card().is_none());
        assert_eq!(session.phase(), SessionPhase::DeckExhausted);
    }

    #[test]
    fn test_draw_resets_guess() {
        let mut session = GameSession::new(&[year(1990), year(2000)], 3);
        session.draw_next_card();
        session.set_guess(Guess::new("x", "y"));
        session.draw_next_card();
        assert!(session.current_guess().is_empty());
    }

    #[test]
    fn test_draw_over_pending_card_forfeits_it() {
        let mut session = GameSession::new(&[year(1990), year(2000)], 3);
        session.draw_next_card();
        session.draw_next_card();

        assert_eq!(session.cards_forfeited(), 1);
        assert_eq!(session.remaining(), 0);
        assert!(session.timeline().is_empty());
        assert_eq!(session.cards_placed_correctly(), 0);
        assert_eq!(session.phase(), SessionPhase::CardPending);
    }

    #[test]
    fn test_draw_on_exhausted_deck_keeps_pending_card() {
        let mut session = GameSession::new(&[year(1990)], 3);
        session.draw_next_card();
        assert!(session.draw_next_card().is_none());
        assert_eq!(session.current_card().map(|c| c.release_year), Some(1990));
        assert_eq!(session.cards_forfeited(), 0);
    }

    #[test]
    fn test_chronological_check_empty_timeline() {
        let timeline = vec![year(1999)];
        assert!(placement_is_chronological(&timeline, 0));
    }

    #[test]
    fn test_chronological_check_between_neighbors() {
        let timeline = vec![year(2000), year(2005), year(2010)];
        assert!(placement_is_chronological(&timeline, 1));

        let timeline = vec![year(2000), year(1990), year(2010)];
        assert!(!placement_is_chronological(&timeline, 1));

        let timeline = vec![year(2000), year(2020), year(2010)];
        assert!(!placement_is_chronological(&timeline, 1));
    }

    #[test]
    fn test_chronological_check_ties() {
        let timeline = vec![year(2000), year(2000), year(2000)];
        assert!(placement_is_chronological(&timeline, 0));
        assert!(placement_is_chronological(&timeline, 1));
        assert!(placement_is_chronological(&timeline, 2));
    }

    #[test]
    fn test_chronological_check_out_of_range() {
        assert!(!placement_is_chronological(&[], 0));
    }

    #[test]
    fn test_place_between_neighbors() {
        let mut session = session_with_timeline(&[2000, 2010]);
        session.set_current_card(Some(year(2005)));
        assert_eq!(session.place_current_card(1), Ok(true));

        let mut session = session_with_timeline(&[2000, 2010]);
        session.set_current_card(Some(year(1990)));
        assert_eq!(session.place_current_card(1), Ok(false));
        // Wrong cards stay where they were put.
        assert_eq!(session.timeline()[1].release_year, 1990);
        assert_eq!(session.timeline().len(), 3);
    }

    #[test]
    fn test_place_at_front_with_tie() {
        let mut session = session_with_timeline(&[2000, 2010]);
        session.set_current_card(Some(year(2000)));
        assert_eq!(session.place_current_card(0), Ok(true));
    }

    #[test]
    fn test_place_without_card() {
        let mut session = session_with_timeline(&[2000]);
        assert_eq!(session.place_current_card(0), Err(GameError::NoCurrentCard));
        assert_eq!(session.check_guess(), Err(GameError::NoCurrentCard));
    }

    #[test]
    fn test_place_invalid_position_leaves_state() {
        let mut session = session_with_timeline(&[2000, 2010]);
        session.set_current_card(Some(year(2005)));

        assert_eq!(
            session.place_current_card(3),
            Err(GameError::InvalidPosition { position: 3, len: 2 })
        );
        assert_eq!(session.timeline().len(), 2);
        assert!(session.current_card().is_some());
        assert!(session.last_placement().is_none());

        // Appending at the end is allowed.
        assert_eq!(session.place_current_card(2), Ok(false));
    }

    #[test]
    fn test_place_records_last_placement() {
        let mut session = session_with_timeline(&[2000]);
        session.set_current_card(Some(year(1995)));
        session.place_current_card(0).unwrap();

        let placement = session.last_placement().unwrap();
        assert_eq!(placement.position, 0);
        assert_eq!(placement.card.release_year, 1995);
        assert!(placement.correct);
        assert!(session.current_card().is_none());
    }

    #[test]
    fn test_win_is_sticky_and_counter_capped() {
        let mut session = GameSession::with_target(&[], 2, 1).unwrap();

        for y in [1990, 2000] {
            session.set_current_card(Some(year(y)));
            let end = session.timeline().len();
            assert_eq!(session.place_current_card(end), Ok(true));
        }
        assert!(session.is_won());
        assert_eq!(session.cards_placed_correctly(), 2);

        // Wrong placement after winning.
        session.set_current_card(Some(year(1950)));
        let end = session.timeline().len();
        assert_eq!(session.place_current_card(end), Ok(false));
        assert!(session.is_won());

        // Correct placement after winning does not push past the target.
        session.set_current_card(Some(year(2020)));
        let end = session.timeline().len();
        assert_eq!(session.place_current_card(end), Ok(true));
        assert_eq!(session.cards_placed_correctly(), 2);
    }

    #[test]
    fn test_check_guess_does_not_consume_card() {
        let mut session = GameSession::new(&[], 1);
        session.set_current_card(Some(Track::new("Yellow", "Coldplay", 2000)));
        session.set_guess(Guess::new(" yellow ", "COLDPLAY"));

        assert_eq!(session.check_guess(), Ok(true));
        assert!(session.current_card().is_some());

        session.guess_mut().artist = "Cold Play".to_string();
        assert_eq!(session.check_guess(), Ok(false));
        let verdict = session.judge_guess().unwrap();
        assert!(verdict.title);
        assert!(!verdict.artist);
    }

    #[test]
    fn test_bonus_points() {
        let mut session = GameSession::new(&[], 1);
        session.add_bonus_points(2);
        session.add_bonus_points(0);
        session.add_bonus_points(3);
        assert_eq!(session.bonus_points(), 5);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn test_restart_reshuffles_and_clears() {
        let tracks: Vec<Track> = (1960..1980).map(year).collect();
        let mut session = GameSession::with_target(&tracks, 5, 77).unwrap();
        session.draw_next_card();
        session.place_current_card(0).unwrap();
        session.add_bonus_points(1);

        session.restart();
        assert_eq!(session.target_cards(), 5);
        assert_eq!(session.remaining(), 20);
        assert!(session.timeline().is_empty());
        assert!(session.current_card().is_none());
        assert_eq!(session.score(), 0);
        assert!(session.last_placement().is_none());
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut session = GameSession::new(&[year(1990), year(2000)], 9);
        session.draw_next_card();
        session.add_bonus_points(1);

        let snap = session.snapshot();
        assert_eq!(snap.phase, SessionPhase::CardPending);
        assert_eq!(snap.remaining, 1);
        assert_eq!(snap.bonus_points, 1);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.current_card.as_ref(), session.current_card());
        assert_eq!(snap.target_cards, DEFAULT_TARGET_CARDS);
    }
}
