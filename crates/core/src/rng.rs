//! RNG module - seeded shuffling and the draw pile
//!
//! A session shuffles its copy of the playlist exactly once, then deals from
//! the top of the pile until it runs out. The shuffle is driven by a small LCG
//! so a seed fully determines the draw order (handy for tests and replays).

use spoticards_types::Track;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay zero forever.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state; feeding it back into [`SimpleRng::new`] continues the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// The shuffled pile of unseen cards.
///
/// Cards are dealt from the end of the vector (stack discipline), so each
/// card leaves the deck exactly once.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Track>,
    rng: SimpleRng,
}

impl Deck {
    /// Copy `tracks` and shuffle the copy. The caller's slice is never touched.
    pub fn new(tracks: &[Track], seed: u32) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(tracks.len()),
            rng: SimpleRng::new(seed),
        };
        deck.refill(tracks);
        deck
    }

    /// Replace the pile with a fresh shuffle of `tracks`, continuing the RNG sequence.
    pub fn refill(&mut self, tracks: &[Track]) {
        self.cards.clear();
        self.cards.extend_from_slice(tracks);
        self.rng.shuffle(&mut self.cards);
    }

    /// Take the top card, or `None` once the pile is empty.
    pub fn draw(&mut self) -> Option<Track> {
        self.cards.pop()
    }

    /// Look at the top card without dealing it.
    pub fn peek(&self) -> Option<&Track> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// RNG state after the last shuffle (seed for the next game on this playlist).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
