//! Play screen controller.
//!
//! [`PlayApp`] owns one [`GameSession`] and the screen state around it
//! (insertion cursor, guess field being edited, status line). It turns
//! [`GameAction`]s into session operations and converts engine errors into
//! status messages, so a mistaken key press never ends the game.

use tracing::{info, warn};

use crate::core::{GameSession, SessionSnapshot};
use crate::input::InputMode;
use crate::storage::CardImageResolver;
use crate::term::TableUi;
use crate::types::{CardSide, GameAction, GUESS_BONUS_POINTS};

pub struct PlayApp<R: CardImageResolver> {
    session: GameSession,
    resolver: R,
    ui: TableUi,
    snapshot: SessionSnapshot,
    /// Bonus already paid out for the card in flight.
    guess_rewarded: bool,
}

impl<R: CardImageResolver> PlayApp<R> {
    pub fn new(session: GameSession, resolver: R, playlist: &str) -> Self {
        let mut app = Self {
            session,
            resolver,
            ui: TableUi {
                playlist: playlist.to_string(),
                ..TableUi::default()
            },
            snapshot: SessionSnapshot::default(),
            guess_rewarded: false,
        };
        app.ui.status = format!(
            "{} cards shuffled. Press n to draw.",
            app.session.remaining()
        );
        app
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn ui(&self) -> &TableUi {
        &self.ui
    }

    pub fn input_mode(&self) -> InputMode {
        match self.ui.editing {
            Some(field) => InputMode::Editing(field),
            None => InputMode::Navigate,
        }
    }

    /// Refresh the snapshot and hand out everything a view needs.
    pub fn frame(&mut self) -> (&SessionSnapshot, &TableUi) {
        self.session.snapshot_into(&mut self.snapshot);
        (&self.snapshot, &self.ui)
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Draw => self.draw(),
            GameAction::CursorLeft => self.ui.cursor = self.ui.cursor.saturating_sub(1),
            GameAction::CursorRight => {
                self.ui.cursor = (self.ui.cursor + 1).min(self.session.timeline().len())
            }
            GameAction::CursorHome => self.ui.cursor = 0,
            GameAction::CursorEnd => self.ui.cursor = self.session.timeline().len(),
            GameAction::Place => self.place(),
            GameAction::Edit(field) => {
                if self.session.current_card().is_some() {
                    self.ui.editing = Some(field);
                } else {
                    self.ui.status = "Draw a card before guessing.".to_string();
                }
            }
            GameAction::NextField => self.ui.editing = self.ui.editing.map(|f| f.next()),
            GameAction::Type(ch) => {
                if let Some(field) = self.ui.editing {
                    self.session.guess_mut().field_mut(field).push(ch);
                }
            }
            GameAction::Backspace => {
                if let Some(field) = self.ui.editing {
                    self.session.guess_mut().field_mut(field).pop();
                }
            }
            GameAction::CancelEdit => self.ui.editing = None,
            GameAction::SubmitGuess => self.submit_guess(),
            GameAction::NewGame => self.new_game(),
        }
    }

    fn draw(&mut self) {
        self.ui.editing = None;
        let had_pending = self.session.current_card().is_some();

        let Some(card) = self.session.draw_next_card() else {
            info!("[Play] deck exhausted");
            self.ui.status = "The deck is empty. Press r for a new game.".to_string();
            return;
        };
        let key = card.key();

        self.ui.card_back_available = self.resolver.resolve(&key, CardSide::Back).is_some();
        self.guess_rewarded = false;
        self.ui.cursor = self.ui.cursor.min(self.session.timeline().len());
        self.ui.status = if had_pending {
            "Previous card skipped. Where does this one go?".to_string()
        } else {
            "Where does this card go? Pick a slot and press enter.".to_string()
        };
    }

    fn place(&mut self) {
        let was_won = self.session.is_won();
        match self.session.place_current_card(self.ui.cursor) {
            Ok(correct) => {
                let Some(placement) = self.session.last_placement() else {
                    return;
                };
                let card = &placement.card;
                let mut status = if correct {
                    format!("Correct! \"{}\" is from {}.", card.name_cleaned, card.release_year)
                } else {
                    format!("Wrong: \"{}\" is from {}.", card.name_cleaned, card.release_year)
                };
                if self.session.is_won() && !was_won {
                    info!("[Play] won with score {}", self.session.score());
                    status.push_str(" You win!");
                }
                self.ui.cursor = (placement.position + 1).min(self.session.timeline().len());
                self.ui.editing = None;
                self.ui.status = status;
            }
            Err(e) => {
                warn!("[Play] place rejected: {}", e);
                self.ui.status = e.to_string();
            }
        }
    }

    fn submit_guess(&mut self) {
        self.ui.editing = None;
        let verdict = match self.session.judge_guess() {
            Ok(verdict) => verdict,
            Err(e) => {
                self.ui.status = e.to_string();
                return;
            }
        };

        self.ui.status = match (verdict.title, verdict.artist) {
            (true, true) if self.guess_rewarded => "Already guessed this one.".to_string(),
            (true, true) => {
                self.session.add_bonus_points(GUESS_BONUS_POINTS);
                self.guess_rewarded = true;
                format!("Right title and artist! +{} bonus", GUESS_BONUS_POINTS)
            }
            (true, false) => "Title is right, artist is not.".to_string(),
            (false, true) => "Artist is right, title is not.".to_string(),
            (false, false) => "Not quite. Try again or place the card.".to_string(),
        };
    }

    fn new_game(&mut self) {
        self.session.restart();
        self.ui.cursor = 0;
        self.ui.editing = None;
        self.ui.card_back_available = false;
        self.guess_rewarded = false;
        info!("[Play] new game, seed {}", self.session.seed());
        self.ui.status = format!(
            "New game: {} cards shuffled. Press n to draw.",
            self.session.remaining()
        );
    }
}
