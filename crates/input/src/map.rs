//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, GuessField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether keys drive the table or type into a guess field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Navigate,
    Editing(GuessField),
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<GameAction> {
    match mode {
        InputMode::Navigate => navigate_key(key),
        InputMode::Editing(_) => editing_key(key),
    }
}

fn navigate_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),
        KeyCode::Home => Some(GameAction::CursorHome),
        KeyCode::End => Some(GameAction::CursorEnd),

        // Cards
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Draw),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),

        // Guessing
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::Edit(GuessField::Title)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::Edit(GuessField::Artist)),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::SubmitGuess),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::NewGame),

        _ => None,
    }
}

fn editing_key(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(GameAction::SubmitGuess),
        KeyCode::Tab | KeyCode::BackTab => Some(GameAction::NextField),
        KeyCode::Esc => Some(GameAction::CancelEdit),
        KeyCode::Backspace => Some(GameAction::Backspace),
        KeyCode::Char(ch) => Some(GameAction::Type(ch)),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letters are text while editing, so only Ctrl-C quits from a guess field.
pub fn should_quit(key: KeyEvent, mode: InputMode) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    mode == InputMode::Navigate
        && matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        )
}
