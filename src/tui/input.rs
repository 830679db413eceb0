//! Key mapping from terminal events to controller intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_hanoi::PegId;

use crate::{Intent, ViewMode, ViewState};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an intent to the controller.
    Intent(Intent),
    /// Leave the application.
    Quit,
    /// Nothing bound to this key here.
    Ignore,
}

/// Maps a key to an action for the current screen.
///
/// On the congratulations screen printable keys edit the player name, so
/// only Ctrl+C quits there.
pub fn map_key(key: KeyEvent, view: &ViewState) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match view.mode {
        ViewMode::Playing => match key.code {
            KeyCode::Char(c @ '1'..='3') => peg_for_digit(c)
                .map(|peg| KeyAction::Intent(Intent::SelectPeg(peg)))
                .unwrap_or(KeyAction::Ignore),
            KeyCode::Char('s') | KeyCode::Char(' ') => KeyAction::Intent(Intent::StartOrStop),
            KeyCode::Char('r') => KeyAction::Intent(Intent::Reset),
            KeyCode::Char('l') => KeyAction::Intent(Intent::GoToLeaderboard),
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
        ViewMode::Solved => match key.code {
            KeyCode::Enter => KeyAction::Intent(Intent::Reset),
            KeyCode::Backspace => {
                let mut name = view.player_name.clone();
                name.pop();
                KeyAction::Intent(Intent::SetPlayerName(name))
            }
            KeyCode::Char(c) if !c.is_control() => {
                KeyAction::Intent(Intent::SetPlayerName(format!("{}{}", view.player_name, c)))
            }
            _ => KeyAction::Ignore,
        },
        ViewMode::ViewingLeaderboard => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') => {
                KeyAction::Intent(Intent::ReturnFromLeaderboard)
            }
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
    }
}

fn peg_for_digit(c: char) -> Option<PegId> {
    c.to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(PegId::from_index)
}
