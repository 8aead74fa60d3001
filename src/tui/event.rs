//! # Key handling
//!
//! Translates key presses into what they mean for the workflow. Which keys do something depends on
//! the stage that has focus.
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::workflow::Stage;

/// Lines moved by `PageUp` and `PageDown`.
pub const PAGE: i32 = 10;

/// Something the operator asked for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Complete the focused stage.
    Advance,
    /// Stop the interface.
    Quit,
    /// Type a character into the focused region.
    Insert(char),
    /// Remove the last character of the focused region.
    Delete,
    /// Move the view on the output.
    Scroll {
        /// Lines to move down, negative for up.
        lines: i32,
        /// Columns to move right, negative for left.
        columns: i32,
    },
    /// Go back to the top-left corner of the output.
    ScrollHome,
}

impl Action {
    /// Interpret a key event.
    ///
    /// # Arguments
    ///
    /// * `key`: Event as read from the terminal.
    /// * `focus`: Stage that is active.
    ///
    /// # Return value
    ///
    /// `None` if the key has no meaning in this stage, or if it's a release or repeat event.
    pub fn from_key(key: KeyEvent, focus: Stage) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let editable = matches!(focus, Stage::Load | Stage::Precision);
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('c') if control => Action::Quit,
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::Enter => Action::Advance,
            KeyCode::Char(character) if editable && !control => Action::Insert(character),
            KeyCode::Backspace if editable => Action::Delete,
            code if focus == Stage::Output => match code {
                KeyCode::Up => Action::Scroll { lines: -1, columns: 0 },
                KeyCode::Down => Action::Scroll { lines: 1, columns: 0 },
                KeyCode::Left => Action::Scroll { lines: 0, columns: -1 },
                KeyCode::Right => Action::Scroll { lines: 0, columns: 1 },
                KeyCode::PageUp => Action::Scroll { lines: -PAGE, columns: 0 },
                KeyCode::PageDown => Action::Scroll { lines: PAGE, columns: 0 },
                KeyCode::Home => Action::ScrollHome,
                _ => return None,
            },
            _ => return None,
        };

        Some(action)
    }
}
