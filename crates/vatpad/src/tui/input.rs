//! Keyboard input handling.
//!
//! Maps terminal key events onto controller events, so the keyboard and
//! the on-screen keypad drive exactly the same code path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::CalcEvent;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Dispatch an event to the controller
    Calc(CalcEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// Digits and alphabet operators insert directly; letters are the
    /// function keys: `m`/`r` memory, `x` square, `s` square root,
    /// `v`/`V` the VAT pair.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Calc(CalcEvent::ClearAll),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Backspace => KeyAction::Calc(CalcEvent::ClearLast),
            KeyCode::Enter => KeyAction::Calc(CalcEvent::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Calc(CalcEvent::ClearAll),
            _ => KeyAction::None,
        }
    }

    fn handle_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            // Digits always fit in u8
            #[allow(clippy::cast_possible_truncation)]
            return KeyAction::Calc(CalcEvent::Digit(d as u8));
        }

        match c {
            '+' | '-' | '*' | '/' | '(' | ')' | '.' => KeyAction::Calc(CalcEvent::Operator(c)),
            '=' => KeyAction::Calc(CalcEvent::Equals),
            'c' => KeyAction::Calc(CalcEvent::ClearLast),
            'C' => KeyAction::Calc(CalcEvent::ClearAll),
            'm' => KeyAction::Calc(CalcEvent::MemoryStore),
            'r' => KeyAction::Calc(CalcEvent::MemoryRecall),
            'x' => KeyAction::Calc(CalcEvent::Square),
            's' => KeyAction::Calc(CalcEvent::SquareRoot),
            'v' => KeyAction::Calc(CalcEvent::VatAdd),
            'V' => KeyAction::Calc(CalcEvent::VatSubtract),
            _ => KeyAction::None,
        }
    }
}
