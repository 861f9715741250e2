//! TUI application state.
//!
//! Thin wrapper around the controller: it forwards events, remembers the
//! most recent signals for the status line, and tracks the quit flag and
//! keypad highlight.

use ratatui::layout::Rect;

use crate::controller::{CalcEvent, Controller, Signal};
use crate::tui::keypad::{ButtonAction, Keypad};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: Controller,
    keypad: Keypad,
    /// Signals raised by the most recent event
    status: Vec<Signal>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
            keypad: Keypad::new(),
            status: Vec::new(),
            should_quit: false,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.controller.display()
    }

    /// Returns the underlying controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns a mutable reference to the controller
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns a mutable reference to the keypad
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Returns the signals raised by the last event
    #[must_use]
    pub fn status(&self) -> &[Signal] {
        &self.status
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches a controller event, refreshing the status line and
    /// highlighting the matching keypad button
    pub fn apply(&mut self, event: CalcEvent) {
        let highlight = Self::highlight_for(&event);
        self.status = self.controller.dispatch(event);
        if let Some(action) = highlight {
            self.keypad.highlight_action(action);
        } else {
            self.keypad.release_all();
        }
    }

    /// Presses the keypad button at a position, if any
    pub fn press_at(&mut self, row: usize, col: usize) {
        if let Some(btn) = self.keypad.get_button_at(row, col) {
            let event = btn.action.to_event();
            self.apply(event);
        }
    }

    /// Hit-tests a mouse click against the keypad region and presses the
    /// button under the cursor, if any. Clicks elsewhere are ignored.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some((row, col)) = self.keypad.hit_test(keypad_area, x, y) {
            self.press_at(row, col);
        }
    }

    /// Returns the status line text: the latest signal, or a ready marker
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status.first() {
            None => "Ready".to_string(),
            Some(signal) => signal.to_string(),
        }
    }

    fn highlight_for(event: &CalcEvent) -> Option<ButtonAction> {
        match event {
            CalcEvent::Digit(d) => Some(ButtonAction::Digit(*d)),
            CalcEvent::Operator(op) => Some(ButtonAction::Operator(*op)),
            CalcEvent::Equals => Some(ButtonAction::Equals),
            CalcEvent::ClearLast => Some(ButtonAction::ClearLast),
            CalcEvent::ClearAll => Some(ButtonAction::ClearAll),
            CalcEvent::MemoryStore => Some(ButtonAction::MemoryStore),
            CalcEvent::MemoryRecall => Some(ButtonAction::MemoryRecall),
            CalcEvent::Square => Some(ButtonAction::Square),
            CalcEvent::SquareRoot => Some(ButtonAction::SquareRoot),
            CalcEvent::VatAdd => Some(ButtonAction::VatAdd),
            CalcEvent::VatSubtract => Some(ButtonAction::VatSubtract),
            CalcEvent::TextEdited(_) => None,
        }
    }
}
