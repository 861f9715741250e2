//! Input buffer controller: owns the display text, the one-slot memory,
//! and the just-evaluated flag, and mutates them in response to discrete
//! UI events.
//!
//! The controller is UI-agnostic. Frontends translate clicks and key
//! presses into [`CalcEvent`]s, dispatch them here, and surface the
//! returned [`Signal`]s to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::evaluator::Evaluator;
use crate::core::operations;
use crate::core::{format_number, is_display_char, is_operator_char, CalcError, CalcResult};

/// Discrete UI events the controller reacts to.
///
/// One variant per button/action of the keypad, plus [`CalcEvent::TextEdited`]
/// for out-of-band edits of the display field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalcEvent {
    /// A digit button, 0-9
    Digit(u8),
    /// An operator, bracket, or decimal point button
    Operator(char),
    /// The display field was edited directly
    TextEdited(String),
    /// M+ - store the display in memory
    MemoryStore,
    /// MR - recall memory into the display
    MemoryRecall,
    /// C - remove the last display character
    ClearLast,
    /// CE - reset the display to "0"
    ClearAll,
    /// = - evaluate the display
    Equals,
    /// x² - square the evaluated display
    Square,
    /// √x - square root of the evaluated display
    SquareRoot,
    /// VAT+ - multiply the evaluated display by 1.2
    VatAdd,
    /// VAT- - multiply the evaluated display by 5/6
    VatSubtract,
}

/// User-facing error signals. Both are recoverable and local to a single
/// event; the controller state is always valid afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Signal {
    /// A character outside the display alphabet was stripped from an edit
    #[error("input must be a number or operator: removed '{0}'")]
    InvalidCharacter(char),
    /// The display does not evaluate to a number
    #[error("sum not valid")]
    InvalidExpression(#[source] CalcError),
}

/// The input buffer controller.
#[derive(Debug)]
pub struct Controller {
    display: String,
    memory: Option<String>,
    just_evaluated: bool,
    evaluator: Evaluator,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Tax-inclusive VAT multiplier (VAT+)
    pub const VAT_PLUS: f64 = 1.2;
    /// Tax-exclusive VAT multiplier (VAT-), an approximation of 1/1.2
    pub const VAT_MINUS: f64 = 5.0 / 6.0;

    /// Creates a controller in its initial state: display `"0"`, memory
    /// unset, editing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            memory: None,
            just_evaluated: false,
            evaluator: Evaluator::new(),
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the stored memory value, if any
    #[must_use]
    pub fn memory(&self) -> Option<&str> {
        self.memory.as_deref()
    }

    /// Returns true if the last action was a successful evaluation
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Dispatches an event to its handler, collecting any signals.
    ///
    /// Fixed mapping from event kind to handler; no dynamic lookup.
    pub fn dispatch(&mut self, event: CalcEvent) -> Vec<Signal> {
        match event {
            CalcEvent::Digit(d) => {
                self.digit(d);
                Vec::new()
            }
            CalcEvent::Operator(op) => {
                self.operator(op);
                Vec::new()
            }
            CalcEvent::TextEdited(text) => self.text_edited(&text),
            CalcEvent::MemoryStore => {
                self.memory_store();
                Vec::new()
            }
            CalcEvent::MemoryRecall => {
                self.memory_recall();
                Vec::new()
            }
            CalcEvent::ClearLast => {
                self.clear_last();
                Vec::new()
            }
            CalcEvent::ClearAll => {
                self.clear_all();
                Vec::new()
            }
            CalcEvent::Equals => self.equals().err().into_iter().collect(),
            CalcEvent::Square => self.square().err().into_iter().collect(),
            CalcEvent::SquareRoot => self.square_root().err().into_iter().collect(),
            CalcEvent::VatAdd => self.vat_add().err().into_iter().collect(),
            CalcEvent::VatSubtract => self.vat_subtract().err().into_iter().collect(),
        }
    }

    /// Replaces the display with an externally edited text, stripping every
    /// character outside the alphabet. Returns one signal per distinct
    /// invalid character, in first-occurrence order.
    pub fn text_edited(&mut self, new_text: &str) -> Vec<Signal> {
        let mut invalid: Vec<char> = Vec::new();
        let mut stripped = String::with_capacity(new_text.len());

        for c in new_text.chars() {
            if is_display_char(c) {
                stripped.push(c);
            } else if !invalid.contains(&c) {
                invalid.push(c);
            }
        }

        self.display = stripped;
        invalid.into_iter().map(Signal::InvalidCharacter).collect()
    }

    /// Appends a digit, starting a fresh expression after an evaluation and
    /// suppressing leading zeros. Digits above 9 are ignored.
    pub fn digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.just_evaluated {
            self.display = c.to_string();
            self.just_evaluated = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    /// Appends an operator, bracket, or decimal point. No adjacency or
    /// balance validation happens here; malformed expressions surface at
    /// evaluation time. Characters outside the alphabet are ignored.
    pub fn operator(&mut self, op: char) {
        if !is_operator_char(op) {
            return;
        }
        self.display.push(op);
        self.just_evaluated = false;
    }

    /// Copies the display verbatim into memory
    pub fn memory_store(&mut self) {
        self.memory = Some(self.display.clone());
        self.just_evaluated = false;
    }

    /// Recalls memory: appends when the display is empty or ends mid
    /// expression, replaces when it holds a completed operand. No-op when
    /// memory is unset.
    pub fn memory_recall(&mut self) {
        let Some(stored) = &self.memory else {
            return;
        };

        let continues = match self.display.chars().last() {
            None => true,
            Some(c) => is_operator_char(c),
        };

        if continues {
            self.display.push_str(stored);
        } else {
            self.display.clone_from(stored);
        }
        self.just_evaluated = false;
    }

    /// Removes the last display character; no-op when already empty
    pub fn clear_last(&mut self) {
        self.display.pop();
        self.just_evaluated = false;
    }

    /// Resets the display to `"0"`. Memory survives.
    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.just_evaluated = false;
    }

    /// Evaluates the display. On success the formatted result replaces the
    /// display; on failure the display is untouched and a signal is
    /// returned.
    pub fn equals(&mut self) -> Result<(), Signal> {
        self.evaluate_with(Ok)
    }

    /// Evaluates the display and squares the result
    pub fn square(&mut self) -> Result<(), Signal> {
        self.evaluate_with(operations::square)
    }

    /// Evaluates the display and takes the non-negative square root.
    /// Fails on a negative operand.
    pub fn square_root(&mut self) -> Result<(), Signal> {
        self.evaluate_with(operations::square_root)
    }

    /// Evaluates the display and adds VAT (multiplies by 1.2)
    pub fn vat_add(&mut self) -> Result<(), Signal> {
        self.evaluate_with(|v| operations::scale(v, Self::VAT_PLUS))
    }

    /// Evaluates the display and removes VAT (multiplies by 5/6)
    pub fn vat_subtract(&mut self) -> Result<(), Signal> {
        self.evaluate_with(|v| operations::scale(v, Self::VAT_MINUS))
    }

    /// Shared evaluate-transform-format path for equals and the derived
    /// unary operations.
    fn evaluate_with(&mut self, f: impl FnOnce(f64) -> CalcResult<f64>) -> Result<(), Signal> {
        let outcome = self
            .evaluator
            .evaluate_str(&self.display)
            .and_then(f)
            .map_err(Signal::InvalidExpression);

        match outcome {
            Ok(value) => {
                self.display = format_number(value);
                self.just_evaluated = true;
                Ok(())
            }
            Err(signal) => {
                // Display untouched; state stays (or returns to) Editing
                self.just_evaluated = false;
                Err(signal)
            }
        }
    }
}
