//! Unified calculator driver.
//!
//! Write the verification logic once against [`CalculatorDriver`] and run
//! it against any frontend. The trait speaks in [`CalcEvent`]s, the same
//! currency the controller accepts, so a scripted replay and a live UI
//! exercise identical code paths.

use serde::{Deserialize, Serialize};

use crate::controller::{CalcEvent, Controller, Signal};

/// Abstract driver trait for calculator interactions.
///
/// Both the headless controller driver and the TUI app implement this,
/// so a test specification written once covers every frontend.
///
/// # Example
///
/// ```rust,ignore
/// fn verify_vat<D: CalculatorDriver>(driver: &mut D) {
///     driver.send(CalcEvent::TextEdited("100".into()));
///     driver.send(CalcEvent::VatAdd);
///     assert_eq!(driver.display(), "120");
/// }
/// ```
pub trait CalculatorDriver {
    /// Sends one event, returning any signals it raised
    fn send(&mut self, event: CalcEvent) -> Vec<Signal>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the stored memory value, if any
    fn memory(&self) -> Option<String>;

    /// Resets the display
    fn clear(&mut self) {
        self.send(CalcEvent::ClearAll);
    }

    /// Sends a whole script in order, collecting every signal raised
    fn run_script(&mut self, script: &Script) -> Vec<Signal> {
        script
            .events
            .iter()
            .flat_map(|event| self.send(event.clone()))
            .collect()
    }
}

/// A recorded event sequence, replayable against any driver.
///
/// Scripts serialize to JSON so regression scenarios can live next to the
/// tests as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Events in dispatch order
    pub events: Vec<CalcEvent>,
}

impl Script {
    /// Creates a script from an event list
    #[must_use]
    pub fn new(events: Vec<CalcEvent>) -> Self {
        Self { events }
    }

    /// Parses a script from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the script to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Headless driver wrapping the controller directly
#[derive(Debug, Default)]
pub struct ControllerDriver {
    controller: Controller,
}

impl ControllerDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
        }
    }

    /// Returns a reference to the underlying controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns a mutable reference to the underlying controller
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }
}

impl CalculatorDriver for ControllerDriver {
    fn send(&mut self, event: CalcEvent) -> Vec<Signal> {
        self.controller.dispatch(event)
    }

    fn display(&self) -> String {
        self.controller.display().to_string()
    }

    fn memory(&self) -> Option<String> {
        self.controller.memory().map(str::to_string)
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation.

/// Verifies basic arithmetic through the event interface
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.send(CalcEvent::TextEdited("2+3".into()));
    assert!(driver.send(CalcEvent::Equals).is_empty());
    assert_eq!(driver.display(), "5");

    driver.send(CalcEvent::TextEdited("10-4".into()));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "6");

    driver.send(CalcEvent::TextEdited("6*7".into()));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "42");

    driver.send(CalcEvent::TextEdited("20/4".into()));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// Verifies precedence and bracket grouping
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.send(CalcEvent::TextEdited("2+3*4".into()));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "14");

    driver.send(CalcEvent::TextEdited("(2+3)*4".into()));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies digit entry semantics, including leading-zero suppression
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.send(CalcEvent::Digit(0));
    driver.send(CalcEvent::Digit(7));
    assert_eq!(driver.display(), "7");

    driver.send(CalcEvent::Operator('+'));
    driver.send(CalcEvent::Digit(2));
    driver.send(CalcEvent::Equals);
    assert_eq!(driver.display(), "9");
    driver.clear();
}

/// Verifies the unary operations: square, square root, and the VAT pair
pub fn verify_unary_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.send(CalcEvent::TextEdited("16".into()));
    driver.send(CalcEvent::SquareRoot);
    assert_eq!(driver.display(), "4");

    driver.send(CalcEvent::Square);
    assert_eq!(driver.display(), "16");

    driver.send(CalcEvent::TextEdited("100".into()));
    driver.send(CalcEvent::VatAdd);
    assert_eq!(driver.display(), "120");
    driver.clear();
}

/// Verifies memory store/recall across a clear
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.send(CalcEvent::TextEdited("42".into()));
    driver.send(CalcEvent::MemoryStore);
    driver.send(CalcEvent::ClearAll);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.memory(), Some("42".to_string()));

    driver.send(CalcEvent::TextEdited("".into()));
    driver.send(CalcEvent::MemoryRecall);
    assert_eq!(driver.display(), "42");
    driver.clear();
}

/// Verifies that invalid input raises signals and leaves state recoverable
pub fn verify_error_signals<D: CalculatorDriver>(driver: &mut D) {
    let signals = driver.send(CalcEvent::TextEdited("1a+2".into()));
    assert_eq!(signals, vec![Signal::InvalidCharacter('a')]);
    assert_eq!(driver.display(), "1+2");

    driver.send(CalcEvent::TextEdited("5/0".into()));
    let signals = driver.send(CalcEvent::Equals);
    assert_eq!(signals.len(), 1);
    assert!(matches!(signals[0], Signal::InvalidExpression(_)));
    // Display unchanged; the user can keep editing
    assert_eq!(driver.display(), "5/0");
    driver.clear();
}

/// Complete verification suite - runs every specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_digit_entry(driver);
    verify_unary_operations(driver);
    verify_memory(driver);
    verify_error_signals(driver);
}
