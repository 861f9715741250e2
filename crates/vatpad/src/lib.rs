//! VAT Pad - a keypad calculator with VAT helpers.
//!
//! The crate is split in three layers:
//!
//! - [`core`]: the arithmetic engine - tokenizer, recursive-descent
//!   parser, evaluator, and checked operations
//! - [`controller`]: the input buffer controller that owns the display
//!   text, the one-slot memory, and the just-evaluated flag
//! - [`tui`] (feature `tui`, on by default): a terminal frontend with an
//!   on-screen keypad
//!
//! # Example
//!
//! ```rust
//! use vatpad::prelude::*;
//!
//! let mut ctrl = Controller::new();
//! ctrl.text_edited("100");
//! ctrl.vat_add().unwrap();
//! assert_eq!(ctrl.display(), "120");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod controller;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{CalcEvent, Controller, Signal};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{format_number, CalcError, CalcResult, Operation};
    pub use crate::driver::{CalculatorDriver, ControllerDriver, Script};
}
