//! Typed arithmetic operations.
//!
//! Every operation returns a checked result: non-finite values never leak
//! out of the engine, so the controller only ever formats real numbers.

use crate::core::{CalcError, CalcResult};

/// Type-safe binary operation enum over the display alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps an alphabet character to its operation
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => check_finite(a + b),
            Self::Subtract => check_finite(a - b),
            Self::Multiply => check_finite(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                check_finite(a / b)
            }
        }
    }
}

/// Squares a value: v * v
pub fn square(v: f64) -> CalcResult<f64> {
    check_finite(v * v)
}

/// Non-negative real square root; negative operands are an error
pub fn square_root(v: f64) -> CalcResult<f64> {
    if v < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    check_finite(v.sqrt())
}

/// Multiplies a value by a fixed factor (the VAT adjustments)
pub fn scale(v: f64, factor: f64) -> CalcResult<f64> {
    check_finite(v * factor)
}

/// Rejects NaN and infinite values so they never reach the display
pub(crate) fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
