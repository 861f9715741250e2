//! Core arithmetic engine: errors, the display alphabet, and result
//! formatting shared by the evaluator and the controller.

pub mod evaluator;
pub mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced by the arithmetic engine - exhaustive enum ensures all
/// cases are handled at the controller boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Result overflowed the representable range
    #[error("overflow: result exceeds representable range")]
    Overflow,
    /// Invalid expression syntax
    #[error("invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("empty expression")]
    EmptyExpression,
    /// Result is not a representable number (NaN)
    #[error("invalid result: {0}")]
    InvalidResult(String),
    /// Square root of a negative operand (no complex-number support)
    #[error("square root of a negative number")]
    NegativeSquareRoot,
}

/// Characters the display buffer is allowed to contain.
pub const DISPLAY_ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '(', ')', '+', '-', '*', '/',
];

/// Non-digit alphabet characters: operators, brackets, and the decimal
/// point. Memory recall appends rather than replaces when the display ends
/// in one of these.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '(', ')', '.'];

/// Returns true if `c` may appear in the display buffer
#[must_use]
pub fn is_display_char(c: char) -> bool {
    c.is_ascii_digit() || OPERATOR_CHARS.contains(&c)
}

/// Returns true if `c` is an operator, bracket, or decimal point
#[must_use]
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Formats a result value for the display buffer.
///
/// Integral finite values below 1e15 print as plain integers so results
/// like `4.0` display as `"4"`; everything else prints with 10 fractional
/// digits and then trailing zeros and any trailing point are trimmed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_calc_error_display_parse_error() {
        let err = CalcError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_negative_sqrt() {
        assert_eq!(
            CalcError::NegativeSquareRoot.to_string(),
            "square root of a negative number"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::EmptyExpression);
        assert!(err.to_string().contains("empty"));
    }

    // ===== Alphabet tests =====

    #[test]
    fn test_is_display_char_digits() {
        for c in '0'..='9' {
            assert!(is_display_char(c), "digit {c} should be allowed");
        }
    }

    #[test]
    fn test_is_display_char_operators() {
        for c in ['+', '-', '*', '/', '(', ')', '.'] {
            assert!(is_display_char(c), "char '{c}' should be allowed");
        }
    }

    #[test]
    fn test_is_display_char_rejects_letters() {
        for c in ['a', 'Z', '@', ' ', '=', '^', '%'] {
            assert!(!is_display_char(c), "char '{c}' should be rejected");
        }
    }

    #[test]
    fn test_alphabet_consistency() {
        for &c in DISPLAY_ALPHABET {
            assert!(is_display_char(c));
        }
    }

    #[test]
    fn test_is_operator_char() {
        assert!(is_operator_char('+'));
        assert!(is_operator_char('.'));
        assert!(!is_operator_char('5'));
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
    }

    #[test]
    fn test_format_number_negative_integer() {
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
    }

    #[test]
    fn test_format_number_trailing_zeros() {
        assert_eq!(format_number(2.500), "2.5");
    }

    #[test]
    fn test_format_number_small_decimal() {
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_format_number_near_integer_rounds_clean() {
        // 10 fractional digits round away float noise from the VAT factors
        assert_eq!(format_number(100.000_000_000_000_01), "100");
    }

    #[test]
    fn test_format_number_large_integer() {
        assert_eq!(format_number(1e14), "100000000000000");
    }
}
