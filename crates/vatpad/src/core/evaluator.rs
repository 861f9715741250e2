//! AST evaluator for the arithmetic engine.

use crate::core::operations::check_finite;
use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Operation};

/// Evaluator for parsed expressions
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            // A long enough digit literal parses to infinity, so literals
            // get the same finiteness check as computed results
            AstNode::Number(n) => check_finite(*n),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                // Negation is multiplication by -1
                Operation::Multiply.apply(value, -1.0)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}
