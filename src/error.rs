use crate::Variable;
use thiserror::Error;

/// Error raised while reading or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// The expression is empty
    #[error("The expression is empty")]
    EmptyExpression,

    /// A character is not part of the expression alphabet
    #[error("Unknown symbol '{0}' at position {1}")]
    UnknownSymbol(char, usize),

    /// The expression is not well formed
    #[error("Not a valid expression: {0}")]
    MalformedExpression(String),

    /// The parser ran out of resources, usually on very deeply nested groups
    #[error("Expression nested too deeply: {0}")]
    NestingLimit(String),

    /// A variable of the expression has no value
    #[error("No value assigned to variable '{0}'")]
    MissingAssignment(Variable),

    /// The character is not a variable name
    #[error("'{0}' is not a variable name")]
    InvalidVariable(char),
}
