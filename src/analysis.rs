//! Properties of expressions derived from their truth tables

use crate::*;
use std::fmt;

/// Classification of an expression according to its truth table
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification {
    /// True for all combinations
    Tautology,
    /// False for all combinations
    Contradiction,
    /// True for some combinations and false for others
    Contingency,
}

impl TruthTable {
    pub fn classify(&self) -> Classification {
        match (
            self.results().iter().all(|b| *b),
            self.results().iter().any(|b| *b),
        ) {
            (true, _) => Classification::Tautology,
            (false, false) => Classification::Contradiction,
            (false, true) => Classification::Contingency,
        }
    }
}

/// Classify an expression as tautology, contradiction or contingency.
///
/// ```
/// use logikit::{classify, Classification, ValidatedExpression};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let e: ValidatedExpression = "p ∨ ¬p".parse()?;
/// assert_eq!(classify(&e)?, Classification::Tautology);
/// # Ok(())
/// # }
/// ```
pub fn classify(expression: &ValidatedExpression) -> Result<Classification, LogicError> {
    TruthTable::new(expression).map(|t| t.classify())
}

/// Test if two expressions have the same value for all combinations of their variables.
pub fn equivalent(a: &ValidatedExpression, b: &ValidatedExpression) -> Result<bool, LogicError> {
    let mut variables = extract_variables(a.source());
    variables.union_with(&extract_variables(b.source()));
    let variables = variables.to_vec();

    let options = EvalOptions::default();
    let ta = TruthTable::build(a, variables.clone(), &options)?;
    let tb = TruthTable::build(b, variables, &options)?;
    Ok(ta.results() == tb.results())
}

/// List all assignments which make the expression true, in truth table order
pub fn satisfying_assignments(
    expression: &ValidatedExpression,
) -> Result<Vec<Assignment>, LogicError> {
    let table = TruthTable::new(expression)?;
    Ok(table
        .iter()
        .filter(|(_, result)| *result)
        .map(|(row, _)| Assignment::from_row(table.variables(), row))
        .collect())
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingency => write!(f, "contingency"),
        }
    }
}
