use crate::efmt::{ExprFormatter, InfixFormatter};
use crate::{Assignment, LogicError, VarSet};
use std::fmt;

/// Common API for propositional formulae.
///
/// This trait defines the API to evaluate and display formulae
pub trait Formula {
    /// Visit the formula with a formatter
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result;

    /// Evaluate the formula with the given truth values
    ///
    /// Fails if a variable of the formula has no value in the assignment.
    fn eval(&self, assignment: &Assignment) -> Result<bool, LogicError>;

    /// Add all variables used by the formula to the set
    fn collect_variables(&self, variables: &mut VarSet);

    /// Construct the set of variables used by the formula
    fn get_variables(&self) -> VarSet {
        let mut variables = VarSet::default();
        self.collect_variables(&mut variables);
        variables
    }

    /// Display the formula with the default infix notation
    fn fmt_formula(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_with(&mut InfixFormatter::new(f))
    }
}
