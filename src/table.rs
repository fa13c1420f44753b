//! Truth tables

use crate::*;
use itertools::Itertools;
use log::debug;
use std::fmt;

/// Enumerate all combinations of truth values for a list of variables.
///
/// Row ```i``` is the binary representation of ```i``` over ```n``` bits, the most significant bit
/// corresponding to the first variable. Rows are thus sorted from all-false to all-true.
/// An empty list of variables has a single (empty) combination.
///
/// # Panics
///
/// Panics if the number of rows does not fit in a ```usize```, i.e. with 64 variables or more
/// on 64-bit targets. Lists of [variables](Variable) never exceed the size of the alphabet.
///
/// ```
/// use logikit::generate_combinations;
///
/// let rows = generate_combinations(&['p', 'q']);
/// assert_eq!(rows, vec![
///     vec![false, false],
///     vec![false, true],
///     vec![true, false],
///     vec![true, true],
/// ]);
/// ```
pub fn generate_combinations<T>(variables: &[T]) -> Vec<Vec<bool>> {
    let n = variables.len();
    let count = match u32::try_from(n).ok().and_then(|n| 1usize.checked_shl(n)) {
        Some(count) => count,
        None => panic!("too many variables to enumerate: {}", n),
    };
    (0..count)
        .map(|row| (0..n).map(|bit| (row >> (n - 1 - bit)) & 1 == 1).collect())
        .collect()
}

/// The value of an expression for all combinations of its variables.
///
/// ```
/// use logikit::{TruthTable, ValidatedExpression};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let e: ValidatedExpression = "p → q".parse()?;
/// let table = TruthTable::new(&e)?;
/// assert_eq!(table.results(), &[true, true, false, true]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TruthTable {
    expression: String,
    variables: Vec<Variable>,
    rows: Vec<Vec<bool>>,
    results: Vec<bool>,
}

impl TruthTable {
    /// Build the truth table over the variables found in the expression
    pub fn new(expression: &ValidatedExpression) -> Result<Self, LogicError> {
        let variables = extract_variables(expression.source()).to_vec();
        Self::build(expression, variables, &EvalOptions::default())
    }

    /// Build the truth table over a custom list of variables.
    ///
    /// The list must contain all variables of the expression, additional variables
    /// are enumerated but have no effect on the results. Repeated variables are only kept once.
    pub fn build(
        expression: &ValidatedExpression,
        variables: Vec<Variable>,
        options: &EvalOptions,
    ) -> Result<Self, LogicError> {
        let variables: Vec<Variable> = variables.into_iter().unique().collect();
        debug!(
            "truth table of {} over [{}]",
            expression.canonical(),
            variables.iter().join(", ")
        );
        let rows = generate_combinations(&variables);
        let results = rows
            .iter()
            .map(|row| {
                let assignment = Assignment::from_row(&variables, row);
                expression.evaluate(&assignment, options).map(|r| r.result)
            })
            .collect::<Result<Vec<bool>, LogicError>>()?;

        Ok(Self {
            expression: expression.source().to_string(),
            variables,
            rows,
            results,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// Iterate over the rows and the associated result
    pub fn iter(&self) -> impl Iterator<Item = (&[bool], bool)> {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .zip(self.results.iter().copied())
    }

    /// Assignment corresponding to a row of the table
    pub fn assignment(&self, row: usize) -> Option<Assignment> {
        self.rows
            .get(row)
            .map(|values| Assignment::from_row(&self.variables, values))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = self.variables.iter().join(" ");
        let sep = if header.is_empty() { "" } else { " " };
        writeln!(f, "{}{}| {}", header, sep, self.expression)?;
        for (row, result) in self.iter() {
            let cells = row.iter().map(|b| *b as u8).join(" ");
            writeln!(f, "{}{}| {}", cells, sep, result as u8)?;
        }
        Ok(())
    }
}
