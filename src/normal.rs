//! Canonical normal forms built from truth tables

use crate::*;

/// Canonical disjunctive normal form: the disjunction of the minterms of all true rows.
///
/// A contradiction has no minterm and gives the constant ```0```.
///
/// ```
/// use logikit::{canonical_dnf, TruthTable, ValidatedExpression};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let e: ValidatedExpression = "p ⊕ q".parse()?;
/// let dnf = canonical_dnf(&TruthTable::new(&e)?);
/// assert_eq!(dnf.canonical(), "(¬p∧q)∨(p∧¬q)");
/// # Ok(())
/// # }
/// ```
pub fn canonical_dnf(table: &TruthTable) -> Expr {
    let terms = table
        .iter()
        .filter(|(_, result)| *result)
        .map(|(row, _)| join_literals(Operator::And, table.variables(), row, true))
        .collect();
    join_terms(Operator::Or, terms, false)
}

/// Canonical conjunctive normal form: the conjunction of the maxterms of all false rows.
///
/// A tautology has no maxterm and gives the constant ```1```.
pub fn canonical_cnf(table: &TruthTable) -> Expr {
    let terms = table
        .iter()
        .filter(|(_, result)| !*result)
        .map(|(row, _)| join_literals(Operator::Or, table.variables(), row, false))
        .collect();
    join_terms(Operator::And, terms, true)
}

/// Combine the literals of a row: a minterm uses the value of each variable, a maxterm its negation.
fn join_literals(op: Operator, variables: &[Variable], row: &[bool], positive: bool) -> Expr {
    let literals = variables
        .iter()
        .zip(row)
        .map(|(var, value)| match *value == positive {
            true => Expr::from(*var),
            false => !*var,
        })
        .collect();
    join_terms(op, literals, positive)
}

/// Fold terms to the left, or use the neutral element of the operator if there are none.
///
/// Compound terms are enclosed in groups when there are several terms.
fn join_terms(op: Operator, terms: Vec<Expr>, neutral: bool) -> Expr {
    let several = terms.len() > 1;
    terms
        .into_iter()
        .map(|t| match (several, &t) {
            (true, Expr::Binary(_, _, _)) => Expr::group(t),
            _ => t,
        })
        .reduce(|acc, t| Expr::binary(op, acc, t))
        .unwrap_or(Expr::Const(neutral))
}
