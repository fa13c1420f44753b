//! Propositional formulae defined as syntax trees

use core::ops::{BitAnd, BitOr, BitXor, Not};
use std::fmt;

use crate::efmt::{ExprFormatter, UNICODE_FMT_CFG};
use crate::*;

/// A syntax tree for propositional formulae.
///
/// Internal nodes are the negation, binary operators and parenthesized groups, leaves are variables
/// and fixed Boolean values. Trees obtained from the [validator](ValidatedExpression) keep the
/// parenthesized groups of the source text as [Expr::Group] nodes.
///
/// Expressions overload the ```&```, ```|```, ```^``` and ```!``` operators to facilitate their definition
/// as readable rust statements. Unlike parsed trees, these do not add groups: parenthesis are added
/// when displaying the expression if the structure of the tree requires them.
///
/// ```
/// use logikit::{Assignment, Expr, Formula, Variable};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let p = Expr::from(Variable::P);
/// let q = Expr::from(Variable::Q);
/// let e = !(p & q.clone()) | q;
///
/// let values = Assignment::from_names([('p', true), ('q', false)])?;
/// assert!(e.eval(&values)?);
/// assert_eq!(e.canonical(), "¬(p∧q)∨q");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Const(bool),

    /// A single variable
    Var(Variable),

    /// Negation of an expression
    Not(Box<Expr>),

    /// Two expressions connected with a binary operator
    Binary(Operator, Box<Expr>, Box<Expr>),

    /// An expression enclosed in parenthesis
    Group(Box<Expr>),
}

impl Expr {
    pub fn binary(op: Operator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Binary(op, Box::new(left.into()), Box::new(right.into()))
    }

    pub fn group(inner: impl Into<Expr>) -> Self {
        Expr::Group(Box::new(inner.into()))
    }

    /// Direct children of this node, from left to right
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Const(_) | Expr::Var(_) => vec![],
            Expr::Not(e) | Expr::Group(e) => vec![&**e],
            Expr::Binary(_, l, r) => vec![&**l, &**r],
        }
    }

    /// Replace all variables by their value in the assignment.
    ///
    /// The structure of the tree (including groups) is preserved.
    pub fn substitute(&self, assignment: &Assignment) -> Result<Self, LogicError> {
        Ok(match self {
            Expr::Const(b) => Expr::Const(*b),
            Expr::Var(v) => Expr::Const(v.eval(assignment)?),
            Expr::Not(e) => !e.substitute(assignment)?,
            Expr::Group(e) => Expr::group(e.substitute(assignment)?),
            Expr::Binary(op, l, r) => {
                Expr::binary(*op, l.substitute(assignment)?, r.substitute(assignment)?)
            }
        })
    }

    /// Write the expression with canonical symbols and no spacing
    pub fn canonical(&self) -> String {
        format!("{}", UNICODE_FMT_CFG.infix(self))
    }

    /// Number of operators (negations and binary operators) in the tree
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.operator_count(),
            Expr::Group(e) => e.operator_count(),
            Expr::Binary(_, l, r) => 1 + l.operator_count() + r.operator_count(),
        }
    }

    /// Test if this node must be enclosed in parenthesis when it is an operand of the given parent.
    ///
    /// Operands of a negation must be atomic, the right operand of a binary operator
    /// must bind strictly tighter than its parent as operators associate to the left.
    fn needs_wrap(&self, parent: Option<(Operator, bool)>) -> bool {
        let op = match self {
            Expr::Binary(op, _, _) => *op,
            _ => return false,
        };
        match parent {
            None => true,
            Some((p, false)) => op.priority() < p.priority(),
            Some((p, true)) => op.priority() <= p.priority(),
        }
    }

    fn _fmt_expr(&self, f: &mut dyn ExprFormatter, wrap: bool) -> fmt::Result {
        match self {
            Expr::Const(b) => f.write_const(*b),
            Expr::Var(var) => f.write_variable(*var),
            Expr::Not(e) => {
                f.write_not()?;
                e._fmt_expr(f, e.needs_wrap(None))
            }
            Expr::Group(e) => {
                f.start_group()?;
                e._fmt_expr(f, false)?;
                f.end_group()
            }
            Expr::Binary(op, l, r) => {
                f.start_operation(*op, wrap)?;
                l._fmt_expr(f, l.needs_wrap(Some((*op, false))))?;
                f.sep_operation(*op)?;
                r._fmt_expr(f, r.needs_wrap(Some((*op, true))))?;
                f.end_operation(*op, wrap)
            }
        }
    }
}

impl Formula for Expr {
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        self._fmt_expr(f, false)
    }

    fn eval(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        match self {
            Expr::Const(b) => Ok(*b),
            Expr::Var(var) => var.eval(assignment),
            Expr::Not(e) => e.eval(assignment).map(|b| !b),
            Expr::Group(e) => e.eval(assignment),
            Expr::Binary(op, l, r) => Ok(op.apply(l.eval(assignment)?, r.eval(assignment)?)),
        }
    }

    fn collect_variables(&self, variables: &mut VarSet) {
        match self {
            Expr::Const(_) => (),
            Expr::Var(var) => variables.insert(*var),
            Expr::Not(e) | Expr::Group(e) => e.collect_variables(variables),
            Expr::Binary(_, l, r) => {
                l.collect_variables(variables);
                r.collect_variables(variables);
            }
        }
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Const(b)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Var(var)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

// Delegate Display to the formula trait
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Formula::fmt_formula(self, f)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl Not for Variable {
    type Output = Expr;
    fn not(self) -> Self::Output {
        !Expr::from(self)
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::And, self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::Or, self, rhs)
    }
}

impl<T: Into<Expr>> BitXor<T> for Expr {
    type Output = Expr;
    fn bitxor(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::Xor, self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construct_and_display() {
        let p = Expr::from(Variable::P);
        let e = Expr::binary(Operator::Implies, p.clone() & Variable::Q, !Variable::R);
        assert_eq!(e.canonical(), "p∧q→¬r");
        assert_eq!(format!("{}", e), "p ∧ q → ¬r");

        let e = Expr::binary(Operator::Nand, p.clone(), Expr::binary(Operator::Nand, true, false));
        assert_eq!(e.canonical(), "p⊼(1⊼0)");
        assert_eq!(e.operator_count(), 2);

        let e = Expr::group(p) | false;
        assert_eq!(e.canonical(), "(p)∨0");
    }

    #[test]
    fn eval() -> Result<(), LogicError> {
        let e = (Expr::from(Variable::P) | Variable::Q) & !Variable::R;
        let values = Assignment::from_names([('p', false), ('q', true), ('r', false)])?;
        assert!(e.eval(&values)?);

        let values = Assignment::from_names([('p', false), ('q', true), ('r', true)])?;
        assert!(!e.eval(&values)?);

        let values = Assignment::from_names([('p', true), ('q', true)])?;
        assert_eq!(e.eval(&values), Err(LogicError::MissingAssignment(Variable::R)));
        Ok(())
    }

    #[test]
    fn substitute() -> Result<(), LogicError> {
        let e: ValidatedExpression = "¬(p ∨ q) ↔ x".parse()?;
        let values = Assignment::from_names([('p', true), ('q', false), ('x', true), ('z', true)])?;
        let s = e.tree().substitute(&values)?;
        assert_eq!(s.canonical(), "¬(1∨0)↔1");
        assert!(s.get_variables().is_empty());
        assert_eq!(e.get_variables().to_vec(), vec![Variable::P, Variable::Q, Variable::X]);
        Ok(())
    }
}
