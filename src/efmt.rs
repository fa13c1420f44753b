//! Formatting API for expressions

use crate::{Expr, Formula, Operator, Variable};
use delegate::delegate;

use std::fmt;

pub struct FormatterConfig<'a> {
    s_not: &'a str,
    s_and: &'a str,
    s_or: &'a str,
    s_nand: &'a str,
    s_nor: &'a str,
    s_xor: &'a str,
    s_xnor: &'a str,
    s_implies: &'a str,
    spacing: &'a str,
}

/// Canonical symbols without spacing, as used in evaluation traces
pub static UNICODE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "¬",
    s_and: "∧",
    s_or: "∨",
    s_nand: "⊼",
    s_nor: "⊽",
    s_xor: "⊕",
    s_xnor: "↔",
    s_implies: "→",
    spacing: "",
};

/// Canonical symbols with spaces around binary operators
pub static SPACED_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "¬",
    s_and: "∧",
    s_or: "∨",
    s_nand: "⊼",
    s_nor: "⊽",
    s_xor: "⊕",
    s_xnor: "↔",
    s_implies: "→",
    spacing: " ",
};

pub static WORDS_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "not ",
    s_and: "and",
    s_or: "or",
    s_nand: "nand",
    s_nor: "nor",
    s_xor: "xor",
    s_xnor: "xnor",
    s_implies: "implies",
    spacing: " ",
};

pub struct InfixFormatted<'a, T: Formula> {
    formula: &'a T,
    cfg: &'a FormatterConfig<'a>,
}

/// Define hooks to display separate parts of expressions.
///
/// This trait provide entry points used by [crate::Formula::fmt_with] to control the presentation of the expression.
/// The expression visits the inner tree and calls the hooks defined in this trait for each node and leaf.
///
/// Parenthesized groups from the source text are reported through [ExprFormatter::start_group] and
/// [ExprFormatter::end_group]. Operations built without explicit groups are flagged with ```wrap```
/// when their rendering needs parenthesis to preserve the structure of the tree.
pub trait ExprFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a fixed Boolean value
    fn write_const(&mut self, b: bool) -> fmt::Result;

    /// Write a single variable
    fn write_variable(&mut self, var: Variable) -> fmt::Result;

    /// Write a negation, the negated operand follows
    fn write_not(&mut self) -> fmt::Result;

    /// Start writing an operation
    fn start_operation(&mut self, op: Operator, wrap: bool) -> fmt::Result;

    /// Separate operands in the ongoing operation
    fn sep_operation(&mut self, op: Operator) -> fmt::Result;

    /// Stop writing an operation
    fn end_operation(&mut self, op: Operator, wrap: bool) -> fmt::Result;

    fn start_group(&mut self) -> fmt::Result;

    fn end_group(&mut self) -> fmt::Result;
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Nand => self.s_nand,
            Operator::Nor => self.s_nor,
            Operator::Xor => self.s_xor,
            Operator::Xnor => self.s_xnor,
            Operator::Implies => self.s_implies,
        }
    }

    pub fn infix<'a, T: Formula>(&'a self, formula: &'a T) -> InfixFormatted<'a, T> {
        InfixFormatted { formula, cfg: self }
    }
}

pub struct InfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a FormatterConfig<'a>);
pub struct PrefixFormatter<'a, 'b>(InfixFormatter<'a, 'b>);

impl<'a, 'b> InfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f, &SPACED_FMT_CFG)
    }
    pub fn with(f: &'a mut fmt::Formatter<'b>, cfg: &'a FormatterConfig) -> Self {
        Self(f, cfg)
    }
}

impl<'a, 'b> PrefixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(InfixFormatter::with(f, &UNICODE_FMT_CFG))
    }
}

impl ExprFormatter for InfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_const(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, var: Variable) -> fmt::Result {
        write!(self, "{}", var)
    }

    fn write_not(&mut self) -> fmt::Result {
        write!(self, "{}", self.1.s_not)
    }

    fn start_operation(&mut self, _op: Operator, wrap: bool) -> fmt::Result {
        match wrap {
            true => write!(self, "("),
            false => Ok(()),
        }
    }

    fn sep_operation(&mut self, op: Operator) -> fmt::Result {
        write!(self, "{}{}{}", self.1.spacing, self.1.operator(op), self.1.spacing)
    }

    fn end_operation(&mut self, _op: Operator, wrap: bool) -> fmt::Result {
        match wrap {
            true => write!(self, ")"),
            false => Ok(()),
        }
    }

    fn start_group(&mut self) -> fmt::Result {
        write!(self, "(")
    }

    fn end_group(&mut self) -> fmt::Result {
        write!(self, ")")
    }
}

pub struct PrefixFormatted<'a, T: Formula>(pub &'a T);

impl<'a, T: Formula> fmt::Display for PrefixFormatted<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = PrefixFormatter::new(f);
        self.0.fmt_with(&mut ef)
    }
}

impl<T: Formula> fmt::Display for InfixFormatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::with(f, self.cfg);
        self.formula.fmt_with(&mut ef)
    }
}

impl ExprFormatter for PrefixFormatter<'_, '_> {
    delegate! {
        to self.0 {
            fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;
            fn write_const(&mut self, b: bool) -> fmt::Result;
            fn write_variable(&mut self, var: Variable) -> fmt::Result;
            fn write_not(&mut self) -> fmt::Result;
        }
    }

    fn start_operation(&mut self, op: Operator, _wrap: bool) -> fmt::Result {
        write!(self, "({} ", op)
    }

    fn sep_operation(&mut self, _op: Operator) -> fmt::Result {
        write!(self, " ")
    }

    fn end_operation(&mut self, _op: Operator, _wrap: bool) -> fmt::Result {
        write!(self, ")")
    }

    // Prefix notation does not need groups
    fn start_group(&mut self) -> fmt::Result {
        Ok(())
    }

    fn end_group(&mut self) -> fmt::Result {
        Ok(())
    }
}

/// Draw the syntax tree of an expression, one node per line.
///
/// ```
/// use logikit::{efmt::TreeFormatted, ValidatedExpression};
///
/// let e: ValidatedExpression = "p ∧ ¬q".parse().unwrap();
/// assert_eq!(format!("{}", TreeFormatted(e.tree())), "∧\n├─ p\n└─ ¬\n   └─ q\n");
/// ```
pub struct TreeFormatted<'a>(pub &'a Expr);

impl TreeFormatted<'_> {
    fn write_node(
        f: &mut fmt::Formatter,
        e: &Expr,
        prefix: &str,
        connector: &str,
        child_prefix: &str,
    ) -> fmt::Result {
        match e {
            Expr::Const(b) => writeln!(f, "{}{}{}", prefix, connector, *b as u8)?,
            Expr::Var(v) => writeln!(f, "{}{}{}", prefix, connector, v)?,
            Expr::Not(_) => writeln!(f, "{}{}{}", prefix, connector, UNICODE_FMT_CFG.s_not)?,
            Expr::Binary(op, _, _) => writeln!(f, "{}{}{}", prefix, connector, op)?,
            Expr::Group(_) => writeln!(f, "{}{}()", prefix, connector)?,
        }

        let prefix = format!("{}{}", prefix, child_prefix);
        let children = e.children();
        let last = children.len().saturating_sub(1);
        for (idx, child) in children.into_iter().enumerate() {
            match idx == last {
                true => Self::write_node(f, child, &prefix, "└─ ", "   ")?,
                false => Self::write_node(f, child, &prefix, "├─ ", "│  ")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for TreeFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Self::write_node(f, self.0, "", "", "")
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::*;

    #[test]
    fn infix_configs() -> Result<(), LogicError> {
        let e: ValidatedExpression = "p&(q|!r)->x".parse()?;
        assert_eq!(format!("{}", UNICODE_FMT_CFG.infix(e.tree())), "p∧(q∨¬r)→x");
        assert_eq!(format!("{}", e.tree()), "p ∧ (q ∨ ¬r) → x");
        assert_eq!(
            format!("{}", WORDS_FMT_CFG.infix(e.tree())),
            "p and (q or not r) implies x"
        );
        Ok(())
    }

    #[test]
    fn prefix() -> Result<(), LogicError> {
        let e: ValidatedExpression = "p ∧ (q ∨ ¬r) ⊕ x".parse()?;
        assert_eq!(format!("{}", PrefixFormatted(e.tree())), "(⊕ (∧ p (∨ q ¬r)) x)");
        Ok(())
    }

    #[test]
    fn wrap_built_operations() {
        let p = Expr::from(Variable::P);
        let q = Expr::from(Variable::Q);
        let r = Expr::from(Variable::R);

        let e = (p.clone() | q.clone()) & r.clone();
        assert_eq!(e.canonical(), "(p∨q)∧r");

        let e = p.clone() & (q.clone() & r.clone());
        assert_eq!(e.canonical(), "p∧(q∧r)");

        let e = !(p & q) ^ r;
        assert_eq!(e.canonical(), "¬(p∧q)⊕r");
    }

    #[test]
    fn tree() -> Result<(), LogicError> {
        let e: ValidatedExpression = "(p ∨ q) → 1".parse()?;
        let expected = "→\n├─ ()\n│  └─ ∨\n│     ├─ p\n│     └─ q\n└─ 1\n";
        assert_eq!(format!("{}", TreeFormatted(e.tree())), expected);
        Ok(())
    }
}
