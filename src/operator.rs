//! Binary connectives and their precedence

use std::fmt;

/// Canonical symbol of the negation
pub const NOT_SYMBOL: char = '¬';

/// Binary connectives, from the highest to the lowest precedence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    /// AND operator: both operands need to be true
    And,
    /// OR operator: at least one operand needs to be true
    Or,
    /// NAND operator: negation of AND
    Nand,
    /// NOR operator: negation of OR
    Nor,
    /// XOR operator: exactly one operand is true
    Xor,
    /// XNOR operator (biconditional): both operands have the same value
    Xnor,
    /// Material implication: false only if the left operand is true and the right one is false
    Implies,
}

impl Operator {
    /// All operators, ordered from the highest to the lowest precedence
    pub const PRECEDENCE: [Operator; 7] = [
        Operator::And,
        Operator::Or,
        Operator::Nand,
        Operator::Nor,
        Operator::Xor,
        Operator::Xnor,
        Operator::Implies,
    ];

    /// Binding strength of the operator: higher values bind tighter
    pub fn priority(self) -> u8 {
        match self {
            Operator::And => 7,
            Operator::Or => 6,
            Operator::Nand => 5,
            Operator::Nor => 4,
            Operator::Xor => 3,
            Operator::Xnor => 2,
            Operator::Implies => 1,
        }
    }

    /// Canonical symbol used in expressions
    pub fn symbol(self) -> char {
        match self {
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Nand => '⊼',
            Operator::Nor => '⊽',
            Operator::Xor => '⊕',
            Operator::Xnor => '↔',
            Operator::Implies => '→',
        }
    }

    /// Find the operator associated to a canonical symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::PRECEDENCE.iter().copied().find(|op| op.symbol() == c)
    }

    /// Upper-case name, used in evaluation traces
    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
            Operator::Xor => "XOR",
            Operator::Xnor => "XNOR",
            Operator::Implies => "IMPLIES",
        }
    }

    /// Apply the operator on two Boolean values
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operator::And => a && b,
            Operator::Or => a || b,
            Operator::Nand => !(a && b),
            Operator::Nor => !(a || b),
            Operator::Xor => a != b,
            Operator::Xnor => a == b,
            Operator::Implies => !a || b,
        }
    }

    /// Test if grouping does not matter for chains of this operator
    pub fn is_associative(self) -> bool {
        !matches!(self, Operator::Nand | Operator::Nor | Operator::Implies)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(op: Operator) -> [bool; 4] {
        [
            op.apply(false, false),
            op.apply(false, true),
            op.apply(true, false),
            op.apply(true, true),
        ]
    }

    #[test]
    fn truth_tables() {
        assert_eq!(table(Operator::And), [false, false, false, true]);
        assert_eq!(table(Operator::Or), [false, true, true, true]);
        assert_eq!(table(Operator::Nand), [true, true, true, false]);
        assert_eq!(table(Operator::Nor), [true, false, false, false]);
        assert_eq!(table(Operator::Xor), [false, true, true, false]);
        assert_eq!(table(Operator::Xnor), [true, false, false, true]);
        assert_eq!(table(Operator::Implies), [true, true, false, true]);
    }

    #[test]
    fn precedence_order() {
        let priorities: Vec<u8> = Operator::PRECEDENCE.iter().map(|op| op.priority()).collect();
        assert!(priorities.windows(2).all(|w| w[0] > w[1]));

        for op in Operator::PRECEDENCE {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol(NOT_SYMBOL), None);
    }
}
