//! Propositional variables, sets of variables and assignments of truth values

use crate::*;

use bit_set::BitSet;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// Names of all available variables, in alphabetical order.
pub const ALPHABET: [char; 6] = ['p', 'q', 'r', 'x', 'y', 'z'];

/// A propositional variable taken from the fixed [ALPHABET].
///
/// Variables are ordered alphabetically: the internal index is the position of the name in the alphabet.
///
/// ```
/// use logikit::Variable;
///
/// let p: Variable = "p".parse().unwrap();
/// assert_eq!(p, Variable::P);
/// assert!(Variable::P < Variable::X);
/// assert!(Variable::try_from('a').is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Variable(pub(crate) usize);

impl Variable {
    pub const P: Variable = Variable(0);
    pub const Q: Variable = Variable(1);
    pub const R: Variable = Variable(2);
    pub const X: Variable = Variable(3);
    pub const Y: Variable = Variable(4);
    pub const Z: Variable = Variable(5);

    /// Return the position of this variable in the alphabet
    pub fn uid(&self) -> usize {
        self.0
    }

    /// Return the name of the variable
    pub fn name(&self) -> char {
        ALPHABET[self.0]
    }

    /// Iterate over all variables in alphabetical order
    pub fn all() -> impl Iterator<Item = Variable> {
        (0..ALPHABET.len()).map(Variable)
    }
}

impl TryFrom<char> for Variable {
    type Error = LogicError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        ALPHABET
            .iter()
            .position(|n| *n == c)
            .map(Variable)
            .ok_or(LogicError::InvalidVariable(c))
    }
}

impl FromStr for Variable {
    type Err = LogicError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Variable::try_from(c),
            (Some(c), Some(_)) => Err(LogicError::InvalidVariable(c)),
            (None, _) => Err(LogicError::EmptyExpression),
        }
    }
}

impl Formula for Variable {
    fn fmt_with(&self, f: &mut dyn efmt::ExprFormatter) -> fmt::Result {
        f.write_variable(*self)
    }

    fn eval(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        assignment
            .get(*self)
            .ok_or(LogicError::MissingAssignment(*self))
    }

    fn collect_variables(&self, variables: &mut VarSet) {
        variables.insert(*self);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of variables, iterated in alphabetical order.
///
/// A VarSet is an abstraction over [BitSet] indexed by the position of variables in the alphabet.
///
/// ```
/// use logikit::{VarSet, Variable};
///
/// let mut vs = VarSet::default();
/// vs.insert(Variable::R);
/// vs.insert(Variable::P);
/// assert_eq!(vs.to_vec(), vec![Variable::P, Variable::R]);
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarSet {
    variables: BitSet,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter {
        self.into_iter()
    }

    /// Add a variable to this set
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Test if a specific variable is part of this set
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Add all variables from the other set
    pub fn union_with(&mut self, vars: &Self) {
        self.variables.union_with(&vars.variables);
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there are no selected variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// List the variables in alphabetical order
    pub fn to_vec(&self) -> Vec<Variable> {
        self.iter().collect()
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        vs.extend(iter);
        vs
    }
}

impl Extend<Variable> for VarSet {
    fn extend<T: IntoIterator<Item = Variable>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().join(", "))
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Variable)
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}

/// Find the variables of the alphabet which occur in an expression.
///
/// This is a plain containment test on the characters of the expression: it does not check that the expression
/// is valid. Use [Formula::get_variables] on a [ValidatedExpression] to collect the variables of the syntax tree.
///
/// ```
/// use logikit::{extract_variables, Variable};
///
/// let vars = extract_variables("p ∨ (q ∧ r)");
/// assert_eq!(vars.to_vec(), vec![Variable::P, Variable::Q, Variable::R]);
/// ```
pub fn extract_variables(expression: &str) -> VarSet {
    Variable::all()
        .filter(|v| expression.contains(v.name()))
        .collect()
}

/// Truth values associated to variables.
///
/// Entries are kept in alphabetical order of the variables, which makes the substitution
/// order (and thus evaluation traces) deterministic.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assignment from variable names.
    ///
    /// ```
    /// use logikit::{Assignment, Variable};
    ///
    /// let a = Assignment::from_names([('p', true), ('q', false)]).unwrap();
    /// assert_eq!(a.get(Variable::Q), Some(false));
    /// assert!(Assignment::from_names([('k', true)]).is_err());
    /// ```
    pub fn from_names<I: IntoIterator<Item = (char, bool)>>(pairs: I) -> Result<Self, LogicError> {
        pairs
            .into_iter()
            .map(|(c, b)| Variable::try_from(c).map(|v| (v, b)))
            .collect()
    }

    /// Associate a row of a truth table to the corresponding variables.
    ///
    /// Both slices are aligned by position, extra items in the longest one are ignored.
    pub fn from_row(variables: &[Variable], row: &[bool]) -> Self {
        variables.iter().copied().zip(row.iter().copied()).collect()
    }

    /// Set the value of a variable, replacing any previous value
    pub fn set(&mut self, var: Variable, value: bool) {
        self.values.insert(var, value);
    }

    /// Get the value of a variable, if any
    pub fn get(&self, var: Variable) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Iterate over (variable, value) pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().map(|(v, b)| (*v, *b))
    }

    /// Return the first variable of the set without an assigned value
    pub fn first_missing(&self, variables: &VarSet) -> Option<Variable> {
        variables.iter().find(|v| !self.values.contains_key(v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs = self.iter().map(|(v, b)| format!("{}={}", v, b as u8));
        write!(f, "{}", pairs.format(" "))
    }
}
