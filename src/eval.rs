//! Evaluate expressions with optional step-by-step traces

use crate::token::{self, Token};
use crate::*;
use log::debug;

/// Strategy used to resolve operators between parenthesis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Grouping {
    /// Evaluate the syntax tree: precedence applies within each sub-term and
    /// binary operators associate to the left.
    #[default]
    Nested,

    /// Rewrite the expression as a string: inner groups first, then all negations, then each binary operator
    /// in decreasing precedence, every operator being eliminated from the whole group before the next one.
    ///
    /// This gives the same result as [Grouping::Nested] unless a group contains a chain of non-associative
    /// operators (```⊼```, ```⊽``` or ```→```): ```1⊼1⊼1⊼1``` is reduced by pairs as ```(1⊼1)⊼(1⊼1)```.
    GlobalPass,
}

/// Evaluation settings
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EvalOptions {
    /// Record all evaluation steps
    pub trace: bool,
    pub grouping: Grouping,
}

impl EvalOptions {
    /// Default strategy with traces enabled
    pub fn traced() -> Self {
        Self {
            trace: true,
            ..Self::default()
        }
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
}

/// A single operation performed during the evaluation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EvaluationStep {
    /// The part of the (substituted) expression consumed by this step
    pub consumed: String,
    /// Human-readable description of the operation
    pub description: String,
    /// The resulting value: ```'0'``` or ```'1'```
    pub value: char,
    /// Steps used to evaluate the content of a parenthesized group
    pub sub_steps: Vec<EvaluationStep>,
}

/// A step of the substitution of variables by their values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubstitutionStep {
    /// All occurrences of a variable have been replaced
    Replace {
        variable: Variable,
        value: bool,
        state: String,
    },
    /// All variables have been replaced
    Complete { state: String },
}

/// Result of an evaluation, with the recorded traces.
///
/// Steps and the source expression are only available if the trace was enabled.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EvaluationResult {
    pub result: bool,
    pub steps: Vec<EvaluationStep>,
    pub substitution_steps: Vec<SubstitutionStep>,
    pub expression: Option<String>,
}

pub(crate) fn digit(b: bool) -> char {
    match b {
        true => '1',
        false => '0',
    }
}

impl EvaluationStep {
    pub(crate) fn negation(operand: bool, value: bool) -> Self {
        Self {
            consumed: format!("{}{}", NOT_SYMBOL, digit(operand)),
            description: format!("NOT {} = {}", digit(operand), digit(value)),
            value: digit(value),
            sub_steps: vec![],
        }
    }

    pub(crate) fn operation(op: Operator, a: bool, b: bool, value: bool) -> Self {
        Self {
            consumed: format!("{}{}{}", digit(a), op, digit(b)),
            description: format!("{} {} {} = {}", digit(a), op.name(), digit(b), digit(value)),
            value: digit(value),
            sub_steps: vec![],
        }
    }

    pub(crate) fn group(consumed: String, value: bool, sub_steps: Vec<EvaluationStep>) -> Self {
        Self {
            description: format!("{} = {}", consumed, digit(value)),
            consumed,
            value: digit(value),
            sub_steps,
        }
    }

    /// Count this step and all nested steps
    pub fn len_nested(&self) -> usize {
        1 + self.sub_steps.iter().map(|s| s.len_nested()).sum::<usize>()
    }
}

impl SubstitutionStep {
    /// State of the expression after this step
    pub fn state(&self) -> &str {
        match self {
            SubstitutionStep::Replace { state, .. } => state,
            SubstitutionStep::Complete { state } => state,
        }
    }
}

/// Evaluate an expression using the default strategy.
///
/// An empty expression is accepted and evaluates to false.
///
/// ```
/// use logikit::{evaluate, Assignment};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let values = Assignment::from_names([('p', true), ('q', false), ('r', true)])?;
/// let eval = evaluate("p ∧ (q ∨ r)", &values, true)?;
/// assert!(eval.result);
/// assert_eq!(eval.steps.len(), 2);
/// assert_eq!(eval.steps[0].consumed, "(0∨1)");
/// assert_eq!(eval.steps[0].sub_steps[0].description, "0 OR 1 = 1");
/// assert_eq!(eval.steps[1].description, "1 AND 1 = 1");
///
/// assert!(!evaluate("", &Assignment::new(), false)?.result);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    expression: &str,
    assignment: &Assignment,
    trace: bool,
) -> Result<EvaluationResult, LogicError> {
    let options = EvalOptions {
        trace,
        ..EvalOptions::default()
    };
    evaluate_with(expression, assignment, &options)
}

/// Evaluate an expression with custom settings.
///
/// An empty expression is accepted and evaluates to false.
pub fn evaluate_with(
    expression: &str,
    assignment: &Assignment,
    options: &EvalOptions,
) -> Result<EvaluationResult, LogicError> {
    if expression.trim().is_empty() {
        debug!("evaluate(<empty>) -> false");
        return Ok(EvaluationResult::default());
    }
    ValidatedExpression::parse(expression)?.evaluate(assignment, options)
}

impl ValidatedExpression {
    /// Evaluate this expression.
    ///
    /// All variables of the expression must have a value in the assignment, additional values are ignored.
    pub fn evaluate(
        &self,
        assignment: &Assignment,
        options: &EvalOptions,
    ) -> Result<EvaluationResult, LogicError> {
        debug!("evaluate({}, {}, {:?})", self.canonical(), assignment, options);
        if let Some(var) = assignment.first_missing(&self.get_variables()) {
            return Err(LogicError::MissingAssignment(var));
        }

        let mut substitution_steps = vec![];
        let mut steps = vec![];
        let result = match (options.grouping, options.trace) {
            (Grouping::Nested, false) => self.tree().eval(assignment)?,
            (Grouping::Nested, true) => {
                substitute(self.tokens(), assignment, Some(&mut substitution_steps));
                eval_traced(self.tree(), assignment, &mut steps)?
            }
            (Grouping::GlobalPass, trace) => {
                let tokens = match trace {
                    true => substitute(self.tokens(), assignment, Some(&mut substitution_steps)),
                    false => substitute(self.tokens(), assignment, None),
                };
                crate::rewrite::reduce(token::canonical(&tokens), trace.then_some(&mut steps))?
            }
        };

        debug!("evaluate({}) -> {}", self.canonical(), result);
        Ok(EvaluationResult {
            result,
            steps,
            substitution_steps,
            expression: options.trace.then(|| self.source().to_string()),
        })
    }
}

/// Replace variables by their value, one variable at a time in alphabetical order.
fn substitute(
    tokens: &[Token],
    assignment: &Assignment,
    mut trace: Option<&mut Vec<SubstitutionStep>>,
) -> Vec<Token> {
    let mut working = tokens.to_vec();
    for (variable, value) in assignment.iter() {
        let mut changed = false;
        for t in working.iter_mut() {
            if *t == Token::Var(variable) {
                *t = Token::Const(value);
                changed = true;
            }
        }
        if let (true, Some(steps)) = (changed, trace.as_mut()) {
            steps.push(SubstitutionStep::Replace {
                variable,
                value,
                state: token::canonical(&working),
            });
        }
    }
    if let Some(steps) = trace {
        steps.push(SubstitutionStep::Complete {
            state: token::canonical(&working),
        });
    }
    working
}

/// Evaluate a syntax tree, recording one step per operator in post-order.
fn eval_traced(
    expr: &Expr,
    assignment: &Assignment,
    steps: &mut Vec<EvaluationStep>,
) -> Result<bool, LogicError> {
    match expr {
        Expr::Const(b) => Ok(*b),
        Expr::Var(var) => var.eval(assignment),
        Expr::Not(e) => {
            let operand = eval_traced(e, assignment, steps)?;
            steps.push(EvaluationStep::negation(operand, !operand));
            Ok(!operand)
        }
        Expr::Binary(op, l, r) => {
            let a = eval_traced(l, assignment, steps)?;
            let b = eval_traced(r, assignment, steps)?;
            let value = op.apply(a, b);
            steps.push(EvaluationStep::operation(*op, a, b, value));
            Ok(value)
        }
        Expr::Group(e) => {
            let mut sub_steps = vec![];
            let value = eval_traced(e, assignment, &mut sub_steps)?;
            let consumed = expr.substitute(assignment)?.canonical();
            steps.push(EvaluationStep::group(consumed, value, sub_steps));
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::digit;
    use crate::*;
    use itertools::Itertools;
    use test_log::test;

    fn values(pairs: &[(char, bool)]) -> Assignment {
        Assignment::from_names(pairs.iter().copied()).unwrap()
    }

    fn eval_both(expression: &str, assignment: &Assignment) -> Result<bool, LogicError> {
        let nested = evaluate(expression, assignment, false)?.result;
        let options = EvalOptions::default().with_grouping(Grouping::GlobalPass);
        let global = evaluate_with(expression, assignment, &options)?.result;
        assert_eq!(nested, global, "strategies disagree on '{}' with {}", expression, assignment);
        Ok(nested)
    }

    fn binary_table(expression: &str) -> Result<[bool; 4], LogicError> {
        let mut table = [false; 4];
        for (i, row) in generate_combinations(&['p', 'q']).iter().enumerate() {
            table[i] = eval_both(expression, &values(&[('p', row[0]), ('q', row[1])]))?;
        }
        Ok(table)
    }

    #[test]
    fn operator_tables() -> Result<(), LogicError> {
        assert_eq!(binary_table("p ∧ q")?, [false, false, false, true]);
        assert_eq!(binary_table("p ∨ q")?, [false, true, true, true]);
        assert_eq!(binary_table("p ⊼ q")?, [true, true, true, false]);
        assert_eq!(binary_table("p ⊽ q")?, [true, false, false, false]);
        assert_eq!(binary_table("p ⊕ q")?, [false, true, true, false]);
        assert_eq!(binary_table("p ↔ q")?, [true, false, false, true]);
        assert_eq!(binary_table("p → q")?, [true, true, false, true]);

        assert!(!eval_both("¬p", &values(&[('p', true)]))?);
        assert!(eval_both("¬p", &values(&[('p', false)]))?);
        Ok(())
    }

    #[test]
    fn documented_cases() -> Result<(), LogicError> {
        assert!(!eval_both("p ∧ q", &values(&[('p', true), ('q', false)]))?);
        assert!(!eval_both("p → q", &values(&[('p', true), ('q', false)]))?);
        assert!(eval_both("p → q", &values(&[('p', false), ('q', false)]))?);
        assert!(eval_both("p ∧ (q ∨ r)", &values(&[('p', true), ('q', false), ('r', true)]))?);
        Ok(())
    }

    #[test]
    fn redundant_parenthesis() -> Result<(), LogicError> {
        let cases = [
            ("p ∧ q ∨ r", "(p ∧ q) ∨ r"),
            ("p ∨ q ∧ r", "p ∨ (q ∧ r)"),
            ("¬p ∧ q", "(¬p) ∧ q"),
            ("p → q", "((p) → (q))"),
            ("p ⊕ q ↔ r", "(p ⊕ q) ↔ r"),
        ];
        for row in generate_combinations(&['p', 'q', 'r']) {
            let a = values(&[('p', row[0]), ('q', row[1]), ('r', row[2])]);
            for (plain, grouped) in cases {
                assert_eq!(eval_both(plain, &a)?, eval_both(grouped, &a)?);
            }
        }
        Ok(())
    }

    #[test]
    fn nested_groups() -> Result<(), LogicError> {
        let a = values(&[('p', true), ('q', false), ('r', false), ('x', true)]);
        assert!(eval_both("¬(p ∧ (q ∨ ¬(r ⊕ x)))", &a)?);
        assert!(eval_both("((p))", &a)?);
        assert!(eval_both("¬¬(x ∧ ¬¬p)", &a)?);
        assert!(!eval_both("(p ⊽ q) ∨ (r ⊼ x) → q", &a)?);
        Ok(())
    }

    #[test]
    fn strategies_diverge_on_chains() -> Result<(), LogicError> {
        let a = Assignment::new();
        let global = EvalOptions::default().with_grouping(Grouping::GlobalPass);

        assert!(!evaluate("1 ⊼ 1 ⊼ 1 ⊼ 1", &a, false)?.result);
        assert!(evaluate_with("1 ⊼ 1 ⊼ 1 ⊼ 1", &a, &global)?.result);

        // both agree when the chain is grouped explicitly
        assert!(!evaluate_with("((1 ⊼ 1) ⊼ 1) ⊼ 1", &a, &global)?.result);
        Ok(())
    }

    #[test]
    fn strategies_agree_on_associative_chains() -> Result<(), LogicError> {
        let a = Assignment::new();
        for op in Operator::PRECEDENCE {
            let mut diverging = 0;
            for row in generate_combinations(&[(); 4]) {
                let chain = row.iter().map(|b| digit(*b)).join(&op.to_string());
                let nested = evaluate(&chain, &a, false)?.result;
                let global = EvalOptions::default().with_grouping(Grouping::GlobalPass);
                if nested != evaluate_with(&chain, &a, &global)?.result {
                    diverging += 1;
                }
            }
            assert_eq!(op.is_associative(), diverging == 0, "chains of {}", op.name());
        }
        Ok(())
    }

    #[test]
    fn deep_expressions() -> Result<(), LogicError> {
        let a = values(&[('p', true), ('q', false)]);
        let groups = format!("{}p{}", "(".repeat(500), ")".repeat(500));
        assert!(eval_both(&groups, &a)?);

        let negations = format!("{}q", "¬".repeat(2000));
        assert!(!eval_both(&negations, &a)?);
        assert!(eval_both(&format!("¬{}", negations), &a)?);
        Ok(())
    }

    #[test]
    fn empty_expression() -> Result<(), LogicError> {
        for trace in [false, true] {
            let eval = evaluate("", &Assignment::new(), trace)?;
            assert!(!eval.result);
            assert!(eval.steps.is_empty());
            assert!(eval.substitution_steps.is_empty());
        }
        assert!(!evaluate("   ", &values(&[('p', true)]), true)?.result);
        Ok(())
    }

    #[test]
    fn missing_assignment() {
        let a = values(&[('p', true), ('z', false)]);
        assert_eq!(
            evaluate("p ∧ (r ∨ q)", &a, false),
            Err(LogicError::MissingAssignment(Variable::Q))
        );
        let global = EvalOptions::traced().with_grouping(Grouping::GlobalPass);
        assert_eq!(
            evaluate_with("x", &a, &global),
            Err(LogicError::MissingAssignment(Variable::X))
        );
    }

    #[test]
    fn extra_assignments_are_ignored() -> Result<(), LogicError> {
        let a = values(&[('p', true), ('q', true), ('r', false), ('x', false)]);
        let eval = evaluate("p ∧ q", &a, true)?;
        assert!(eval.result);
        assert_eq!(eval.substitution_steps.len(), 3);
        Ok(())
    }

    #[test]
    fn substitution_trace() -> Result<(), LogicError> {
        let a = values(&[('q', false), ('p', true), ('y', true)]);
        let eval = evaluate("q → p ∨ q", &a, true)?;
        assert!(eval.result);
        assert_eq!(eval.expression.as_deref(), Some("q → p ∨ q"));
        assert_eq!(
            eval.substitution_steps,
            vec![
                SubstitutionStep::Replace {
                    variable: Variable::P,
                    value: true,
                    state: "q→1∨q".to_string()
                },
                SubstitutionStep::Replace {
                    variable: Variable::Q,
                    value: false,
                    state: "0→1∨0".to_string()
                },
                SubstitutionStep::Complete {
                    state: "0→1∨0".to_string()
                },
            ]
        );

        let eval = evaluate("q → p ∨ q", &a, false)?;
        assert!(eval.substitution_steps.is_empty());
        assert!(eval.steps.is_empty());
        assert_eq!(eval.expression, None);
        Ok(())
    }

    #[test]
    fn nested_trace() -> Result<(), LogicError> {
        let a = values(&[('p', true), ('q', false), ('r', true)]);
        let eval = evaluate("¬p ∨ (q → ¬(r ∧ p))", &a, true)?;
        assert!(eval.result);

        let consumed: Vec<&str> = eval.steps.iter().map(|s| s.consumed.as_str()).collect();
        assert_eq!(consumed, vec!["¬1", "(0→¬(1∧1))", "0∨1"]);

        let group = &eval.steps[1];
        assert_eq!(group.value, '1');
        let inner: Vec<&str> = group.sub_steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(inner, vec!["(1∧1) = 1", "NOT 1 = 0", "0 IMPLIES 0 = 1"]);
        assert_eq!(group.sub_steps[0].sub_steps[0].description, "1 AND 1 = 1");
        assert_eq!(group.len_nested(), 5);
        Ok(())
    }

    #[test]
    fn global_pass_trace() -> Result<(), LogicError> {
        let a = values(&[('p', true), ('q', false), ('r', true)]);
        let options = EvalOptions::traced().with_grouping(Grouping::GlobalPass);
        let eval = evaluate_with("¬p ∨ (q → ¬(r ∧ p))", &a, &options)?;
        assert!(eval.result);

        let consumed: Vec<&str> = eval.steps.iter().map(|s| s.consumed.as_str()).collect();
        assert_eq!(consumed, vec!["(1∧1)", "(0→¬1)", "¬1", "0∨1"]);
        let inner: Vec<&str> = eval.steps[1].sub_steps.iter().map(|s| s.consumed.as_str()).collect();
        assert_eq!(inner, vec!["¬1", "0→0"]);
        Ok(())
    }

    #[test]
    fn deterministic_traces() -> Result<(), LogicError> {
        let a = values(&[('x', true), ('y', false), ('z', true)]);
        for grouping in [Grouping::Nested, Grouping::GlobalPass] {
            let options = EvalOptions::traced().with_grouping(grouping);
            let first = evaluate_with("(x ⊕ y) ↔ ¬(z ⊽ x) ⊼ y", &a, &options)?;
            let second = evaluate_with("(x ⊕ y) ↔ ¬(z ⊽ x) ⊼ y", &a, &options)?;
            assert_eq!(first, second);
        }
        Ok(())
    }
}
