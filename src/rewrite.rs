//! Reduce substituted expressions by repeated string rewriting.
//!
//! The working string only contains ```0```, ```1```, operators and parenthesis.
//! Innermost groups are replaced by their value until no parenthesis remain, each group being reduced
//! by eliminating all negations, then each binary operator in decreasing precedence.
//! Every rewrite replaces a match by a single character: each pass strictly shortens the string.

use crate::eval::{digit, EvaluationStep};
use crate::{LogicError, Operator, NOT_SYMBOL};
use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]+)\)").unwrap());

static RE_NOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}([01])", regex::escape(&NOT_SYMBOL.to_string()))).unwrap());

static RE_BINARY: Lazy<Vec<(Operator, Regex)>> = Lazy::new(|| {
    Operator::PRECEDENCE
        .iter()
        .map(|op| {
            let pattern = format!("([01]){}([01])", regex::escape(&op.symbol().to_string()));
            (*op, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Reduce a substituted expression to a single Boolean value
pub(crate) fn reduce(
    mut working: String,
    mut steps: Option<&mut Vec<EvaluationStep>>,
) -> Result<bool, LogicError> {
    while working.contains('(') {
        trace!("group pass: {}", working);
        let next = rewrite_pass(&RE_GROUP, &working, |caps| {
            let mut sub_steps = vec![];
            let traced = steps.is_some();
            let value = reduce_flat(caps[1].to_string(), traced.then_some(&mut sub_steps))?;
            if let Some(steps) = steps.as_mut() {
                steps.push(EvaluationStep::group(caps[0].to_string(), value, sub_steps));
            }
            Ok(value)
        })?;
        working = next.ok_or_else(|| stuck(&working))?;
    }
    reduce_flat(working, steps)
}

/// Reduce a group without parenthesis
fn reduce_flat(
    mut working: String,
    mut steps: Option<&mut Vec<EvaluationStep>>,
) -> Result<bool, LogicError> {
    while working.contains(NOT_SYMBOL) {
        trace!("negation pass: {}", working);
        let next = rewrite_pass(&RE_NOT, &working, |caps| {
            let operand = &caps[1] == "1";
            if let Some(steps) = steps.as_mut() {
                steps.push(EvaluationStep::negation(operand, !operand));
            }
            Ok(!operand)
        })?;
        working = next.ok_or_else(|| stuck(&working))?;
    }

    for (op, re) in RE_BINARY.iter() {
        while working.contains(op.symbol()) {
            trace!("{} pass: {}", op.name(), working);
            let next = rewrite_pass(re, &working, |caps| {
                let (a, b) = (&caps[1] == "1", &caps[2] == "1");
                let value = op.apply(a, b);
                if let Some(steps) = steps.as_mut() {
                    steps.push(EvaluationStep::operation(*op, a, b, value));
                }
                Ok(value)
            })?;
            working = next.ok_or_else(|| stuck(&working))?;
        }
    }

    match working.as_str() {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(stuck(&working)),
    }
}

/// Replace all non-overlapping matches, from left to right, by the value computed by the closure.
///
/// Return None if the regex does not match.
fn rewrite_pass<F>(re: &Regex, working: &str, mut f: F) -> Result<Option<String>, LogicError>
where
    F: FnMut(&Captures) -> Result<bool, LogicError>,
{
    let mut result = String::with_capacity(working.len());
    let mut last = 0;
    for caps in re.captures_iter(working) {
        let m = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        result.push_str(&working[last..m.start()]);
        result.push(digit(f(&caps)?));
        last = m.end();
    }
    if last == 0 {
        return Ok(None);
    }
    result.push_str(&working[last..]);
    Ok(Some(result))
}

fn stuck(working: &str) -> LogicError {
    LogicError::MalformedExpression(format!("can not reduce '{}'", working))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(steps: &[EvaluationStep]) -> Vec<&str> {
        steps.iter().map(|s| s.consumed.as_str()).collect()
    }

    #[test]
    fn precedence_is_global() -> Result<(), LogicError> {
        let mut steps = vec![];
        assert!(reduce("1∨0∧0∨0".to_string(), Some(&mut steps))?);
        assert_eq!(consumed(&steps), vec!["0∧0", "1∨0", "1∨0"]);

        // chains are reduced by pairs in a single pass
        let mut steps = vec![];
        assert!(reduce("1→0→0→0".to_string(), Some(&mut steps))?);
        assert_eq!(consumed(&steps), vec!["1→0", "0→0", "0→1"]);
        Ok(())
    }

    #[test]
    fn negations() -> Result<(), LogicError> {
        let mut steps = vec![];
        assert!(reduce("¬¬¬0".to_string(), Some(&mut steps))?);
        assert_eq!(consumed(&steps), vec!["¬0", "¬1", "¬0"]);
        Ok(())
    }

    #[test]
    fn groups() -> Result<(), LogicError> {
        let mut steps = vec![];
        assert!(!reduce("((1⊕1)∨(0↔1))".to_string(), Some(&mut steps))?);
        assert_eq!(consumed(&steps), vec!["(1⊕1)", "(0↔1)", "(0∨0)"]);
        assert_eq!(consumed(&steps[2].sub_steps), vec!["0∨0"]);

        assert!(reduce("(1)".to_string(), None)?);
        Ok(())
    }

    #[test]
    fn malformed() {
        for s in ["(1∧0", "1∧", "¬", "()", "10", "1)", ""] {
            match reduce(s.to_string(), None) {
                Err(LogicError::MalformedExpression(_)) => (),
                other => panic!("'{}' should be rejected, got {:?}", s, other),
            }
        }
    }
}
