//! Evaluate and analyze propositional logic expressions.
//!
//! Expressions combine [variables](Variable) taken from a fixed alphabet (```p```, ```q```, ```r```, ```x```, ```y```, ```z```),
//! the constants ```0``` and ```1```, the negation ```¬``` and seven [binary operators](Operator).
//! From the highest to the lowest precedence: ```∧``` (AND), ```∨``` (OR), ```⊼``` (NAND), ```⊽``` (NOR),
//! ```⊕``` (XOR), ```↔``` (XNOR) and ```→``` (implication). Parenthesis can be used to group sub-expressions.
//! Common ASCII notations are accepted as well (```!```, ```&```, ```|```, ```^```, ```->```, ```<->```).
//!
//! ```
//! use logikit::{evaluate, Assignment};
//! # use logikit::LogicError;
//! # fn main() -> Result<(), LogicError> {
//!
//! let values = Assignment::from_names([('p', true), ('q', false)])?;
//! assert!(!evaluate("p → q", &values, false)?.result);
//! assert!(evaluate("p & !q", &values, false)?.result);
//! # Ok(())
//! # }
//! ```
//!
//! # Validated expressions and syntax trees
//!
//! Before evaluation, the text of an expression is split into [tokens](token::Token) and checked by a parser.
//! A [ValidatedExpression] can only be obtained through this validation, it carries the [syntax tree](Expr)
//! of the expression. Syntax trees can be displayed with several [formatters](efmt).
//!
//! ```
//! use logikit::{efmt, ValidatedExpression};
//! # use logikit::LogicError;
//! # fn main() -> Result<(), LogicError> {
//!
//! let e: ValidatedExpression = "p ∧ (q ∨ ¬r)".parse()?;
//! assert_eq!(format!("{}", efmt::PrefixFormatted(e.tree())), "(∧ p (∨ q ¬r))");
//! assert!("p ∧ ∨ q".parse::<ValidatedExpression>().is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation traces
//!
//! An evaluation can record each operation, from the substitution of variables by their values
//! to the final result. Parenthesized groups record the steps of their content as nested steps.
//! Two [strategies](Grouping) are available: the default one evaluates the syntax tree,
//! the other one rewrites the text of the expression using operator precedence over whole groups.
//!
//! ```
//! use logikit::{evaluate_with, Assignment, EvalOptions, Grouping};
//! # use logikit::LogicError;
//! # fn main() -> Result<(), LogicError> {
//!
//! let values = Assignment::from_names([('p', true), ('q', false), ('r', true)])?;
//! let options = EvalOptions::traced().with_grouping(Grouping::GlobalPass);
//! let eval = evaluate_with("¬p ∨ q ∧ r", &values, &options)?;
//!
//! assert!(!eval.result);
//! assert_eq!(eval.substitution_steps.last().unwrap().state(), "¬1∨0∧1");
//! let descriptions: Vec<&str> = eval.steps.iter().map(|s| s.description.as_str()).collect();
//! assert_eq!(descriptions, vec!["NOT 1 = 0", "0 AND 1 = 0", "0 OR 0 = 0"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables and analysis
//!
//! A [TruthTable] evaluates an expression for all [combinations](generate_combinations) of its variables.
//! It supports the [classification](classify) of expressions, [equivalence](equivalent) tests
//! and the construction of [canonical normal forms](canonical_dnf).
//!
//! ```
//! use logikit::{canonical_cnf, classify, Classification, TruthTable, ValidatedExpression};
//! # use logikit::LogicError;
//! # fn main() -> Result<(), LogicError> {
//!
//! let e: ValidatedExpression = "(p → q) ∧ p".parse()?;
//! assert_eq!(classify(&e)?, Classification::Contingency);
//!
//! let table = TruthTable::new(&e)?;
//! assert_eq!(table.results(), &[false, false, false, true]);
//! assert_eq!(canonical_cnf(&table).canonical(), "(p∨q)∧(p∨¬q)∧(¬p∨q)");
//! # Ok(())
//! # }
//! ```

mod analysis;
pub mod efmt;
mod error;
mod eval;
mod expr;
mod formula;
mod normal;
mod operator;
mod parse;
mod rewrite;
mod table;
pub mod token;
mod variable;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use analysis::{classify, equivalent, satisfying_assignments, Classification};
pub use error::LogicError;
pub use eval::{
    evaluate, evaluate_with, EvalOptions, EvaluationResult, EvaluationStep, Grouping,
    SubstitutionStep,
};
pub use expr::Expr;
pub use formula::Formula;
pub use normal::{canonical_cnf, canonical_dnf};
pub use operator::{Operator, NOT_SYMBOL};
pub use parse::ValidatedExpression;
pub use table::{generate_combinations, TruthTable};
pub use variable::{extract_variables, Assignment, VarSet, Variable, ALPHABET};
