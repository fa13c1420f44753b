use crate::token::{self, Token};
use crate::{efmt, Expr, Formula, LogicError, Operator, VarSet, Variable};
use once_cell::sync::Lazy;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use std::fmt;
use std::str::FromStr;

// The grammar works on the canonical form of the expression: one character per token, no spacing.
// It only recognizes flat sequences of operands and operators, precedence is resolved by the Pratt parser.
#[derive(Parser)]
#[grammar_inline = r####"
formula = _{ SOI ~ expr ~ EOI }
expr    =  { operand ~ ( infix ~ operand )* }
operand =  { neg* ~ ( bt | bf | var | group ) }
group   =  { "(" ~ expr ~ ")" }
infix   = _{ conj | disj | nand | nor | xor | xnor | implies }
neg     =  { "¬" }
conj    =  { "∧" }
disj    =  { "∨" }
nand    =  { "⊼" }
nor     =  { "⊽" }
xor     =  { "⊕" }
xnor    =  { "↔" }
implies =  { "→" }
bt      =  { "1" }
bf      =  { "0" }
var     =  { "p" | "q" | "r" | "x" | "y" | "z" }
"####]
struct ExpressionParser;

// All binary operators associate to the left, levels are added from the lowest precedence
static PRATT_PARSER: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    Operator::PRECEDENCE
        .iter()
        .rev()
        .fold(PrattParser::new(), |parser, op| {
            parser.op(Op::infix(operator_rule(*op), Assoc::Left))
        })
});

/// An expression which passed syntax validation.
///
/// This is the only way to obtain a syntax tree from a string: a validated expression can only be constructed by
/// parsing, which rejects unknown symbols, unbalanced parenthesis and misplaced operators.
/// It keeps the source text, the tokens and the syntax tree.
///
/// ```
/// use logikit::{Formula, ValidatedExpression, Variable};
/// # use logikit::LogicError;
/// # fn main() -> Result<(), LogicError> {
///
/// let e: ValidatedExpression = "p -> (q | !r)".parse()?;
/// assert_eq!(e.canonical(), "p→(q∨¬r)");
/// assert_eq!(e.get_variables().to_vec(), vec![Variable::P, Variable::Q, Variable::R]);
///
/// assert!("p ∧ ∨ q".parse::<ValidatedExpression>().is_err());
/// assert!("(p ∧ q".parse::<ValidatedExpression>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedExpression {
    source: String,
    tokens: Vec<Token>,
    tree: Expr,
}

impl ValidatedExpression {
    /// Validate an expression and build its syntax tree
    pub fn parse(source: &str) -> Result<Self, LogicError> {
        let tokens = token::tokenize(source)?;
        if tokens.is_empty() {
            return Err(LogicError::EmptyExpression);
        }

        let canonical = token::canonical(&tokens);
        let mut parsed = ExpressionParser::parse(Rule::formula, &canonical).map_err(|e| {
            if let ErrorVariant::CustomError { message } = &e.variant {
                return LogicError::NestingLimit(message.clone());
            }
            let pos = match e.location {
                InputLocation::Pos(pos) => pos,
                InputLocation::Span((start, _)) => start,
            };
            // the canonical form has one character per token
            let idx = canonical[..pos].chars().count();
            LogicError::MalformedExpression(format!("syntax error in '{}' at token {}", canonical, idx))
        })?;

        let root = parsed
            .next()
            .ok_or_else(|| LogicError::MalformedExpression(canonical.clone()))?;
        let tree = load_expr(root.into_inner())?;

        Ok(Self {
            source: source.trim().to_string(),
            tokens,
            tree,
        })
    }

    /// The source text, without surrounding whitespace
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// The expression written with canonical symbols and no spacing
    pub fn canonical(&self) -> String {
        token::canonical(&self.tokens)
    }
}

fn operator_rule(op: Operator) -> Rule {
    match op {
        Operator::And => Rule::conj,
        Operator::Or => Rule::disj,
        Operator::Nand => Rule::nand,
        Operator::Nor => Rule::nor,
        Operator::Xor => Rule::xor,
        Operator::Xnor => Rule::xnor,
        Operator::Implies => Rule::implies,
    }
}

fn rule_operator(rule: Rule) -> Option<Operator> {
    Operator::PRECEDENCE
        .into_iter()
        .find(|op| operator_rule(*op) == rule)
}

/// Build the tree of a flat sequence of operands and binary operators
fn load_expr(pairs: Pairs<Rule>) -> Result<Expr, LogicError> {
    PRATT_PARSER
        .map_primary(load_operand)
        .map_infix(|lhs, op, rhs| {
            let op = rule_operator(op.as_rule())
                .ok_or_else(|| LogicError::MalformedExpression(op.as_str().to_string()))?;
            Ok(Expr::binary(op, lhs?, rhs?))
        })
        .parse(pairs)
}

/// Build an operand: an atom or a group, preceded by any number of negations
fn load_operand(pair: Pair<Rule>) -> Result<Expr, LogicError> {
    let text = pair.as_str();
    let mut negations = 0;
    let mut atom = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::neg => negations += 1,
            Rule::bt => atom = Some(Expr::Const(true)),
            Rule::bf => atom = Some(Expr::Const(false)),
            Rule::var => atom = Some(Expr::Var(inner.as_str().parse::<Variable>()?)),
            Rule::group => {
                let content = inner
                    .into_inner()
                    .next()
                    .ok_or_else(|| LogicError::MalformedExpression(text.to_string()))?;
                atom = Some(Expr::group(load_expr(content.into_inner())?));
            }
            _ => return Err(LogicError::MalformedExpression(text.to_string())),
        }
    }

    let atom = atom.ok_or_else(|| LogicError::MalformedExpression(text.to_string()))?;
    Ok((0..negations).fold(atom, |e, _| !e))
}

impl FromStr for ValidatedExpression {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Validate a syntax tree by parsing its canonical form
impl TryFrom<&Expr> for ValidatedExpression {
    type Error = LogicError;

    fn try_from(e: &Expr) -> Result<Self, Self::Error> {
        Self::parse(&e.canonical())
    }
}

impl Formula for ValidatedExpression {
    fn fmt_with(&self, f: &mut dyn efmt::ExprFormatter) -> fmt::Result {
        self.tree.fmt_with(f)
    }

    fn eval(&self, assignment: &crate::Assignment) -> Result<bool, LogicError> {
        self.tree.eval(assignment)
    }

    fn collect_variables(&self, variables: &mut VarSet) {
        self.tree.collect_variables(variables)
    }
}

impl fmt::Display for ValidatedExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
