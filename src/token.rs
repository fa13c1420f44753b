//! Split expressions into tokens and normalize alternative notations

use crate::{LogicError, Operator, Variable, NOT_SYMBOL};
use std::fmt;

/// A lexical unit of an expression
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// A fixed Boolean value (```0``` or ```1```)
    Const(bool),
    /// A propositional variable
    Var(Variable),
    /// The negation operator
    Not,
    /// A binary operator
    Op(Operator),
    /// Opening parenthesis
    Open,
    /// Closing parenthesis
    Close,
}

/// Split an expression into tokens.
///
/// Whitespace is skipped and alternative notations are mapped to the canonical operators:
/// ```!``` and ```~``` for ```¬```, ```&``` for ```∧```, ```|``` for ```∨```, ```↑``` for ```⊼```,
/// ```↓``` for ```⊽```, ```^``` and ```⊻``` for ```⊕```, ```<->```, ```⇔``` and ```≡``` for ```↔```,
/// ```->``` and ```⇒``` for ```→```.
///
/// ```
/// use logikit::token::{canonical, tokenize};
///
/// let tokens = tokenize("~p & (q -> 1)").unwrap();
/// assert_eq!(canonical(&tokens), "¬p∧(q→1)");
/// ```
pub fn tokenize(s: &str) -> Result<Vec<Token>, LogicError> {
    let mut tokens = Vec::new();
    let mut chars = s.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '(' => Token::Open,
            ')' => Token::Close,
            '0' => Token::Const(false),
            '1' => Token::Const(true),
            '!' | '~' => Token::Not,
            '&' => Token::Op(Operator::And),
            '|' => Token::Op(Operator::Or),
            '↑' => Token::Op(Operator::Nand),
            '↓' => Token::Op(Operator::Nor),
            '^' | '⊻' => Token::Op(Operator::Xor),
            '⇔' | '≡' => Token::Op(Operator::Xnor),
            '⇒' => Token::Op(Operator::Implies),
            '-' => match chars.next_if(|(_, n)| *n == '>') {
                Some(_) => Token::Op(Operator::Implies),
                None => return Err(LogicError::UnknownSymbol(c, pos)),
            },
            '<' => match (
                chars.next_if(|(_, n)| *n == '-'),
                chars.next_if(|(_, n)| *n == '>'),
            ) {
                (Some(_), Some(_)) => Token::Op(Operator::Xnor),
                _ => return Err(LogicError::UnknownSymbol(c, pos)),
            },
            c if c == NOT_SYMBOL => Token::Not,
            c => match Operator::from_symbol(c) {
                Some(op) => Token::Op(op),
                None => Token::Var(
                    Variable::try_from(c).map_err(|_| LogicError::UnknownSymbol(c, pos))?,
                ),
            },
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Write a list of tokens with canonical symbols and no spacing
pub fn canonical(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Const(false) => write!(f, "0"),
            Token::Const(true) => write!(f, "1"),
            Token::Var(v) => write!(f, "{}", v),
            Token::Not => write!(f, "{}", NOT_SYMBOL),
            Token::Op(op) => write!(f, "{}", op),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_symbols() -> Result<(), LogicError> {
        let tokens = tokenize("p ∧ (q ∨ ¬r)")?;
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[0], Token::Var(Variable::P));
        assert_eq!(tokens[1], Token::Op(Operator::And));
        assert_eq!(tokens[5], Token::Not);
        assert_eq!(canonical(&tokens), "p∧(q∨¬r)");

        let tokens = tokenize("x⊼y⊽z⊕1↔0→p")?;
        assert_eq!(canonical(&tokens), "x⊼y⊽z⊕1↔0→p");
        Ok(())
    }

    #[test]
    fn aliases() -> Result<(), LogicError> {
        assert_eq!(canonical(&tokenize("!p | ~q")?), "¬p∨¬q");
        assert_eq!(canonical(&tokenize("p <-> q -> r")?), "p↔q→r");
        assert_eq!(canonical(&tokenize("p ⇔ q ≡ r ⇒ x")?), "p↔q↔r→x");
        assert_eq!(canonical(&tokenize("p ↑ q ↓ r ^ x ⊻ y")?), "p⊼q⊽r⊕x⊕y");
        assert_eq!(canonical(&tokenize("p&q")?), "p∧q");
        Ok(())
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(tokenize("p ∧ a"), Err(LogicError::UnknownSymbol('a', 6)));
        assert_eq!(tokenize("p - q"), Err(LogicError::UnknownSymbol('-', 2)));
        assert_eq!(tokenize("p <- q"), Err(LogicError::UnknownSymbol('<', 2)));
        assert_eq!(tokenize("P"), Err(LogicError::UnknownSymbol('P', 0)));
        assert_eq!(tokenize("2"), Err(LogicError::UnknownSymbol('2', 0)));
    }

    #[test]
    fn whitespace_only() -> Result<(), LogicError> {
        assert!(tokenize("")?.is_empty());
        assert!(tokenize(" \t\n")?.is_empty());
        Ok(())
    }
}
