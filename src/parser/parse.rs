//! Parser entry points and shared infrastructure
//!
//! This module provides the error types, the token-slice helpers used by every
//! grammar rule, and the top-level [`parse`] / [`parse_source`] entry points.
//!
//! # Parser Architecture
//!
//! The parser is recursive descent with one function per non-terminal:
//! - `expressions`: `parse_factor`, `parse_term`, `parse_expression`
//! - `statements`: `parse_statement`
//!
//! # State threading
//!
//! Rules hold no parser object. Each one takes the unconsumed tokens as a
//! slice and returns the node it built together with the suffix it did not
//! consume. Slicing is zero-copy, so passing the suffix along costs nothing.

use crate::parser::ast::Node;
use crate::parser::expressions::{parse_expression, MAX_NESTING_DEPTH};
use crate::parser::lexer::{tokenize, LexError, Token, TokenKind};
use crate::parser::statements::parse_statement;
use thiserror::Error;

/// Result of a grammar rule: the node and the tokens left after it.
pub type ParseResult<'a> = Result<(Node, &'a [Token]), ParseError>;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The next token is not one the rule may consume here.
    #[error("unexpected {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        position: usize,
        expected: &'static str,
    },
    /// The token slice ended without an end-of-input token.
    #[error("unexpected end of token stream")]
    UnexpectedEnd,
    /// A `(` opened past [`MAX_NESTING_DEPTH`] enclosing groups.
    #[error(
        "parentheses nested deeper than {max} levels at position {position}",
        max = MAX_NESTING_DEPTH
    )]
    NestingTooDeep { position: usize },
}

impl ParseError {
    /// Source position of the offending token, if there was one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::NestingTooDeep { position } => Some(*position),
            ParseError::UnexpectedEnd => None,
        }
    }
}

/// Either stage of the pipeline failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Source position of the failure, if there was one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.position),
            Error::Parse(err) => err.position(),
        }
    }
}

/// Parse one expression from the start of `tokens`.
///
/// Tokens after the expression are ignored; `"1 2"` parses as `1`.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    let (ast, _rest) = parse_expression(tokens)?;
    Ok(ast)
}

/// Tokenize and parse one statement from source text.
///
/// Accepts a leading `print`. As with [`parse`], trailing tokens are ignored.
pub fn parse_source(text: &str) -> Result<Node, Error> {
    let tokens = tokenize(text)?;
    let (ast, _rest) = parse_statement(&tokens)?;
    Ok(ast)
}

// ===== Helpers =====

/// The next unconsumed token.
pub(crate) fn peek(tokens: &[Token]) -> Result<&Token, ParseError> {
    tokens.first().ok_or(ParseError::UnexpectedEnd)
}

/// Consume a token of `kind` or fail naming what was `expected`.
pub(crate) fn expect<'a>(
    tokens: &'a [Token],
    kind: TokenKind,
    expected: &'static str,
) -> Result<&'a [Token], ParseError> {
    let token = peek(tokens)?;
    if token.kind == kind {
        Ok(&tokens[1..])
    } else {
        Err(unexpected(token, expected))
    }
}

pub(crate) fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.clone(),
        position: token.position,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::BinOp;

    #[test]
    fn test_parse_simple_expression() {
        let tokens = tokenize("1+2").unwrap();
        let ast = parse(&tokens).unwrap();
        assert_eq!(ast, Node::binary(BinOp::Add, Node::int(1), Node::int(2)));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let tokens = tokenize("1 2 )").unwrap();
        assert_eq!(parse(&tokens).unwrap(), Node::int(1));
    }

    #[test]
    fn test_parse_does_not_accept_print() {
        let tokens = tokenize("print 1").unwrap();
        let err = parse(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Print,
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        let tokens = tokenize("").unwrap();
        let err = parse(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_without_sentinel() {
        assert_eq!(parse(&[]).unwrap_err(), ParseError::UnexpectedEnd);

        let tokens = tokenize("1+").unwrap();
        let truncated = &tokens[..tokens.len() - 1];
        assert_eq!(parse(truncated).unwrap_err(), ParseError::UnexpectedEnd);
    }

    #[test]
    fn test_parse_source() {
        let ast = parse_source("print 1*4").unwrap();
        assert_eq!(
            ast,
            Node::print(Node::binary(BinOp::Mul, Node::int(1), Node::int(4)))
        );
    }

    #[test]
    fn test_parse_source_errors() {
        let err = parse_source("$1+2").unwrap_err();
        assert!(matches!(err, Error::Lex(_)));
        assert_eq!(err.position(), Some(0));

        let err = parse_source("1 + * 2").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_source("(1 + 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected end of input at position 6, expected ')'"
        );

        let err = parse_source("1 + $").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at position 4: unexpected character '$'"
        );
    }
}
