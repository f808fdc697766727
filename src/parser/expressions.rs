//! Expression parsing implementation
//!
//! # Grammar
//!
//! ```text
//! factor     ::= <number> | "(" expression ")"
//! term       ::= factor { ("*" | "/") factor }
//! expression ::= term { ("+" | "-") term }
//! ```
//!
//! # Precedence
//!
//! There is no precedence table. `parse_expression` combines whole terms, and
//! a term is only returned once all of its `*` and `/` are folded in, so
//! multiplication and division always end up deeper in the tree. Both loops
//! fold to the left, which makes every operator left-associative.
//!
//! # Nesting
//!
//! Each `(` recurses through all three rules, so the depth of open groups is
//! counted and capped at [`MAX_NESTING_DEPTH`]. Going past it is a
//! [`ParseError::NestingTooDeep`], not a stack overflow.

use crate::parser::ast::{BinOp, Node};
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{expect, peek, unexpected, ParseError, ParseResult};

/// Maximum number of parenthesized groups open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

const TERM_OPS: [(TokenKind, BinOp); 2] =
    [(TokenKind::Star, BinOp::Mul), (TokenKind::Slash, BinOp::Div)];

const EXPRESSION_OPS: [(TokenKind, BinOp); 2] =
    [(TokenKind::Plus, BinOp::Add), (TokenKind::Minus, BinOp::Sub)];

/// Parse a factor: a number or a parenthesized expression.
///
/// Parentheses produce no node of their own; `(E)` yields the AST of `E`.
pub fn parse_factor(tokens: &[Token]) -> ParseResult<'_> {
    factor(tokens, 0)
}

/// Parse a term: factors joined by `*` and `/`.
pub fn parse_term(tokens: &[Token]) -> ParseResult<'_> {
    term(tokens, 0)
}

/// Parse an expression: terms joined by `+` and `-`.
pub fn parse_expression(tokens: &[Token]) -> ParseResult<'_> {
    expression(tokens, 0)
}

// `depth` is the number of groups already open around `tokens`.

fn factor(tokens: &[Token], depth: usize) -> ParseResult<'_> {
    let token = peek(tokens)?;
    match &token.kind {
        TokenKind::Number(value) => {
            Ok((Node::Number(value.clone()), &tokens[1..]))
        }
        TokenKind::LParen => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep {
                    position: token.position,
                });
            }
            let (ast, rest) = expression(&tokens[1..], depth + 1)?;
            let rest = expect(rest, TokenKind::RParen, "')'")?;
            Ok((ast, rest))
        }
        _ => Err(unexpected(token, "number or '('")),
    }
}

fn term(tokens: &[Token], depth: usize) -> ParseResult<'_> {
    fold_left(tokens, depth, &TERM_OPS, factor)
}

fn expression(tokens: &[Token], depth: usize) -> ParseResult<'_> {
    fold_left(tokens, depth, &EXPRESSION_OPS, term)
}

/// `operand { op operand }`, folding each new operand onto the accumulated
/// node as its right child.
fn fold_left<'a>(
    tokens: &'a [Token],
    depth: usize,
    ops: &[(TokenKind, BinOp)],
    operand: fn(&'a [Token], usize) -> ParseResult<'a>,
) -> ParseResult<'a> {
    let (mut node, mut rest) = operand(tokens, depth)?;

    while let Some(op) = match_op(rest, ops)? {
        let (right, after) = operand(&rest[1..], depth)?;
        node = Node::binary(op, node, right);
        rest = after;
    }

    Ok((node, rest))
}

fn match_op(
    tokens: &[Token],
    ops: &[(TokenKind, BinOp)],
) -> Result<Option<BinOp>, ParseError> {
    let token = peek(tokens)?;
    Ok(ops
        .iter()
        .find(|(kind, _)| *kind == token.kind)
        .map(|(_, op)| *op))
}
