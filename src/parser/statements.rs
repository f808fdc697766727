//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= "print" expression | expression
//! ```

use crate::parser::ast::Node;
use crate::parser::expressions::parse_expression;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{peek, ParseResult};

/// Parse a statement. A leading `print` wraps the expression in
/// [`Node::Print`]; otherwise the bare expression is returned.
pub fn parse_statement(tokens: &[Token]) -> ParseResult<'_> {
    if peek(tokens)?.kind == TokenKind::Print {
        let (value, rest) = parse_expression(&tokens[1..])?;
        return Ok((Node::print(value), rest));
    }

    parse_expression(tokens)
}
