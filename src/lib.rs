//! # Introduction
//!
//! `pmdas` turns arithmetic expressions such as `print 1 + (2 + 3) * 4` into
//! an abstract syntax tree that respects the usual precedence rules:
//! multiplication and division bind tighter than addition and subtraction,
//! and operators of equal precedence group left to right.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — splits the source into positioned [`Token`]s.
//! 2. [`parser::expressions`] / [`parser::statements`] — recursive-descent
//!    grammar rules over a token slice.
//! 3. [`diagnostics`] — renders a failed parse against its source.
//!
//! ```
//! use pmdas::{parse, tokenize, BinOp, Node};
//!
//! let tokens = tokenize("2*4/6").unwrap();
//! let ast = parse(&tokens).unwrap();
//! assert_eq!(
//!     ast,
//!     Node::binary(
//!         BinOp::Div,
//!         Node::binary(BinOp::Mul, Node::int(2), Node::int(4)),
//!         Node::int(6),
//!     )
//! );
//! ```

pub mod diagnostics;
pub mod parser;

pub use parser::ast::{BinOp, Node, Number};
pub use parser::expressions::{parse_expression, parse_factor, parse_term, MAX_NESTING_DEPTH};
pub use parser::lexer::{tokenize, LexError, LexErrorKind, Token, TokenKind};
pub use parser::parse::{parse, parse_source, Error, ParseError, ParseResult};
pub use parser::statements::parse_statement;

pub use num_bigint::BigInt;
