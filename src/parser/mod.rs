//! Arithmetic expression parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`], [`expressions`], [`statements`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported language
//!
//! - Integer and floating-point literals (`1`, `1.5`, `.5`, `1.`)
//! - Binary `+ - * /`, with `*` and `/` binding tighter
//! - Parenthesized sub-expressions
//! - An optional leading `print`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, one function per grammar rule.
//! No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
