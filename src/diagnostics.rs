//! Diagnostic reporting for lexer and parser errors.
//!
//! Errors carry character positions; this module maps them back onto the
//! source text and renders them with [codespan-reporting], e.g.
//!
//! ```text
//! error[E0101]: unexpected '*'
//!   ┌─ input:1:5
//!   │
//! 1 │ 1 + * 2
//!   │     ^ expected number or '('
//! ```
//!
//! [codespan-reporting]: https://docs.rs/codespan-reporting

use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{self, SimpleFile};
use codespan_reporting::term::{self, termcolor::NoColor, Config};

use crate::parser::lexer::{match_number, LexError, LexErrorKind, TokenKind};
use crate::parser::parse::{Error, ParseError};

impl LexError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => "E0001",
            LexErrorKind::InvalidNumber(_) => "E0002",
        }
    }
}

impl ParseError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "E0101",
            ParseError::UnexpectedEnd => "E0102",
            ParseError::NestingTooDeep { .. } => "E0103",
        }
    }
}

impl Error {
    /// Stable error code of whichever stage failed.
    ///
    /// Lexer codes are `E00xx`, parser codes `E01xx`.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(err) => err.code(),
            Error::Parse(err) => err.code(),
        }
    }
}

/// Build a diagnostic for `error`, labelled against `source`.
pub fn to_diagnostic(error: &Error, source: &str) -> Diagnostic<()> {
    let diagnostic = Diagnostic::error().with_code(error.code());

    match error {
        Error::Lex(err) => {
            let width = match &err.kind {
                LexErrorKind::UnexpectedChar(_) => 1,
                LexErrorKind::InvalidNumber(text) => text.chars().count(),
            };
            diagnostic.with_message(err.kind.to_string()).with_labels(vec![
                Label::primary((), byte_range(source, err.position, width))
                    .with_message(label_for(&err.kind)),
            ])
        }
        Error::Parse(ParseError::UnexpectedToken {
            found,
            position,
            expected,
        }) => {
            let width = token_width(found, source, *position);
            diagnostic
                .with_message(format!("unexpected {}", found))
                .with_labels(vec![Label::primary(
                    (),
                    byte_range(source, *position, width),
                )
                .with_message(format!("expected {}", expected))])
        }
        Error::Parse(err @ ParseError::NestingTooDeep { position }) => diagnostic
            .with_message(err.to_string())
            .with_labels(vec![Label::primary(
                (),
                byte_range(source, *position, 1),
            )
            .with_message("nesting limit reached here")]),
        Error::Parse(err @ ParseError::UnexpectedEnd) => diagnostic
            .with_message(err.to_string())
            .with_notes(vec![
                "token sequences must end with an end-of-input token".to_string(),
            ]),
    }
}

fn label_for(kind: &LexErrorKind) -> &'static str {
    match kind {
        LexErrorKind::UnexpectedChar(_) => "not a valid token",
        LexErrorKind::InvalidNumber(_) => "not a valid number",
    }
}

/// Width in characters of the token `found` at `position`.
///
/// Numbers carry no source text, so their span is re-measured from `source`.
fn token_width(found: &TokenKind, source: &str, position: usize) -> usize {
    match found {
        TokenKind::Number(_) => {
            let rest: Vec<char> = source.chars().skip(position).collect();
            match_number(&rest).unwrap_or(1)
        }
        _ => found.lexeme().map_or(1, |text| text.chars().count()),
    }
}

/// Render `error` as plain text, naming the source `name` in the header.
pub fn render(
    name: &str,
    source: &str,
    error: &Error,
) -> Result<String, files::Error> {
    let file = SimpleFile::new(name, source);
    let diagnostic = to_diagnostic(error, source);

    let mut writer = NoColor::new(Vec::new());
    term::emit(&mut writer, &Config::default(), &file, &diagnostic)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Byte range covering `width` characters starting at character `position`.
///
/// Positions at or past the end collapse to an empty range at the end.
fn byte_range(source: &str, position: usize, width: usize) -> Range<usize> {
    let mut offsets = source
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(source.len()))
        .skip(position);

    let start = offsets.next().unwrap_or(source.len());
    let end = offsets
        .nth(width.saturating_sub(1))
        .unwrap_or(source.len());
    start..end.max(start)
}
