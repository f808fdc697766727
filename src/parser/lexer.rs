//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. Lexing is ordered-alternative matching: at each cursor position the
//! rules in `RULES` are tried in priority order and the first one that
//! matches wins, even if a later rule would match more text.
//!
//! Positions are zero-based character offsets into the source.

use super::ast::Number;
use num_bigint::BigInt;
use std::fmt;
use thiserror::Error;

/// Token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(Number),

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    // Punctuation
    LParen, // (
    RParen, // )

    // Keywords
    Print,

    // End of input
    Eof,
}

impl TokenKind {
    /// Matched source text for operator, punctuation and keyword tokens.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Print => Some("print"),
            TokenKind::Number(_) | TokenKind::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.lexeme().unwrap_or_default()),
        }
    }
}

/// One lexical unit and the character offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Decoded value of a number token.
    pub fn number(&self) -> Option<&Number> {
        match &self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn lexeme(&self) -> Option<&'static str> {
        self.kind.lexeme()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

/// Why lexing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// No rule accepts the character at the cursor.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// Decoding rejected a literal the number rule accepted. Integers
    /// decode to [`BigInt`] and cannot hit this.
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at position {position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
}

/// One lexical rule. [`Rule::matches`] returns the length of the match at
/// the start of the input, if any.
#[derive(Debug, Clone, PartialEq)]
enum Rule {
    Keyword(&'static str, TokenKind),
    /// `digits.digits`, `.digits`, `digits.` or bare `digits`
    Number,
    Symbol(char, TokenKind),
    Whitespace,
}

/// Lexical rules in priority order. `print` comes first so its letters are
/// never seen by anything else. A character no rule accepts is an error.
const RULES: [Rule; 9] = [
    Rule::Keyword("print", TokenKind::Print),
    Rule::Number,
    Rule::Symbol('+', TokenKind::Plus),
    Rule::Symbol('-', TokenKind::Minus),
    Rule::Symbol('*', TokenKind::Star),
    Rule::Symbol('/', TokenKind::Slash),
    Rule::Symbol('(', TokenKind::LParen),
    Rule::Symbol(')', TokenKind::RParen),
    Rule::Whitespace,
];

impl Rule {
    fn matches(&self, input: &[char]) -> Option<usize> {
        match *self {
            Rule::Keyword(word, _) => {
                let len = word.chars().count();
                let found = input.len() >= len
                    && input[..len].iter().copied().eq(word.chars());
                found.then_some(len)
            }
            Rule::Number => match_number(input),
            Rule::Symbol(expected, _) => {
                (input.first() == Some(&expected)).then_some(1)
            }
            Rule::Whitespace => {
                let len = input.iter().take_while(|c| c.is_whitespace()).count();
                (len > 0).then_some(len)
            }
        }
    }
}

fn count_digits(input: &[char]) -> usize {
    input.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Length of the number literal at the start of `input`, if there is one.
pub(crate) fn match_number(input: &[char]) -> Option<usize> {
    let whole = count_digits(input);
    if input.get(whole) == Some(&'.') {
        let fraction = count_digits(&input[whole + 1..]);
        if whole + fraction > 0 {
            return Some(whole + 1 + fraction);
        }
    }
    (whole > 0).then_some(whole)
}

/// Lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence always ends with a single [`TokenKind::Eof`]
    /// token positioned at the input length.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let start = self.position;
            let (rule, len) = self.match_rule().ok_or_else(|| LexError {
                kind: LexErrorKind::UnexpectedChar(self.input[start]),
                position: start,
            })?;
            self.position += len;

            let kind = match rule {
                Rule::Whitespace => continue,
                Rule::Keyword(_, kind) | Rule::Symbol(_, kind) => kind,
                Rule::Number => TokenKind::Number(self.decode_number(start)?),
            };
            tokens.push(Token::new(kind, start));
        }

        tokens.push(Token::new(TokenKind::Eof, self.position));
        Ok(tokens)
    }

    /// First rule, in priority order, that matches at the cursor.
    fn match_rule(&self) -> Option<(Rule, usize)> {
        let rest = &self.input[self.position..];
        RULES
            .iter()
            .find_map(|rule| rule.matches(rest).map(|len| (rule.clone(), len)))
    }

    /// Decode the literal spanning `start..self.position`.
    fn decode_number(&self, start: usize) -> Result<Number, LexError> {
        let text: String = self.input[start..self.position].iter().collect();
        let decoded = if text.contains('.') {
            text.parse::<f64>().ok().map(Number::Float)
        } else {
            text.parse::<BigInt>().ok().map(Number::Int)
        };

        decoded.ok_or(LexError {
            kind: LexErrorKind::InvalidNumber(text),
            position: start,
        })
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// Tokenize `text` in one call.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Number {
        Number::Int(BigInt::from(value))
    }

    #[test]
    fn test_simple_tokens() {
        let cases = [
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
        ];

        for (text, kind) in cases {
            let tokens = tokenize(text).unwrap();
            assert_eq!(tokens[0], Token::new(kind, 0));
            assert_eq!(tokens[0].lexeme(), Some(text));
            assert_eq!(tokens[1], Token::new(TokenKind::Eof, 1));
        }
    }

    #[test]
    fn test_integer_literals() {
        for (text, value) in [("1", 1), ("11", 11), ("007", 7)] {
            let tokens = tokenize(text).unwrap();
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].number(), Some(&int(value)));
        }
    }

    #[test]
    fn test_float_literals() {
        for (text, value) in [("1.1", 1.1), ("11.11", 11.11), ("11.", 11.0), (".11", 0.11)] {
            let tokens = tokenize(text).unwrap();
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].number(), Some(&Number::Float(value)));
        }
    }

    #[test]
    fn test_second_dot_starts_new_number() {
        let tokens = tokenize("1.2.3").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Number(Number::Float(1.2)), 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Number(Number::Float(0.3)), 3));
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_lone_dot_is_error() {
        let err = tokenize("1 + .").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('.'));
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_multiple_tokens() {
        let tokens = tokenize("1+2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number(int(1)), 0),
                Token::new(TokenKind::Plus, 1),
                Token::new(TokenKind::Number(int(2)), 2),
                Token::new(TokenKind::Eof, 3),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = tokenize("1 + 2").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 4, 5]);
        assert!(tokens[3].is_eof());

        let tokens = tokenize(" \t\n 7 \n").unwrap();
        assert_eq!(tokens[0].position, 4);
        assert_eq!(tokens[1], Token::new(TokenKind::Eof, 7));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![Token::new(TokenKind::Eof, 0)]);
    }

    #[test]
    fn test_print_keyword() {
        let tokens = tokenize("print 1").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Print, 0));
        assert_eq!(tokens[0].lexeme(), Some("print"));
        assert_eq!(tokens[1].position, 6);

        // Keyword wins even without a separator
        let tokens = tokenize("print2").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[1], Token::new(TokenKind::Number(int(2)), 5));
    }

    #[test]
    fn test_partial_keyword_is_error() {
        let err = tokenize("prin 1").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('p'));
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_error() {
        let err = tokenize("$1+2").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('$'));
        assert_eq!(err.position, 0);
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn test_positions_count_characters() {
        let err = tokenize("1 é").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('é'));
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_integers_have_no_width_limit() {
        let digits = "99999999999999999999999999999999999999999999";
        let tokens = tokenize(&format!("1 + {}", digits)).unwrap();

        let expected: BigInt = digits.parse().unwrap();
        assert_eq!(tokens[2].number(), Some(&Number::Int(expected)));
        assert_eq!(tokens[2].position, 4);
        assert_eq!(tokens[3], Token::new(TokenKind::Eof, 4 + digits.len()));
    }

    #[test]
    fn test_match_number_span() {
        let chars: Vec<char> = "123+4".chars().collect();
        assert_eq!(match_number(&chars), Some(3));

        let chars: Vec<char> = "1.2.3".chars().collect();
        assert_eq!(match_number(&chars), Some(3));

        let chars: Vec<char> = ".+".chars().collect();
        assert_eq!(match_number(&chars), None);
    }
}
