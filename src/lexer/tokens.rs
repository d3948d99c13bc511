use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Single-character tokens that never need lookahead.
    ///
    /// `-` is absent on purpose: it may start a negative number literal.
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('+', TokenKind::Plus);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,

    OpenParen,
    CloseParen,

    Plus,
    Minus,
    Star,
    Slash,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme.
///
/// `value` is only ever `Some` for [`TokenKind::Number`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<f64>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}({})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}

/// Renders a token list as `[Number(3), Plus, Number(4), EOF]`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let inner = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    format!("[{}]", inner)
}
