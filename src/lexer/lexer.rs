use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP};

/// Cursor state for a single `tokenize` call.
///
/// Every read through [`Lexer::at`] is preceded by an end-of-input check, so
/// the cursor never leaves `[0, len]`.
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
}

impl Lexer {
    /// Fails with [`ErrorImpl::InputTooLong`] when offsets into `source`
    /// would not fit a [`Position`].
    pub fn new(source: &str) -> Result<Lexer, Error> {
        let source = source.chars().collect::<Vec<char>>();
        check_source_length(source.len())?;

        Ok(Lexer {
            tokens: vec![],
            source,
            pos: 0,
        })
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        debug_assert!(!self.at_eof(), "lexer read past end of input");
        self.source[self.pos]
    }

    /// Returns the character under the cursor and moves past it.
    pub fn advance(&mut self) -> char {
        let current = self.at();
        self.pos += 1;
        current
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at_whitespace(&self) -> bool {
        !self.at_eof() && is_whitespace(self.at())
    }

    fn at_digit(&self) -> bool {
        !self.at_eof() && is_digit(self.at())
    }

    /// Lexes the next token, skipping any leading whitespace.
    pub fn lex_next(&mut self) -> Result<Token, Error> {
        while self.at_whitespace() {
            self.pos += 1;
        }

        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EOF, None, MK_SPAN!(self.pos, self.pos)));
        }

        let start = self.pos;
        let current = self.advance();

        if let Some(kind) = PUNCTUATION_LOOKUP.get(&current) {
            return Ok(MK_TOKEN!(*kind, None, MK_SPAN!(start, self.pos)));
        }

        match current {
            // `-5` is a literal, `- 5` and a trailing `-` are the operator
            '-' if self.at_digit() => self.lex_number(start, current),
            '-' => Ok(MK_TOKEN!(TokenKind::Minus, None, MK_SPAN!(start, self.pos))),
            c if is_digit(c) => self.lex_number(start, c),
            character => Err(Error::new(
                ErrorImpl::UnexpectedCharacter { character },
                Position::from_offset(start),
            )),
        }
    }

    /// Lexes the rest of a number literal whose first character, a digit or
    /// `-`, has already been consumed.
    fn lex_number(&mut self, start: usize, prefix: char) -> Result<Token, Error> {
        let mut literal = String::from(prefix);
        self.take_digits(&mut literal);

        if self.at_eof() || self.at() != '.' {
            return number_token(literal, start, self.pos);
        }

        literal.push(self.advance());

        if !self.at_digit() {
            return Err(Error::new(
                ErrorImpl::UnterminatedFloat { literal },
                Position::from_offset(self.pos),
            ));
        }

        self.take_digits(&mut literal);
        number_token(literal, start, self.pos)
    }

    fn take_digits(&mut self, literal: &mut String) {
        while self.at_digit() {
            literal.push(self.advance());
        }
    }
}

fn number_token(literal: String, start: usize, end: usize) -> Result<Token, Error> {
    match literal.parse::<f64>() {
        Ok(value) => Ok(MK_TOKEN!(TokenKind::Number, Some(value), MK_SPAN!(start, end))),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { literal },
            Position::from_offset(start),
        )),
    }
}

pub(crate) fn check_source_length(length: usize) -> Result<(), Error> {
    match u32::try_from(length) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::new(ErrorImpl::InputTooLong { length }, Position(0))),
    }
}

/// Only space and newline separate tokens; tab and carriage return do not.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Splits `source` into tokens, ending with exactly one [`TokenKind::EOF`].
///
/// The first malformed character aborts the whole call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source)?;

    loop {
        let token = lex.lex_next()?;
        let done = token.is_eof();
        lex.push(token);

        if done {
            break;
        }
    }

    Ok(lex.tokens)
}
