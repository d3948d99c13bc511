use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at position {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedFloat { .. } => "UnterminatedFloat",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InputTooLong { .. } => "InputTooLong",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}`, only numbers, parentheses and + - * / are allowed",
                character.escape_default()
            )),
            ErrorImpl::UnterminatedFloat { literal } => ErrorTip::Suggestion(format!(
                "Unterminated float: `{}`, a decimal point must be followed by a digit",
                literal
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::None,
            ErrorImpl::InputTooLong { length } => ErrorTip::Suggestion(format!(
                "Input of {} characters is too long, split it into smaller lines",
                length
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated float: {literal:?}")]
    UnterminatedFloat { literal: String },
    #[error("error parsing number: {literal:?}")]
    NumberParseError { literal: String },
    #[error("input too long: {length} characters")]
    InputTooLong { length: usize },
}
