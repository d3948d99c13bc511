//! Lexical analysis for arithmetic expressions.
//!
//! This module turns a line of text into tokens. It handles:
//!
//! - Integer and decimal literals, including a leading `-` sign
//! - Parentheses and the `+ - * /` operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
