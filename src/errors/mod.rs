//! Error types for lexing.
//!
//! Every failure carries the offset where it happened so callers can
//! point at it; see [`crate::render_error`].

pub mod errors;

#[cfg(test)]
mod tests;
