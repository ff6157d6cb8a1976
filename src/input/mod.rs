//! Parsing of user-entered number lists
//!
//! - [`parse`]: splits raw text on commas and whitespace and converts each
//!   token to an integer, reporting the first bad token as a
//!   [`ValidationError`]
//!
//! The stepper never sees invalid input: everything it is given has already
//! passed through [`parse_values`].

pub mod parse;

pub use parse::{parse_values, ValidationError};
