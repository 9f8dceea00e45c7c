//! Bracket-nesting validation over `() {} []`, built on [`Stack`](crate::collections::Stack).

mod bracket;
mod validator;

pub use bracket::Bracket;
pub use validator::{is_valid, validate_with, BracketError, BracketValidator, Rejection, Verdict};
