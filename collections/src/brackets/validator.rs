use core::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::collections::{Stack, StackMut};
use crate::config::Config;

use super::Bracket;

/// Why an input is not well nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
  /// A closer appeared while no opener was pending.
  UnmatchedCloser { position: usize, found: char },
  /// A closer of a different kind than the innermost pending opener.
  Mismatch { position: usize, opened: char, found: char },
  /// The input ended with `open` openers still pending.
  Unclosed { open: usize },
}

impl Display for Rejection {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Rejection::UnmatchedCloser { position, found } => {
        write!(f, "unmatched {:?} at position {}", found, position)
      }
      Rejection::Mismatch { position, opened, found } => {
        write!(f, "{:?} at position {} does not close {:?}", found, position, opened)
      }
      Rejection::Unclosed { open } => write!(f, "{} unclosed opener(s) at end of input", open),
    }
  }
}

/// Outcome of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
  Accepted,
  Rejected(Rejection),
}

impl Verdict {
  pub fn is_accepted(&self) -> bool {
    matches!(self, Verdict::Accepted)
  }

  pub fn rejection(&self) -> Option<&Rejection> {
    match self {
      Verdict::Accepted => None,
      Verdict::Rejected(rejection) => Some(rejection),
    }
  }
}

/// The validator's stack ran out of room.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
  #[error("nesting deeper than {max_depth} at position {position}")]
  DepthExceeded { max_depth: usize, position: usize },
}

/// Decides whether a sequence over `() {} []` is well nested.
///
/// Characters other than the six brackets are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketValidator {
  max_depth: Option<usize>,
}

impl BracketValidator {
  /// A validator whose stack is sized to each input, so depth never overflows.
  pub const fn new() -> Self {
    Self { max_depth: None }
  }

  /// A validator that fails with [`BracketError::DepthExceeded`] once more than
  /// `max_depth` openers are pending.
  pub const fn with_max_depth(max_depth: usize) -> Self {
    Self {
      max_depth: Some(max_depth),
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self {
      max_depth: config.bracket_max_depth,
    }
  }

  pub fn max_depth(&self) -> Option<usize> {
    self.max_depth
  }

  pub fn validate(&self, input: &str) -> Result<Verdict, BracketError> {
    let capacity = self
      .max_depth
      .unwrap_or_else(|| input.chars().filter(|c| Bracket::is_opening(*c)).count());
    let mut stack = Stack::with_capacity(capacity);
    let verdict = validate_with(&mut stack, input)?;
    if let Verdict::Rejected(rejection) = &verdict {
      tracing::debug!(%rejection, "bracket sequence rejected");
    }
    Ok(verdict)
  }

  /// Returns `true` only for an accepted input. Exceeding the depth limit counts as invalid.
  pub fn is_valid(&self, input: &str) -> bool {
    matches!(self.validate(input), Ok(Verdict::Accepted))
  }
}

/// Runs the validation on a caller-supplied stack, which must start empty.
pub fn validate_with<S>(stack: &mut S, input: &str) -> Result<Verdict, BracketError>
where
  S: StackMut, {
  for (position, current) in input.chars().enumerate() {
    if Bracket::is_opening(current) {
      stack.push(current).map_err(|_| BracketError::DepthExceeded {
        max_depth: stack.capacity().to_usize(),
        position,
      })?;
    } else if Bracket::is_closing(current) {
      if stack.is_empty() {
        return Ok(Verdict::Rejected(Rejection::UnmatchedCloser {
          position,
          found: current,
        }));
      }
      match stack.pop() {
        Ok(opened) if Bracket::is_matching_pair(opened, current) => {}
        Ok(opened) => {
          return Ok(Verdict::Rejected(Rejection::Mismatch {
            position,
            opened,
            found: current,
          }))
        }
        Err(_) => {
          return Ok(Verdict::Rejected(Rejection::UnmatchedCloser {
            position,
            found: current,
          }))
        }
      }
    }
  }

  if stack.is_empty() {
    Ok(Verdict::Accepted)
  } else {
    Ok(Verdict::Rejected(Rejection::Unclosed {
      open: stack.len().to_usize(),
    }))
  }
}

/// Shorthand for [`BracketValidator::new`] followed by [`BracketValidator::is_valid`].
pub fn is_valid(input: &str) -> bool {
  BracketValidator::new().is_valid(input)
}

#[cfg(test)]
mod tests;
