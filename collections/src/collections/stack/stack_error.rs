use thiserror::Error;

/// Stack-specific error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
  /// The stack is at capacity. Carries the rejected character.
  #[error("stack overflow: cannot push {0:?}")]
  Overflow(char),
  /// The stack holds no element to pop or peek.
  #[error("stack underflow: stack is empty")]
  Underflow,
}
