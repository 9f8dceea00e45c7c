use crate::collections::QueueSize;

use super::StackError;

/// Size information of a character stack.
pub trait StackBase {
  /// Returns the current number of elements.
  fn len(&self) -> QueueSize;

  /// Returns the maximum number of elements.
  fn capacity(&self) -> QueueSize;

  /// Returns `true` if the stack holds no element.
  fn is_empty(&self) -> bool {
    self.len().to_usize() == 0
  }

  /// Returns `true` if the next push would overflow.
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }
}

/// Mutable character stack interface.
///
/// This is the contract the bracket validator is written against.
pub trait StackMut: StackBase {
  /// Pushes a value on top.
  ///
  /// # Returns
  ///
  /// * `Ok(())` - On success
  /// * `Err(StackError::Overflow(value))` - If the stack is at capacity
  fn push(&mut self, value: char) -> Result<(), StackError>;

  /// Removes and returns the most recently pushed value.
  ///
  /// # Returns
  ///
  /// * `Ok(value)` - The top value
  /// * `Err(StackError::Underflow)` - If the stack is empty
  fn pop(&mut self) -> Result<char, StackError>;

  /// Returns the top value without removing it.
  fn peek(&self) -> Result<char, StackError>;

  /// Removes every element.
  fn clear(&mut self);
}
