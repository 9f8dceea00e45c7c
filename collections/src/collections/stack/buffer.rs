use core::fmt::{self, Display, Formatter};

use crate::collections::QueueSize;
use crate::config::Config;

use super::{StackBase, StackError, StackMut};

pub const DEFAULT_STACK_CAPACITY: usize = 10_000;

/// Fixed-capacity LIFO stack of characters.
///
/// Storage for `capacity` characters is reserved once at construction; pushes
/// never reallocate. `Display` lists the elements from bottom to top.
#[derive(Debug)]
pub struct Stack {
  items: Vec<char>,
  capacity: usize,
}

impl Stack {
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_STACK_CAPACITY)
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      items: Vec::with_capacity(capacity),
      capacity,
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::with_capacity(config.stack_capacity)
  }

  pub fn size(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.items.len() == self.capacity
  }

  /// Index of the top element, `None` when empty.
  pub fn top(&self) -> Option<usize> {
    self.items.len().checked_sub(1)
  }

  pub fn push(&mut self, value: char) -> Result<(), StackError> {
    if self.is_full() {
      tracing::debug!(?value, capacity = self.capacity, "stack overflow");
      return Err(StackError::Overflow(value));
    }
    self.items.push(value);
    Ok(())
  }

  pub fn pop(&mut self) -> Result<char, StackError> {
    self.items.pop().ok_or_else(|| {
      tracing::debug!("stack underflow");
      StackError::Underflow
    })
  }

  pub fn peek(&self) -> Result<char, StackError> {
    self.items.last().copied().ok_or(StackError::Underflow)
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }
}

impl Clone for Stack {
  fn clone(&self) -> Self {
    let mut items = Vec::with_capacity(self.capacity);
    items.extend_from_slice(&self.items);
    Self {
      items,
      capacity: self.capacity,
    }
  }
}

impl Default for Stack {
  fn default() -> Self {
    Self::new()
  }
}

impl StackBase for Stack {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.capacity)
  }
}

impl StackMut for Stack {
  fn push(&mut self, value: char) -> Result<(), StackError> {
    Stack::push(self, value)
  }

  fn pop(&mut self) -> Result<char, StackError> {
    Stack::pop(self)
  }

  fn peek(&self) -> Result<char, StackError> {
    Stack::peek(self)
  }

  fn clear(&mut self) {
    Stack::clear(self);
  }
}

impl Display for Stack {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    crate::collections::write_list(f, self.items.iter())
  }
}
