use core::fmt::{self, Display, Formatter};

use crate::collections::queue::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};
use crate::config::Config;

pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Fixed-capacity FIFO queue over a linearly advancing buffer.
///
/// Slots vacated by [`ArrayQueue::dequeue`] are never reused: `front` only moves
/// forward, so once `capacity` slots have been written the queue accepts no
/// further elements even if it has been drained. [`CircularQueue`] is the
/// reclaiming variant.
///
/// [`CircularQueue`]: crate::collections::CircularQueue
#[derive(Debug, Clone)]
pub struct ArrayQueue {
  items: Box<[i32]>,
  front: usize,
  rear: Option<usize>,
  len: usize,
}

impl ArrayQueue {
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      items: vec![0; capacity].into_boxed_slice(),
      front: 0,
      rear: None,
      len: 0,
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::with_capacity(config.array_queue_capacity)
  }

  fn next_slot(&self) -> usize {
    self.rear.map_or(0, |rear| rear + 1)
  }

  /// Number of slots that have never been written.
  ///
  /// This is how many more elements the queue can accept over its remaining
  /// lifetime, regardless of how many are dequeued.
  pub fn remaining_slots(&self) -> usize {
    self.items.len() - self.next_slot()
  }

  pub fn size(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns `true` when no unused slot remains.
  pub fn is_full(&self) -> bool {
    self.remaining_slots() == 0
  }

  pub fn enqueue(&mut self, value: i32) -> Result<(), QueueError<i32>> {
    if self.is_full() {
      tracing::debug!(
        value,
        capacity = self.items.len(),
        size = self.len,
        "array queue overflow"
      );
      return Err(QueueError::Overflow(value));
    }

    let rear = self.next_slot();
    self.items[rear] = value;
    self.rear = Some(rear);
    self.len += 1;
    Ok(())
  }

  pub fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    if self.is_empty() {
      tracing::debug!("array queue underflow");
      return Err(QueueError::Underflow);
    }

    let value = self.items[self.front];
    self.front += 1;
    self.len -= 1;
    Ok(value)
  }

  pub fn peek(&self) -> Result<i32, QueueError<i32>> {
    if self.is_empty() {
      return Err(QueueError::Underflow);
    }
    Ok(self.items[self.front])
  }

  fn live(&self) -> &[i32] {
    &self.items[self.front..self.front + self.len]
  }
}

impl Default for ArrayQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl QueueBase<i32> for ArrayQueue {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn is_full(&self) -> bool {
    ArrayQueue::is_full(self)
  }
}

impl QueueWriter<i32> for ArrayQueue {
  fn enqueue(&mut self, element: i32) -> Result<(), QueueError<i32>> {
    ArrayQueue::enqueue(self, element)
  }
}

impl QueueReader<i32> for ArrayQueue {
  fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    ArrayQueue::dequeue(self)
  }

  fn peek(&self) -> Result<i32, QueueError<i32>> {
    ArrayQueue::peek(self)
  }
}

impl Display for ArrayQueue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    crate::collections::write_list(f, self.live().iter())
  }
}

#[cfg(test)]
mod tests;
