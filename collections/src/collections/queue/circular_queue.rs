use core::fmt::{self, Display, Formatter};

use crate::collections::queue::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter, DEFAULT_QUEUE_CAPACITY};
use crate::config::Config;

/// Fixed-capacity FIFO queue over a ring buffer.
///
/// `front` and `rear` wrap modulo the capacity so slots vacated by a dequeue
/// are written again by later enqueues. Both are `None` exactly when the queue
/// is empty.
///
/// `len` is the only source of truth for emptiness and fullness; the indices
/// are never compared to infer either.
#[derive(Debug, Clone)]
pub struct CircularQueue {
  buf: Box<[i32]>,
  front: Option<usize>,
  rear: Option<usize>,
  len: usize,
}

impl CircularQueue {
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
  }

  /// Creates an empty queue holding at most `capacity` elements.
  ///
  /// A zero capacity is accepted; such a queue rejects every enqueue.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      buf: vec![0; capacity].into_boxed_slice(),
      front: None,
      rear: None,
      len: 0,
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::with_capacity(config.circular_queue_capacity)
  }

  fn cap(&self) -> usize {
    self.buf.len()
  }

  pub fn size(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn is_full(&self) -> bool {
    self.len == self.cap()
  }

  pub fn enqueue(&mut self, value: i32) -> Result<(), QueueError<i32>> {
    if self.is_full() {
      tracing::debug!(value, capacity = self.cap(), "circular queue overflow");
      return Err(QueueError::Overflow(value));
    }

    if self.front.is_none() {
      self.front = Some(0);
    }
    let rear = self.rear.map_or(0, |rear| (rear + 1) % self.cap());
    self.buf[rear] = value;
    self.rear = Some(rear);
    self.len += 1;
    Ok(())
  }

  pub fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    let (front, rear) = match (self.front, self.rear) {
      (Some(front), Some(rear)) if self.len > 0 => (front, rear),
      _ => {
        tracing::debug!("circular queue underflow");
        return Err(QueueError::Underflow);
      }
    };

    let value = self.buf[front];
    if self.len == 1 {
      debug_assert_eq!(front, rear);
      self.front = None;
      self.rear = None;
    } else {
      self.front = Some((front + 1) % self.cap());
    }
    self.len -= 1;
    Ok(value)
  }

  pub fn peek(&self) -> Result<i32, QueueError<i32>> {
    match self.front {
      Some(front) if self.len > 0 => Ok(self.buf[front]),
      _ => Err(QueueError::Underflow),
    }
  }

  /// Index of the front element, `None` when empty.
  pub fn front_index(&self) -> Option<usize> {
    self.front
  }

  /// Index of the rear element, `None` when empty.
  pub fn rear_index(&self) -> Option<usize> {
    self.rear
  }

  /// Walks the occupied slots from front to rear.
  fn occupied(&self) -> impl Iterator<Item = &i32> + '_ {
    let start = self.front.unwrap_or(0);
    (0..self.len).map(move |offset| &self.buf[(start + offset) % self.cap()])
  }
}

impl Default for CircularQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl QueueBase<i32> for CircularQueue {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.cap())
  }
}

impl QueueWriter<i32> for CircularQueue {
  fn enqueue(&mut self, element: i32) -> Result<(), QueueError<i32>> {
    CircularQueue::enqueue(self, element)
  }
}

impl QueueReader<i32> for CircularQueue {
  fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    CircularQueue::dequeue(self)
  }

  fn peek(&self) -> Result<i32, QueueError<i32>> {
    CircularQueue::peek(self)
  }
}

impl Display for CircularQueue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    crate::collections::write_list(f, self.occupied())
  }
}
