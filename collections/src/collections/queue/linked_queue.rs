use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ptr::NonNull;
use std::alloc::{self, Layout};

use crate::collections::queue::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

struct Node {
  value: i32,
  next: Option<NonNull<Node>>,
}

/// Unbounded FIFO queue built from individually allocated nodes.
///
/// The chain starting at `front` owns every node; `rear` is a non-owning
/// pointer to the last node. Both are `None` exactly when the queue is empty,
/// so `rear` never outlives the node it points to.
///
/// Dropping the queue releases all remaining nodes front to rear.
pub struct LinkedQueue {
  front: Option<NonNull<Node>>,
  rear: Option<NonNull<Node>>,
  len: usize,
  _owns: PhantomData<Box<Node>>,
}

static_assertions::assert_not_impl_any!(LinkedQueue: Send, Sync);

impl LinkedQueue {
  pub const fn new() -> Self {
    Self {
      front: None,
      rear: None,
      len: 0,
      _owns: PhantomData,
    }
  }

  /// Allocates a detached node, returning `None` if the allocator refuses.
  fn allocate(value: i32) -> Option<NonNull<Node>> {
    let layout = Layout::new::<Node>();
    // SAFETY: `Node` is not zero-sized.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<Node>();
    let node = NonNull::new(ptr)?;
    // SAFETY: `node` is freshly allocated with the layout of `Node`.
    unsafe { node.as_ptr().write(Node { value, next: None }) };
    Some(node)
  }

  pub fn size(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.front.is_none()
  }

  pub fn enqueue(&mut self, value: i32) -> Result<(), QueueError<i32>> {
    let Some(node) = Self::allocate(value) else {
      tracing::warn!(value, size = self.len, "linked queue failed to allocate a node");
      return Err(QueueError::AllocationFailed(value));
    };

    match self.rear {
      None => self.front = Some(node),
      // SAFETY: `rear` is the live last node of the chain owned by `self`.
      Some(rear) => unsafe { (*rear.as_ptr()).next = Some(node) },
    }
    self.rear = Some(node);
    self.len += 1;
    Ok(())
  }

  pub fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    let Some(front) = self.front else {
      tracing::debug!("linked queue underflow");
      return Err(QueueError::Underflow);
    };

    // SAFETY: `front` was produced by `allocate` with the layout `Box` uses, it is
    // initialised, and after this point nothing in the chain refers to it.
    let node = unsafe { Box::from_raw(front.as_ptr()) };
    self.front = node.next;
    if self.front.is_none() {
      self.rear = None;
    }
    self.len -= 1;
    Ok(node.value)
  }

  pub fn peek(&self) -> Result<i32, QueueError<i32>> {
    match self.front {
      // SAFETY: `front` is a live node owned by `self`.
      Some(front) => Ok(unsafe { front.as_ref() }.value),
      None => Err(QueueError::Underflow),
    }
  }

  /// Releases every node. Returns how many were released.
  pub fn clear(&mut self) -> usize {
    let mut released = 0;
    while self.dequeue().is_ok() {
      released += 1;
    }
    if released > 0 {
      tracing::trace!(released, "linked queue released nodes");
    }
    released
  }

  fn values(&self) -> Values<'_> {
    Values {
      next: self.front,
      _queue: PhantomData,
    }
  }
}

struct Values<'a> {
  next: Option<NonNull<Node>>,
  _queue: PhantomData<&'a LinkedQueue>,
}

impl<'a> Iterator for Values<'a> {
  type Item = &'a i32;

  fn next(&mut self) -> Option<Self::Item> {
    self.next.map(|node| {
      // SAFETY: the queue is borrowed for `'a`, so every node in the chain stays alive.
      let node = unsafe { &*node.as_ptr() };
      self.next = node.next;
      &node.value
    })
  }
}

impl Default for LinkedQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for LinkedQueue {
  fn drop(&mut self) {
    self.clear();
  }
}

impl Debug for LinkedQueue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("LinkedQueue")
      .field("values", &self.values().collect::<Vec<_>>())
      .field("len", &self.len)
      .finish()
  }
}

impl Display for LinkedQueue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    crate::collections::write_list(f, self.values())
  }
}

impl QueueBase<i32> for LinkedQueue {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl QueueWriter<i32> for LinkedQueue {
  fn enqueue(&mut self, element: i32) -> Result<(), QueueError<i32>> {
    LinkedQueue::enqueue(self, element)
  }
}

impl QueueReader<i32> for LinkedQueue {
  fn dequeue(&mut self) -> Result<i32, QueueError<i32>> {
    LinkedQueue::dequeue(self)
  }

  fn peek(&self) -> Result<i32, QueueError<i32>> {
    LinkedQueue::peek(self)
  }
}
