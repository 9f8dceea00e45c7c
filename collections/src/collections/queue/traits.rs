use super::{queue_error::QueueError, queue_size::QueueSize};

/// Common trait defining basic queue operations.
///
/// This trait provides size information only. It serves as the base trait for
/// [`QueueWriter`] and [`QueueReader`].
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueBase<E> {
  /// Returns the current number of elements as [`QueueSize::Limited`].
  fn len(&self) -> QueueSize;

  /// Returns the maximum number of elements the queue can hold.
  ///
  /// Returns `QueueSize::Limitless` for unbounded queues.
  fn capacity(&self) -> QueueSize;

  /// Returns `true` if the queue holds no element.
  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }

  fn non_empty(&self) -> bool {
    !self.is_empty()
  }

  /// Returns `true` if the next insertion would overflow.
  ///
  /// A limitless queue is never full.
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  fn non_full(&self) -> bool {
    !self.is_full()
  }
}

/// Trait providing write operations to the queue.
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueWriter<E>: QueueBase<E> {
  /// Appends an element at the rear.
  ///
  /// # Returns
  ///
  /// * `Ok(())` - If the element was added
  /// * `Err(QueueError::Overflow(element))` - If a bounded queue has no free slot
  /// * `Err(QueueError::AllocationFailed(element))` - If node storage could not be obtained
  fn enqueue(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Appends every element in order, stopping at the first failure.
  ///
  /// Elements enqueued before the failure stay in the queue.
  fn enqueue_all<I>(&mut self, elements: I) -> Result<(), QueueError<E>>
  where
    I: IntoIterator<Item = E>,
    Self: Sized, {
    for element in elements {
      self.enqueue(element)?;
    }
    Ok(())
  }
}

/// Trait providing read operations from the queue.
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes and returns the front element.
  ///
  /// # Returns
  ///
  /// * `Ok(element)` - The oldest element still in the queue
  /// * `Err(QueueError::Underflow)` - If the queue is empty
  fn dequeue(&mut self) -> Result<E, QueueError<E>>;

  /// Returns the front element without removing it.
  ///
  /// # Returns
  ///
  /// * `Ok(element)` - The element the next `dequeue` would return
  /// * `Err(QueueError::Underflow)` - If the queue is empty
  fn peek(&self) -> Result<E, QueueError<E>>;
}
