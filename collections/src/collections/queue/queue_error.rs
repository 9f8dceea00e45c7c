use thiserror::Error;

/// Errors reported by queue operations.
///
/// Every variant leaves the queue unchanged. Variants that reject an insertion
/// hand the element back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue has no free slot for the element.
  #[error("queue overflow: cannot enqueue {0:?}")]
  Overflow(E),
  /// The queue holds no element to remove or inspect.
  #[error("queue underflow: queue is empty")]
  Underflow,
  /// Storage for a new node could not be obtained.
  #[error("failed to allocate a node for {0:?}")]
  AllocationFailed(E),
}

impl<E> QueueError<E> {
  /// Returns the rejected element, if this error carries one.
  pub fn into_inner(self) -> Option<E> {
    match self {
      QueueError::Overflow(element) | QueueError::AllocationFailed(element) => Some(element),
      QueueError::Underflow => None,
    }
  }

  /// `true` when a bounded queue turned the element away for lack of room.
  pub fn is_overflow(&self) -> bool {
    matches!(self, QueueError::Overflow(_))
  }

  pub fn is_underflow(&self) -> bool {
    matches!(self, QueueError::Underflow)
  }
}
