use core::fmt::{self, Display, Formatter};

pub mod queue;
pub mod stack;

pub use queue::{
  ArrayQueue, CircularQueue, LinkedQueue, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter,
  DEFAULT_QUEUE_CAPACITY,
};
pub use stack::{Stack, StackBase, StackError, StackMut, DEFAULT_STACK_CAPACITY};

/// Writes `items` as `[a, b, c]`.
pub(crate) fn write_list<I, T>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
  I: IntoIterator<Item = T>,
  T: Display, {
  f.write_str("[")?;
  for (index, item) in items.into_iter().enumerate() {
    if index > 0 {
      f.write_str(", ")?;
    }
    write!(f, "{}", item)?;
  }
  f.write_str("]")
}
