//! FIFO queues: a naive array queue, a circular queue and a linked queue.

mod array_queue;
mod circular_queue;
mod linked_queue;
mod queue_error;
mod queue_size;
mod traits;

pub use array_queue::{ArrayQueue, DEFAULT_QUEUE_CAPACITY};
pub use circular_queue::CircularQueue;
pub use linked_queue::LinkedQueue;
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use traits::{QueueBase, QueueReader, QueueWriter};

static_assertions::assert_impl_all!(ArrayQueue: Send, Sync, Clone);
static_assertions::assert_impl_all!(CircularQueue: Send, Sync, Clone);
