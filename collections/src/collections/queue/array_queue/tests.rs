use crate::collections::{ArrayQueue, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};
use crate::config::{Config, ConfigOption};

#[test]
fn test_enqueue_dequeue_in_fifo_order() {
  let mut queue = ArrayQueue::with_capacity(5);
  for value in [10, 20, 30] {
    assert!(queue.enqueue(value).is_ok());
  }
  assert_eq!(queue.size(), 3);
  assert_eq!(queue.peek(), Ok(10));

  assert_eq!(queue.dequeue(), Ok(10));
  assert_eq!(queue.dequeue(), Ok(20));
  assert_eq!(queue.size(), 1);
  assert_eq!(queue.peek(), Ok(30));
  assert_eq!(queue.dequeue(), Ok(30));
  assert!(queue.is_empty());
}

#[test]
fn test_overflow_leaves_queue_unchanged() {
  let mut queue = ArrayQueue::with_capacity(3);
  queue.enqueue_all([1, 2, 3]).unwrap();
  assert!(queue.is_full());
  assert!(queue.enqueue_all([4, 5]).unwrap_err().is_overflow());

  assert_eq!(queue.enqueue(4), Err(QueueError::Overflow(4)));
  assert_eq!(queue.size(), 3);
  assert_eq!(queue.len(), QueueSize::Limited(3));
  assert_eq!(queue.to_string(), "[1, 2, 3]");
}

#[test]
fn test_underflow_on_empty_queue() {
  let mut queue = ArrayQueue::with_capacity(2);
  assert_eq!(queue.dequeue(), Err(QueueError::Underflow));
  assert_eq!(queue.peek(), Err(QueueError::Underflow));
  assert_eq!(queue.size(), 0);

  queue.enqueue(7).unwrap();
  assert_eq!(queue.dequeue(), Ok(7));
  assert_eq!(queue.dequeue(), Err(QueueError::Underflow));
  assert_eq!(queue.size(), 0);
}

#[test]
fn test_dequeued_slots_are_never_reclaimed() {
  let mut queue = ArrayQueue::with_capacity(5);
  queue.enqueue_all([10, 20, 30, 40, 50]).unwrap();
  assert_eq!(queue.dequeue(), Ok(10));
  assert_eq!(queue.dequeue(), Ok(20));

  assert_eq!(queue.size(), 3);
  assert!(queue.is_full());
  assert_eq!(queue.remaining_slots(), 0);
  assert_eq!(queue.enqueue(60), Err(QueueError::Overflow(60)));
  assert_eq!(queue.size(), 3);
}

#[test]
fn test_drained_queue_stays_exhausted() {
  let mut queue = ArrayQueue::with_capacity(2);
  queue.enqueue_all([1, 2]).unwrap();
  assert_eq!(queue.dequeue(), Ok(1));
  assert_eq!(queue.dequeue(), Ok(2));

  assert!(queue.is_empty());
  assert!(queue.is_full());
  assert_eq!(queue.enqueue(3), Err(QueueError::Overflow(3)));
}

#[test]
fn test_remaining_slots_counts_unwritten_positions() {
  let mut queue = ArrayQueue::with_capacity(4);
  assert_eq!(queue.remaining_slots(), 4);
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  assert_eq!(queue.remaining_slots(), 2);
  queue.dequeue().unwrap();
  assert_eq!(queue.remaining_slots(), 2);
}

#[test]
fn test_interleaved_operations_keep_fifo_order() {
  let mut queue = ArrayQueue::with_capacity(8);
  let mut dequeued = Vec::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  dequeued.push(queue.dequeue().unwrap());
  queue.enqueue(3).unwrap();
  dequeued.push(queue.dequeue().unwrap());
  queue.enqueue(4).unwrap();
  queue.enqueue(5).unwrap();
  while let Ok(value) = queue.dequeue() {
    dequeued.push(value);
  }
  assert_eq!(dequeued, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_trait_view() {
  let mut queue = ArrayQueue::default();
  assert_eq!(QueueBase::capacity(&queue), QueueSize::Limited(100));
  assert!(QueueBase::is_empty(&queue));
  QueueWriter::enqueue(&mut queue, 5).unwrap();
  assert!(queue.non_empty());
  assert_eq!(QueueReader::peek(&queue), Ok(5));
  assert_eq!(QueueReader::dequeue(&mut queue), Ok(5));
}

#[test]
fn test_from_config() {
  let config = Config::from([ConfigOption::with_array_queue_capacity(2)]);
  let queue = ArrayQueue::from_config(&config);
  assert_eq!(queue.capacity(), QueueSize::Limited(2));
}

#[test]
fn test_display_shows_live_elements_only() {
  let mut queue = ArrayQueue::with_capacity(4);
  assert_eq!(queue.to_string(), "[]");
  queue.enqueue_all([1, 2, 3]).unwrap();
  queue.dequeue().unwrap();
  assert_eq!(queue.to_string(), "[2, 3]");
}

#[test]
fn test_zero_capacity_rejects_everything() {
  let mut queue = ArrayQueue::with_capacity(0);
  assert!(queue.is_empty());
  assert!(queue.is_full());
  assert_eq!(queue.enqueue(1), Err(QueueError::Overflow(1)));
  assert_eq!(queue.dequeue(), Err(QueueError::Underflow));
}
