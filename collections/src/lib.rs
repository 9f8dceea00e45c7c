//! Fixed-capacity stack, array/circular/linked queues and a bracket validator.
//!
//! The stack holds characters and the queues hold `i32` values. Bounded
//! containers report overflow through their return values instead of growing,
//! and every container reports underflow instead of returning an in-band
//! sentinel.

pub mod brackets;
pub mod collections;
pub mod config;

pub use brackets::{is_valid, Bracket, BracketError, BracketValidator, Rejection, Verdict};
pub use collections::{
  ArrayQueue, CircularQueue, LinkedQueue, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter, Stack,
  StackBase, StackError, StackMut, DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY,
};
pub use config::{Config, ConfigError, ConfigOption};
