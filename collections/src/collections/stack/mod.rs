mod buffer;
mod stack_error;
mod traits;

pub use buffer::{Stack, DEFAULT_STACK_CAPACITY};
pub use stack_error::StackError;
pub use traits::{StackBase, StackMut};

static_assertions::assert_impl_all!(Stack: Send, Sync, Clone);
