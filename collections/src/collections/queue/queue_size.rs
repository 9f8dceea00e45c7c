/// How many elements a container holds, or may hold.
///
/// Used for both `len` and `capacity`. The bounded containers answer
/// `Limited(n)` for each; `LinkedQueue` answers `Limitless` for its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// Unbounded.
  Limitless,
  /// Exactly this many.
  Limited(usize),
}

impl QueueSize {
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// The count, saturating to `usize::MAX` for `Limitless`.
  pub const fn to_usize(self) -> usize {
    match self {
      Self::Limitless => usize::MAX,
      Self::Limited(value) => value,
    }
  }

  /// The count, if there is one.
  pub const fn to_option(self) -> Option<usize> {
    match self {
      Self::Limitless => None,
      Self::Limited(value) => Some(value),
    }
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    QueueSize::limited(0)
  }
}

impl From<usize> for QueueSize {
  fn from(value: usize) -> Self {
    QueueSize::limited(value)
  }
}

#[cfg(test)]
mod tests {
  use super::QueueSize;

  #[test]
  fn queue_size_helpers_work_as_expected() {
    let zero = QueueSize::default();
    let limitless = QueueSize::limitless();

    assert!(!zero.is_limitless());
    assert_eq!(zero.to_usize(), 0);
    assert_eq!(zero.to_option(), Some(0));

    assert!(limitless.is_limitless());
    assert_eq!(limitless.to_usize(), usize::MAX);
    assert_eq!(limitless.to_option(), None);
  }

  #[test]
  fn limited_sizes_never_equal_limitless() {
    assert_ne!(QueueSize::limited(usize::MAX), QueueSize::limitless());
    assert_eq!(QueueSize::from(3), QueueSize::Limited(3));
  }
}
