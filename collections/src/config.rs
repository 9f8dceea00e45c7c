use thiserror::Error;

use crate::collections::{DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error("{0} must be greater than zero")]
  ZeroCapacity(&'static str),
}

/// Capacities used by the `from_config` constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub stack_capacity: usize,
  pub array_queue_capacity: usize,
  pub circular_queue_capacity: usize,
  /// Maximum nesting depth accepted by the bracket validator. `None` sizes the
  /// validator's stack to each input.
  pub bracket_max_depth: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      stack_capacity: DEFAULT_STACK_CAPACITY,
      array_queue_capacity: DEFAULT_QUEUE_CAPACITY,
      circular_queue_capacity: DEFAULT_QUEUE_CAPACITY,
      bracket_max_depth: None,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Rejects zero capacities, which would produce containers that accept nothing.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.stack_capacity == 0 {
      return Err(ConfigError::ZeroCapacity("stack_capacity"));
    }
    if self.array_queue_capacity == 0 {
      return Err(ConfigError::ZeroCapacity("array_queue_capacity"));
    }
    if self.circular_queue_capacity == 0 {
      return Err(ConfigError::ZeroCapacity("circular_queue_capacity"));
    }
    if self.bracket_max_depth == Some(0) {
      return Err(ConfigError::ZeroCapacity("bracket_max_depth"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetStackCapacity(usize),
  SetArrayQueueCapacity(usize),
  SetCircularQueueCapacity(usize),
  SetBracketMaxDepth(Option<usize>),
}

impl ConfigOption {
  pub(crate) fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetStackCapacity(capacity) => {
        config.stack_capacity = *capacity;
      }
      ConfigOption::SetArrayQueueCapacity(capacity) => {
        config.array_queue_capacity = *capacity;
      }
      ConfigOption::SetCircularQueueCapacity(capacity) => {
        config.circular_queue_capacity = *capacity;
      }
      ConfigOption::SetBracketMaxDepth(depth) => {
        config.bracket_max_depth = *depth;
      }
    }
  }

  pub fn with_stack_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetStackCapacity(capacity)
  }

  pub fn with_array_queue_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetArrayQueueCapacity(capacity)
  }

  pub fn with_circular_queue_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetCircularQueueCapacity(capacity)
  }

  pub fn with_bracket_max_depth(depth: usize) -> ConfigOption {
    ConfigOption::SetBracketMaxDepth(Some(depth))
  }
}
