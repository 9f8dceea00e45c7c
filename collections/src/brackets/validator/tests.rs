use std::env;

use rstest::rstest;
use tracing_subscriber::EnvFilter;

use super::*;
use crate::config::ConfigOption;

fn init_tracing() {
  env::set_var("RUST_LOG", "debug");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

#[rstest]
#[case("()", true)]
#[case("()[]{}", true)]
#[case("{[]}", true)]
#[case("(]", false)]
#[case("([)]", false)]
#[case("]", false)]
#[case("", true)]
#[case("((()))", true)]
#[case("({[()]})", true)]
fn test_is_valid(#[case] input: &str, #[case] expected: bool) {
  init_tracing();
  assert_eq!(is_valid(input), expected);
  assert_eq!(BracketValidator::new().is_valid(input), expected);
}

#[test]
fn test_unmatched_closer_is_rejected_with_position() {
  let verdict = BracketValidator::new().validate("()}").unwrap();
  assert_eq!(
    verdict,
    Verdict::Rejected(Rejection::UnmatchedCloser { position: 2, found: '}' })
  );
}

#[test]
fn test_mismatch_reports_both_brackets() {
  let verdict = BracketValidator::new().validate("([)]").unwrap();
  assert_eq!(
    verdict,
    Verdict::Rejected(Rejection::Mismatch {
      position: 2,
      opened: '[',
      found: ')',
    })
  );
  assert_eq!(
    verdict.rejection().map(ToString::to_string),
    Some("')' at position 2 does not close '['".to_string())
  );
}

#[test]
fn test_unclosed_openers_are_counted() {
  let verdict = BracketValidator::new().validate("{[(").unwrap();
  assert_eq!(verdict, Verdict::Rejected(Rejection::Unclosed { open: 3 }));
  assert!(!verdict.is_accepted());
}

#[test]
fn test_other_characters_are_ignored() {
  assert!(is_valid("fn main() { let v = [1, 2]; }"));
  assert!(is_valid("abc"));
  assert!(!is_valid("a(b"));
}

#[test]
fn test_depth_limit() {
  let validator = BracketValidator::with_max_depth(2);
  assert_eq!(validator.max_depth(), Some(2));
  assert_eq!(validator.validate("(())"), Ok(Verdict::Accepted));
  assert_eq!(validator.validate("()()()"), Ok(Verdict::Accepted));
  assert_eq!(
    validator.validate("((()))"),
    Err(BracketError::DepthExceeded {
      max_depth: 2,
      position: 2,
    })
  );
  assert!(!validator.is_valid("((()))"));
}

#[test]
fn test_unbounded_validator_handles_deep_nesting() {
  let depth = 20_000;
  let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
  assert!(BracketValidator::new().is_valid(&input));
}

#[test]
fn test_from_config() {
  let config = Config::from([ConfigOption::with_bracket_max_depth(1)]);
  let validator = BracketValidator::from_config(&config);
  assert!(validator.is_valid("()[]"));
  assert!(validator.validate("([])").is_err());

  assert_eq!(BracketValidator::from_config(&Config::default()).max_depth(), None);
}

#[test]
fn test_validate_with_caller_supplied_stack() {
  let mut stack = Stack::with_capacity(4);
  assert_eq!(validate_with(&mut stack, "{()}"), Ok(Verdict::Accepted));
  assert!(stack.is_empty());

  let verdict = validate_with(&mut stack, "((").unwrap();
  assert_eq!(verdict, Verdict::Rejected(Rejection::Unclosed { open: 2 }));
  assert_eq!(stack.peek(), Ok('('));
}
