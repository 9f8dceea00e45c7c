/// The three bracket pairs recognised by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
  /// `(` and `)`
  Round,
  /// `{` and `}`
  Curly,
  /// `[` and `]`
  Square,
}

impl Bracket {
  pub const ALL: [Bracket; 3] = [Bracket::Round, Bracket::Curly, Bracket::Square];

  pub const fn opener(self) -> char {
    match self {
      Bracket::Round => '(',
      Bracket::Curly => '{',
      Bracket::Square => '[',
    }
  }

  pub const fn closer(self) -> char {
    match self {
      Bracket::Round => ')',
      Bracket::Curly => '}',
      Bracket::Square => ']',
    }
  }

  pub const fn from_opener(c: char) -> Option<Bracket> {
    match c {
      '(' => Some(Bracket::Round),
      '{' => Some(Bracket::Curly),
      '[' => Some(Bracket::Square),
      _ => None,
    }
  }

  pub const fn from_closer(c: char) -> Option<Bracket> {
    match c {
      ')' => Some(Bracket::Round),
      '}' => Some(Bracket::Curly),
      ']' => Some(Bracket::Square),
      _ => None,
    }
  }

  pub const fn is_opening(c: char) -> bool {
    Bracket::from_opener(c).is_some()
  }

  pub const fn is_closing(c: char) -> bool {
    Bracket::from_closer(c).is_some()
  }

  /// Returns the opener that `close` terminates, if `close` is a closer.
  pub const fn matching_opener(close: char) -> Option<char> {
    match Bracket::from_closer(close) {
      Some(bracket) => Some(bracket.opener()),
      None => None,
    }
  }

  pub const fn is_matching_pair(open: char, close: char) -> bool {
    match (Bracket::from_opener(open), Bracket::from_closer(close)) {
      (Some(opened), Some(closed)) => opened as u8 == closed as u8,
      _ => false,
    }
  }
}
