use std::cmp::max;
use std::cmp::min;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use serde::Serialize;

/// A location within the current source file expressed as UTF-8 byte offsets.
///
/// The range is half-open: `Loc(a, b)` covers bytes `a..b`. These offsets are
/// the layer's position-lookup functions: the comment-attachment pass and the
/// printer both read node positions through `start`/`end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub fn start(&self) -> usize {
    self.0
  }

  pub fn end(&self) -> usize {
    self.1
  }

  pub fn is_empty(&self) -> bool {
    self.0 >= self.1
  }

  /// Grows this location to also cover `other`.
  pub fn extend(&mut self, other: Loc) {
    self.0 = min(self.0, other.0);
    self.1 = max(self.1, other.1);
  }
}

impl Display for Loc {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[{}:{}]", self.0, self.1)
  }
}
