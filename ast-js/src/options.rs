use std::path::PathBuf;

use crate::loc::Loc;

/// Which parser produced the tree being classified.
///
/// The normalized union hides most per-producer differences, but the
/// generic-vs-dedicated literal spelling survives normalization and a few
/// printer decisions are dialect-aware, so the selector rides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
  Acorn,
  Babel,
  BabelFlow,
  BabelTs,
  Espree,
  Flow,
  Meriyah,
  Typescript,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingComma {
  All,
  Es5,
  None,
}

/// Immutable configuration snapshot for one formatting run. Read throughout,
/// never written.
#[derive(Debug)]
pub struct FormatOptions {
  pub dialect: Dialect,
  /// Full original source text; byte offsets in `Loc` index into this.
  pub source: String,
  pub trailing_comma: TrailingComma,
  pub filepath: Option<PathBuf>,
}

impl FormatOptions {
  pub fn new(dialect: Dialect, source: impl Into<String>) -> FormatOptions {
    FormatOptions {
      dialect,
      source: source.into(),
      trailing_comma: TrailingComma::All,
      filepath: None,
    }
  }

  /// The original spelling of a range, clamped to the source bounds.
  pub fn slice(&self, loc: Loc) -> &str {
    let end = loc.end().min(self.source.len());
    let start = loc.start().min(end);
    self.source.get(start..end).unwrap_or("")
  }

  pub fn source_bytes(&self) -> &[u8] {
    self.source.as_bytes()
  }
}
