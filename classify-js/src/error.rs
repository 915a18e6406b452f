use ast_js::loc::Loc;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// Contract breaks between classifiers. These only surface on trees that
/// violate the producing parser's guarantees; the formatting run must stop
/// rather than print around them.
///
/// Diagnostic codes (prefix `CL`) are assigned per variant and are stable:
/// - `CL0001`: [`ClassifyErrorType::NakedLeftSideChildMissing`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClassifyErrorType {
  NakedLeftSideChildMissing,
}

impl ClassifyErrorType {
  /// Stable diagnostic code for this error variant.
  pub fn code(&self) -> &'static str {
    match self {
      ClassifyErrorType::NakedLeftSideChildMissing => "CL0001",
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      ClassifyErrorType::NakedLeftSideChildMissing => {
        "expression reported a naked left side but has no resolvable left child"
      }
    }
  }
}

#[derive(Clone)]
pub struct ClassifyError {
  pub typ: ClassifyErrorType,
  pub loc: Loc,
}

impl ClassifyError {
  pub fn new(typ: ClassifyErrorType, loc: Loc) -> ClassifyError {
    ClassifyError { typ, loc }
  }
}

impl Debug for ClassifyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc {}", self, self.loc)
  }
}

impl Display for ClassifyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.typ.code(), self.typ.message())
  }
}

impl Error for ClassifyError {}

impl PartialEq for ClassifyError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for ClassifyError {}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
