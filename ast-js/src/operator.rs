use serde::Serialize;

/// Operator identity for unary, binary, logical, and assignment forms.
///
/// Assignment and comma are parsed into dedicated node kinds by some
/// producers and into binary nodes by others; the normalized tree keeps
/// assignment inside `BinaryExpr` (selected by operator) and gives comma
/// sequences their own `SeqExpr` kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorName {
  Addition,
  Assignment,
  AssignmentAddition,
  AssignmentBitwiseAnd,
  AssignmentBitwiseLeftShift,
  AssignmentBitwiseOr,
  AssignmentBitwiseRightShift,
  AssignmentBitwiseUnsignedRightShift,
  AssignmentBitwiseXor,
  AssignmentDivision,
  AssignmentExponentiation,
  AssignmentLogicalAnd,
  AssignmentLogicalOr,
  AssignmentMultiplication,
  AssignmentNullishCoalescing,
  AssignmentRemainder,
  AssignmentSubtraction,
  Await,
  BitwiseAnd,
  BitwiseLeftShift,
  BitwiseNot,
  BitwiseOr,
  BitwiseRightShift,
  BitwiseUnsignedRightShift,
  BitwiseXor,
  Delete,
  Division,
  Equality,
  Exponentiation,
  GreaterThan,
  GreaterThanOrEqual,
  In,
  Inequality,
  Instanceof,
  LessThan,
  LessThanOrEqual,
  LogicalAnd,
  LogicalNot,
  LogicalOr,
  Multiplication,
  NullishCoalescing,
  PostfixDecrement,
  PostfixIncrement,
  PrefixDecrement,
  PrefixIncrement,
  Remainder,
  StrictEquality,
  StrictInequality,
  Subtraction,
  Typeof,
  UnaryNegation,
  UnaryPlus,
  Void,
  Yield,
}

impl OperatorName {
  pub fn is_assignment(self) -> bool {
    use OperatorName::*;
    matches!(
      self,
      Assignment
        | AssignmentAddition
        | AssignmentBitwiseAnd
        | AssignmentBitwiseLeftShift
        | AssignmentBitwiseOr
        | AssignmentBitwiseRightShift
        | AssignmentBitwiseUnsignedRightShift
        | AssignmentBitwiseXor
        | AssignmentDivision
        | AssignmentExponentiation
        | AssignmentLogicalAnd
        | AssignmentLogicalOr
        | AssignmentMultiplication
        | AssignmentNullishCoalescing
        | AssignmentRemainder
        | AssignmentSubtraction
    )
  }

  pub fn is_logical(self) -> bool {
    use OperatorName::*;
    matches!(self, LogicalAnd | LogicalOr | NullishCoalescing)
  }

  pub fn is_update(self) -> bool {
    use OperatorName::*;
    matches!(
      self,
      PostfixDecrement | PostfixIncrement | PrefixDecrement | PrefixIncrement
    )
  }
}
