use ast_js::ast::class_or_object::{ClassOrObjVal, ObjMemberType};
use ast_js::ast::expr::lit::{LitArrElem, LitTemplatePart, LitValue};
use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::operator::OperatorName;
use once_cell::sync::Lazy;
use regex::Regex;

// Identifiers in this shape are constant references by convention and print
// as compactly as the literal they name.
static CONSTANT_CASE: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Z0-9_]+$").unwrap());

/// The argument budget: call chains cost one level per step, container
/// literals cost two, and nothing is simple from depth 3 on. The asymmetry
/// is a readability tuning for call-argument layout and is relied on by the
/// printer; keep the exact costs.
const MAX_ARG_DEPTH: usize = 3;

pub fn is_constant_case_name(name: &str) -> bool {
  CONSTANT_CASE.is_match(name)
}

/// Whether this expression is a literal for printing purposes: an actual
/// literal under either producer spelling, a constant-case identifier, or
/// an array/object built entirely out of such values. Computed keys, spread,
/// accessors, and methods disqualify the whole expression.
pub fn is_literal_like(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Lit(_)
    | Expr::LitBigInt(_)
    | Expr::LitBool(_)
    | Expr::LitNull(_)
    | Expr::LitNum(_)
    | Expr::LitRegex(_)
    | Expr::LitStr(_) => true,
    Expr::Id(id) => is_constant_case_name(&id.stx.name),
    Expr::LitArr(arr) => arr.stx.elements.iter().all(|elem| match elem {
      LitArrElem::Single(value) => is_literal_like(value),
      // Holes print as nothing; they never force a break.
      LitArrElem::Empty => true,
      LitArrElem::Rest(_) => false,
    }),
    Expr::LitObj(obj) => obj.stx.members.iter().all(|member| match &member.stx.typ {
      ObjMemberType::Valued { key, val } => {
        !key.is_computed()
          && match val {
            ClassOrObjVal::Prop(Some(value)) => is_literal_like(value),
            _ => false,
          }
      }
      ObjMemberType::Shorthand { id } => is_constant_case_name(&id.stx.name),
      ObjMemberType::Rest { .. } => false,
    }),
    _ => false,
  }
}

/// Whether an argument is visually light enough that its call can stay on
/// one line. `depth` starts at 0 at the argument itself and the answer is
/// unconditionally false from depth 3 on.
pub fn is_simple_call_argument(expr: &Node<Expr>, depth: usize) -> bool {
  if depth >= MAX_ARG_DEPTH {
    return false;
  }
  match expr.stx.as_ref() {
    Expr::LitBigInt(_) | Expr::LitBool(_) | Expr::LitNull(_) | Expr::LitNum(_) | Expr::LitStr(_) => {
      true
    }
    Expr::LitRegex(regex) => raw_regex_pattern_len(&regex.stx.value) <= 5,
    Expr::Lit(lit) => match &lit.stx.value {
      LitValue::Regex { pattern, .. } => pattern.len() <= 5,
      _ => true,
    },
    Expr::Id(_)
    | Expr::ImportMeta(_)
    | Expr::Placeholder(_)
    | Expr::PrivateId(_)
    | Expr::Super(_)
    | Expr::This(_) => true,
    Expr::LitTemplate(template) => template.stx.parts.iter().all(|part| match part {
      LitTemplatePart::Substitution(value) => is_simple_call_argument(value, depth + 2),
      LitTemplatePart::String(_) => true,
    }),
    Expr::LitObj(obj) => obj.stx.members.iter().all(|member| match &member.stx.typ {
      ObjMemberType::Valued { key, val } => {
        !key.is_computed()
          && match val {
            ClassOrObjVal::Prop(Some(value)) => is_simple_call_argument(value, depth + 2),
            _ => false,
          }
      }
      ObjMemberType::Shorthand { .. } => true,
      ObjMemberType::Rest { .. } => false,
    }),
    Expr::LitArr(arr) => arr.stx.elements.iter().all(|elem| match elem {
      LitArrElem::Single(value) => is_simple_call_argument(value, depth + 2),
      LitArrElem::Empty => true,
      LitArrElem::Rest(_) => false,
    }),
    Expr::Import(import) => is_simple_call_argument(&import.stx.module, depth + 2),
    Expr::Call(call) => {
      is_simple_call_argument(&call.stx.callee, depth + 1)
        && call
          .stx
          .arguments
          .iter()
          .all(|arg| is_simple_call_argument(&arg.stx.value, depth + 2))
    }
    Expr::New(new) => {
      is_simple_call_argument(&new.stx.callee, depth + 1)
        && new
          .stx
          .arguments
          .iter()
          .all(|arg| is_simple_call_argument(&arg.stx.value, depth + 2))
    }
    // The member name itself is a single token; only the object costs.
    Expr::Member(member) => is_simple_call_argument(&member.stx.left, depth + 1),
    Expr::ComputedMember(member) => {
      is_simple_call_argument(&member.stx.object, depth + 1)
        && is_simple_call_argument(&member.stx.member, depth + 1)
    }
    Expr::Unary(unary)
      if matches!(
        unary.stx.operator,
        OperatorName::LogicalNot | OperatorName::UnaryNegation
      ) =>
    {
      is_simple_call_argument(&unary.stx.argument, depth + 1)
    }
    Expr::NonNull(assertion) => is_simple_call_argument(&assertion.stx.expression, depth + 1),
    _ => false,
  }
}

// `value` includes the delimiting slashes and any flags: `/pat/gi`.
fn raw_regex_pattern_len(value: &str) -> usize {
  let Some(stripped) = value.strip_prefix('/') else {
    return value.len();
  };
  match stripped.rfind('/') {
    Some(end) => end,
    None => stripped.len(),
  }
}
