use ast_js::ast::expr::lit::{LitTemplateExpr, LitTemplatePart};
use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::comment::attached_comments;

use crate::kind::{is_numeric_literal, is_string_literal};

/// A member access whose object bottoms out at a plain identifier, through
/// any mix of `.`, `[...]`, and optional-chaining spellings. A call or any
/// other kind anywhere along the object side breaks the chain.
pub fn is_member_chain(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Member(member) => is_chain_object(&member.stx.left),
    Expr::ComputedMember(member) => is_chain_object(&member.stx.object),
    _ => false,
  }
}

fn is_chain_object(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Id(_) => true,
    Expr::Member(_) | Expr::ComputedMember(_) => is_member_chain(expr),
    _ => false,
  }
}

/// Whether a template's interpolations are all plain enough to print inline:
/// identifiers, `this`, or identifier/literal-keyed access chains rooted at
/// one of those, with no comments attached along the way. A template with no
/// interpolations has nothing to simplify and answers false.
pub fn is_simple_template_literal(template: &Node<LitTemplateExpr>) -> bool {
  let mut interpolation_count = 0usize;
  for part in &template.stx.parts {
    let LitTemplatePart::Substitution(value) = part else {
      continue;
    };
    interpolation_count += 1;
    if !is_simple_interpolation(value) {
      return false;
    }
  }
  interpolation_count > 0
}

fn is_simple_interpolation(expr: &Node<Expr>) -> bool {
  if !attached_comments(&expr.assoc).is_empty() {
    return false;
  }
  match expr.stx.as_ref() {
    Expr::Id(_) | Expr::This(_) => true,
    Expr::Member(member) => is_simple_interpolation(&member.stx.left),
    Expr::ComputedMember(member) => {
      (is_string_literal(&member.stx.member) || is_numeric_literal(&member.stx.member))
        && is_simple_interpolation(&member.stx.object)
    }
    _ => false,
  }
}

/// Flattens a tree of nested ternaries (nesting may occur in the test,
/// consequent, or alternate slot) and reports whether any non-ternary leaf
/// is a markup element. One markup leaf reclassifies how the whole chain is
/// printed, not just the branch it sits in.
pub fn conditional_chain_contains_markup(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Cond(_) => leaf_contains_markup(expr),
    _ => false,
  }
}

fn leaf_contains_markup(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Cond(cond) => {
      leaf_contains_markup(&cond.stx.test)
        || leaf_contains_markup(&cond.stx.consequent)
        || leaf_contains_markup(&cond.stx.alternate)
    }
    Expr::JsxElem(_) => true,
    _ => false,
  }
}
