use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::path::ChildKey;
use tracing::error;

use crate::error::{ClassifyError, ClassifyErrorType, ClassifyResult};

/// Whether this expression prints its leftmost token without any wrapping
/// of its own. When such an expression starts a line right after a comment,
/// the printer has to parenthesize to keep the parse.
///
/// Prefix updates are excluded: they start with the operator token, so the
/// left side is never naked. Postfix updates count.
pub fn has_naked_left_side(expr: &Node<Expr>) -> bool {
  matches!(
    expr.stx.as_ref(),
    Expr::Binary(_)
      | Expr::Bind(_)
      | Expr::Call(_)
      | Expr::ComputedMember(_)
      | Expr::Cond(_)
      | Expr::Member(_)
      | Expr::NonNull(_)
      | Expr::Pipe(_)
      | Expr::Seq(_)
      | Expr::TaggedTemplate(_)
      | Expr::TsAs(_)
      | Expr::UnaryPostfix(_)
  )
}

// One table drives both the node-returning and the key-returning resolver,
// so the two can never disagree on field priority. The only kind with more
// than one candidate edge is Bind, where `object` wins over `callee`.
fn left_side_entry(expr: &Node<Expr>) -> Option<(&Node<Expr>, ChildKey)> {
  match expr.stx.as_ref() {
    Expr::Seq(seq) => seq
      .stx
      .expressions
      .first()
      .map(|first| (first, ChildKey::Element("expressions", 0))),
    Expr::Binary(binary) => Some((&binary.stx.left, ChildKey::Field("left"))),
    Expr::Pipe(pipe) => Some((&pipe.stx.left, ChildKey::Field("left"))),
    Expr::Cond(cond) => Some((&cond.stx.test, ChildKey::Field("test"))),
    Expr::Call(call) => Some((&call.stx.callee, ChildKey::Field("callee"))),
    Expr::Member(member) => Some((&member.stx.left, ChildKey::Field("left"))),
    Expr::ComputedMember(member) => Some((&member.stx.object, ChildKey::Field("object"))),
    Expr::Bind(bind) => match &bind.stx.object {
      Some(object) => Some((object, ChildKey::Field("object"))),
      None => Some((&bind.stx.callee, ChildKey::Field("callee"))),
    },
    Expr::TaggedTemplate(tagged) => Some((&tagged.stx.function, ChildKey::Field("function"))),
    Expr::UnaryPostfix(unary) => Some((&unary.stx.argument, ChildKey::Field("argument"))),
    Expr::TsAs(cast) => Some((&cast.stx.expression, ChildKey::Field("expression"))),
    Expr::NonNull(assertion) => Some((&assertion.stx.expression, ChildKey::Field("expression"))),
    _ => None,
  }
}

/// The sub-expression that prints first, if this kind has one.
pub fn left_side_child(expr: &Node<Expr>) -> Option<&Node<Expr>> {
  left_side_entry(expr).map(|(child, _)| child)
}

/// The attaching field/index of the left-side child, for callers that build
/// a `Path` while descending.
pub fn left_side_key(expr: &Node<Expr>) -> Option<ChildKey> {
  left_side_entry(expr).map(|(_, key)| key)
}

/// Follows left-side children until a kind without one is reached. Each step
/// descends into a strict subtree, so this terminates in at most the tree
/// depth.
///
/// A node that reports a naked left side but yields no child breaks the
/// contract between the kind classifier and this resolver; that aborts the
/// formatting run.
pub fn resolve_leftmost(expr: &Node<Expr>) -> ClassifyResult<&Node<Expr>> {
  let mut node = expr;
  while has_naked_left_side(node) {
    match left_side_child(node) {
      Some(child) => node = child,
      None => {
        error!(loc = %node.loc, "naked-left-side contract break");
        return Err(ClassifyError::new(
          ClassifyErrorType::NakedLeftSideChildMissing,
          node.loc,
        ));
      }
    }
  }
  Ok(node)
}
