use ast_js::ast::expr::jsx::JsxElem;
use ast_js::ast::expr::lit::{LitStrExpr, LitTemplateExpr, LitTemplatePart};
use ast_js::ast::expr::{CallArg, CallExpr, ComputedMemberExpr, CondExpr, Expr, IdExpr, MemberExpr, ThisExpr};
use ast_js::ast::node::Node;
use ast_js::comment::{attach_comments, Comment, CommentKind, CommentPlacement};
use ast_js::loc::Loc;
use classify_js::chains::{conditional_chain_contains_markup, is_member_chain, is_simple_template_literal};

fn node<T: derive_visitor::Drive + derive_visitor::DriveMut>(stx: T) -> Node<T> {
  Node::new(Loc(0, 0), stx)
}

fn id(name: &str) -> Node<Expr> {
  node(Expr::Id(node(IdExpr {
    name: name.to_string(),
  })))
}

fn member(left: Node<Expr>, right: &str) -> Node<Expr> {
  node(Expr::Member(node(MemberExpr {
    optional_chaining: false,
    left,
    right: right.to_string(),
  })))
}

fn computed(object: Node<Expr>, key: Node<Expr>) -> Node<Expr> {
  node(Expr::ComputedMember(node(ComputedMemberExpr {
    optional_chaining: false,
    object,
    member: key,
  })))
}

fn call(callee: Node<Expr>, args: Vec<Node<Expr>>) -> Node<Expr> {
  node(Expr::Call(node(CallExpr {
    optional_chaining: false,
    callee,
    arguments: args
      .into_iter()
      .map(|value| {
        node(CallArg {
          spread: false,
          value,
        })
      })
      .collect(),
  })))
}

fn template(parts: Vec<LitTemplatePart>) -> Node<LitTemplateExpr> {
  node(LitTemplateExpr { parts })
}

fn cond(test: Node<Expr>, consequent: Node<Expr>, alternate: Node<Expr>) -> Node<Expr> {
  node(Expr::Cond(node(CondExpr {
    test,
    consequent,
    alternate,
  })))
}

fn jsx() -> Node<Expr> {
  node(Expr::JsxElem(node(JsxElem {
    name: None,
    attributes: vec![],
    children: vec![],
  })))
}

#[test]
fn dotted_chain_is_a_member_chain() {
  let expr = member(member(id("a"), "b"), "c");
  assert!(is_member_chain(&expr));
}

#[test]
fn computed_links_keep_the_chain() {
  let expr = computed(member(id("a"), "b"), id("k"));
  assert!(is_member_chain(&expr));
}

#[test]
fn call_root_breaks_the_chain() {
  // a().b
  let expr = member(call(id("a"), vec![]), "b");
  assert!(!is_member_chain(&expr));

  let deeper = member(member(call(id("a"), vec![]), "b"), "c");
  assert!(!is_member_chain(&deeper));
}

#[test]
fn bare_identifier_is_not_a_chain() {
  assert!(!is_member_chain(&id("a")));
}

#[test]
fn template_without_interpolations_is_not_simple() {
  let t = template(vec![LitTemplatePart::String("abc".to_string())]);
  assert!(!is_simple_template_literal(&t));
}

#[test]
fn identifier_and_this_interpolations_are_simple() {
  let t = template(vec![
    LitTemplatePart::String("a".to_string()),
    LitTemplatePart::Substitution(id("x")),
    LitTemplatePart::Substitution(node(Expr::This(node(ThisExpr {})))),
  ]);
  assert!(is_simple_template_literal(&t));
}

#[test]
fn literal_keyed_chain_interpolation_is_simple() {
  let key = node(Expr::LitStr(node(LitStrExpr {
    value: "k".to_string(),
  })));
  let t = template(vec![LitTemplatePart::Substitution(computed(
    member(id("a"), "b"),
    key,
  ))]);
  assert!(is_simple_template_literal(&t));
}

#[test]
fn call_interpolation_is_not_simple() {
  let t = template(vec![LitTemplatePart::Substitution(call(id("f"), vec![]))]);
  assert!(!is_simple_template_literal(&t));
}

#[test]
fn identifier_keyed_computed_interpolation_is_not_simple() {
  let t = template(vec![LitTemplatePart::Substitution(computed(id("a"), id("k")))]);
  assert!(!is_simple_template_literal(&t));
}

#[test]
fn comment_anywhere_in_interpolation_disqualifies() {
  let mut inner = id("x");
  attach_comments(&mut inner.assoc, vec![Comment::new(
    CommentKind::Block,
    CommentPlacement::Leading,
    " why ",
    Loc(0, 0),
  )]);
  let t = template(vec![LitTemplatePart::Substitution(member(inner, "y"))]);
  assert!(!is_simple_template_literal(&t));
}

#[test]
fn markup_leaf_reclassifies_the_whole_chain() {
  // a ? b : c ? <jsx/> : d
  let chain = cond(id("a"), id("b"), cond(id("c"), jsx(), id("d")));
  assert!(conditional_chain_contains_markup(&chain));
}

#[test]
fn markup_in_a_nested_test_slot_counts() {
  let chain = cond(cond(jsx(), id("a"), id("b")), id("c"), id("d"));
  assert!(conditional_chain_contains_markup(&chain));
}

#[test]
fn chain_without_markup_is_untouched() {
  let chain = cond(id("a"), id("b"), cond(id("c"), id("d"), id("e")));
  assert!(!conditional_chain_contains_markup(&chain));
}

#[test]
fn markup_below_a_leaf_does_not_count() {
  // The leaf is a call; markup inside its arguments is the call's business.
  let chain = cond(id("a"), call(id("f"), vec![jsx()]), id("b"));
  assert!(!conditional_chain_contains_markup(&chain));
}

#[test]
fn non_conditional_root_answers_false() {
  assert!(!conditional_chain_contains_markup(&jsx()));
}
