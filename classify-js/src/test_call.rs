use ahash::HashSet;
use ast_js::ast::expr::{CallExpr, Expr};
use ast_js::ast::node::Node;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::{is_numeric_literal, is_string_literal};

// `describe`/`it`/`test`, optionally focused or excluded with an `f`/`x`
// prefix.
static TEST_TRIGGER: Lazy<Regex> = Lazy::new(|| Regex::new("^(f|x)?(describe|it|test)$").unwrap());

static SETUP_HOOKS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
  ["afterAll", "afterEach", "beforeAll", "beforeEach"]
    .into_iter()
    .collect()
});

static ASYNC_WRAPPERS: Lazy<HashSet<&'static str>> =
  Lazy::new(|| ["async", "fakeAsync", "inject"].into_iter().collect());

/// Whether a call is a unit-test declaration or setup hook, in the shapes
/// the printer lays out specially (name string kept on the call's line, the
/// body function hugged).
///
/// `parent` is the enclosing call when the node under question is itself an
/// argument, e.g. the wrapper in `it("name", async(() => {...}))`.
pub fn is_test_call(expr: &Node<Expr>, parent: Option<&Node<Expr>>) -> bool {
  let Expr::Call(call) = expr.stx.as_ref() else {
    return false;
  };
  match call.stx.arguments.len() {
    1 => {
      // An async wrapper is only a test call by virtue of its enclosing
      // test call.
      if is_async_wrapper_call(call) {
        return parent.is_some_and(|p| is_test_call(p, None));
      }
      if callee_is_setup_hook(&call.stx.callee) {
        return is_async_wrapper(&call.stx.arguments[0].stx.value);
      }
      false
    }
    n @ (2 | 3) => {
      if !callee_matches_trigger(&call.stx.callee) {
        return false;
      }
      if !is_test_name(&call.stx.arguments[0].stx.value) {
        return false;
      }
      if n == 3 && !is_numeric_literal(&call.stx.arguments[2].stx.value) {
        return false;
      }
      let body = &call.stx.arguments[1].stx.value;
      is_test_body_function(body) || is_async_wrapper(body)
    }
    _ => false,
  }
}

/// Whether a tagged template is a table-driven test declaration:
/// `<trigger>.each` or `<trigger>.only.each` / `<trigger>.skip.each`.
pub fn is_each_template_call(expr: &Node<Expr>) -> bool {
  let Expr::TaggedTemplate(tagged) = expr.stx.as_ref() else {
    return false;
  };
  let Expr::Member(each) = tagged.stx.function.stx.as_ref() else {
    return false;
  };
  if each.stx.right != "each" {
    return false;
  }
  match each.stx.left.stx.as_ref() {
    Expr::Id(id) => TEST_TRIGGER.is_match(&id.stx.name),
    Expr::Member(modifier) => {
      matches!(modifier.stx.right.as_str(), "only" | "skip")
        && matches!(
          modifier.stx.left.stx.as_ref(),
          Expr::Id(id) if TEST_TRIGGER.is_match(&id.stx.name)
        )
    }
    _ => false,
  }
}

fn callee_matches_trigger(callee: &Node<Expr>) -> bool {
  match callee.stx.as_ref() {
    Expr::Id(id) => TEST_TRIGGER.is_match(&id.stx.name),
    Expr::Member(member) => {
      matches!(member.stx.right.as_str(), "only" | "skip")
        && matches!(
          member.stx.left.stx.as_ref(),
          Expr::Id(id) if TEST_TRIGGER.is_match(&id.stx.name)
        )
    }
    _ => false,
  }
}

fn callee_is_setup_hook(callee: &Node<Expr>) -> bool {
  matches!(callee.stx.as_ref(), Expr::Id(id) if SETUP_HOOKS.contains(id.stx.name.as_str()))
}

fn is_async_wrapper(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Call(call) => is_async_wrapper_call(call),
    _ => false,
  }
}

fn is_async_wrapper_call(call: &Node<CallExpr>) -> bool {
  matches!(
    call.stx.callee.stx.as_ref(),
    Expr::Id(id) if ASYNC_WRAPPERS.contains(id.stx.name.as_str())
  )
}

// The body must be a function or arrow; a block body with more than one
// parameter reads as a fixture signature, not a test body.
fn is_test_body_function(expr: &Node<Expr>) -> bool {
  let func = match expr.stx.as_ref() {
    Expr::Func(f) => &f.stx.func,
    Expr::ArrowFunc(f) => &f.stx.func,
    _ => return false,
  };
  !func.stx.has_block_body() || func.stx.parameters.len() <= 1
}

// The first argument: a string under either literal spelling, or a
// template. (Template names appear in parameterized tests.)
fn is_test_name(expr: &Node<Expr>) -> bool {
  is_string_literal(expr) || matches!(expr.stx.as_ref(), Expr::LitTemplate(_))
}
