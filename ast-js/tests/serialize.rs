use ast_js::ast::expr::lit::{LitExpr, LitNumExpr, LitValue};
use ast_js::ast::expr::{BinaryExpr, Expr, IdExpr};
use ast_js::ast::node::Node;
use ast_js::loc::Loc;
use ast_js::num::JsNumber;
use ast_js::operator::OperatorName;
use serde_json::json;

fn node<T: derive_visitor::Drive + derive_visitor::DriveMut>(stx: T) -> Node<T> {
  Node::new(Loc(0, 0), stx)
}

#[test]
fn expr_serializes_with_kind_tag() {
  let expr = node(Expr::Binary(node(BinaryExpr {
    operator: OperatorName::Addition,
    left: node(Expr::Id(node(IdExpr {
      name: "a".to_string(),
    }))),
    right: node(Expr::LitNum(node(LitNumExpr {
      value: JsNumber(1.0),
    }))),
  })));
  let serialized = serde_json::to_value(&expr).expect("expr serializes");
  assert_eq!(serialized, json!({
    "$t": "Binary",
    "operator": "Addition",
    "left": { "$t": "Id", "name": "a" },
    "right": { "$t": "LitNum", "value": 1.0 },
  }));
}

#[test]
fn generic_literal_payload_keeps_its_runtime_type() {
  let expr = node(Expr::Lit(node(LitExpr {
    value: LitValue::Str("s".to_string()),
  })));
  let serialized = serde_json::to_value(&expr).expect("expr serializes");
  assert_eq!(serialized, json!({
    "$t": "Lit",
    "value": { "Str": "s" },
  }));
}
