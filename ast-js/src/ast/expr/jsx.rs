use super::Expr;
use super::IdExpr;
use crate::ast::node::Node;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum JsxAttrVal {
  Expression(Node<JsxExprContainer>),
  Text(Node<JsxText>),
  Element(Node<JsxElem>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum JsxAttr {
  Named {
    name: Node<JsxName>,
    value: Option<JsxAttrVal>,
  },
  Spread {
    value: Node<JsxSpreadAttr>,
  },
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum JsxElemName {
  Id(Node<IdExpr>),
  Member(Node<JsxMemberExpr>),
  Name(Node<JsxName>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum JsxElemChild {
  Element(Node<JsxElem>),
  Expr(Node<JsxExprContainer>),
  Text(Node<JsxText>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxElem {
  // When an element name starts with a lowercase ASCII character, it's a built-in component like '<div>' or '<span>'.
  // For easier differentiation, we use IdExpr for user-defined components as they are references to symbols and built-in components are not.
  pub name: Option<JsxElemName>, // None if fragment
  pub attributes: Vec<JsxAttr>,  // Always empty if fragment
  pub children: Vec<JsxElemChild>,
}

// The `{}` placeholder inside a container; `{/* note */}` attaches the
// comment to this node, not to the container.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxEmptyExpr {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxExprContainer {
  #[drive(skip)]
  pub spread: bool,
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxMemberExpr {
  // This is a separate property to indicate it's required and for easier pattern matching.
  pub base: Node<IdExpr>,
  #[drive(skip)]
  pub path: Vec<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxName {
  #[drive(skip)]
  pub namespace: Option<String>,
  #[drive(skip)]
  pub name: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxSpreadAttr {
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct JsxText {
  #[drive(skip)]
  pub value: String,
}
