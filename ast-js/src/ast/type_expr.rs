use derive_more::derive::From;
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::node::Node;

// Small slice of the type grammar: enough for annotation slots and for the
// object-type classification the printer asks about. Types are opaque to
// every other classifier.
#[derive(Debug, Drive, DriveMut, From, Serialize)]
#[serde(tag = "$t")]
pub enum TypeExpr {
  Keyword(Node<KeywordType>),
  TypeLiteral(Node<TypeLiteralType>),
  TypeReference(Node<TypeReferenceType>),
}

// `string`, `number`, `any`, `unknown`, ...
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct KeywordType {
  #[drive(skip)]
  pub name: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeLiteralType {
  pub members: Vec<Node<TypeMember>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeMember {
  #[drive(skip)]
  pub key: String,
  #[drive(skip)]
  pub optional: bool,
  pub type_annotation: Node<TypeExpr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum TypeEntityName {
  #[drive(skip)]
  Identifier(String),
  #[drive(skip)]
  Qualified(Vec<String>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeReferenceType {
  pub name: TypeEntityName,
  pub type_arguments: Option<Vec<Node<TypeExpr>>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeParameter {
  #[drive(skip)]
  pub name: String,
  pub constraint: Option<Node<TypeExpr>>,
  pub default: Option<Node<TypeExpr>>,
}
