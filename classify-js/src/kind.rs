use ast_js::ast::class_or_object::{ClassOrObjVal, ObjMemberType};
use ast_js::ast::expr::lit::LitValue;
use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::ast::type_expr::TypeExpr;
use ast_js::path::NodeRef;

use crate::literal::is_literal_like;
use crate::stmt::is_export_declaration;

/// Semantic category of a node, independent of which parser spelled it.
///
/// The printer groups and indents by category rather than by raw kind; a
/// node answers with the most specific category that applies (literal-like
/// before member-like, member-like before binary-like).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
  LiteralLike,
  BinaryLike,
  MemberAccessLike,
  FunctionOrArrow,
  FunctionOrArrowWithBlockBody,
  ObjectTypeLike,
  ExportDeclarationLike,
  GetterOrSetter,
  Other,
}

pub fn category(node: NodeRef) -> Category {
  match node {
    NodeRef::Expr(expr) => expr_category(expr),
    NodeRef::Stmt(stmt) if is_export_declaration(stmt) => Category::ExportDeclarationLike,
    NodeRef::Stmt(_) => Category::Other,
    NodeRef::ClassMember(member) => {
      if is_getter_or_setter(&member.stx.val) {
        Category::GetterOrSetter
      } else {
        Category::Other
      }
    }
    NodeRef::ObjMember(member) => match &member.stx.typ {
      ObjMemberType::Valued { val, .. } if is_getter_or_setter(val) => Category::GetterOrSetter,
      _ => Category::Other,
    },
    NodeRef::TypeExpr(ty) if is_object_type(ty) => Category::ObjectTypeLike,
    NodeRef::TypeExpr(_) => Category::Other,
    NodeRef::Func(_) | NodeRef::JsxElem(_) | NodeRef::SwitchBranch(_) | NodeRef::TopLevel(_) => {
      Category::Other
    }
  }
}

fn expr_category(expr: &Node<Expr>) -> Category {
  if is_literal_like(expr) {
    Category::LiteralLike
  } else if is_member_like(expr) {
    Category::MemberAccessLike
  } else if is_binary_like(expr) {
    Category::BinaryLike
  } else if is_function_or_arrow(expr) {
    if has_block_body(expr) {
      Category::FunctionOrArrowWithBlockBody
    } else {
      Category::FunctionOrArrow
    }
  } else {
    Category::Other
  }
}

/// Numeric literal under either producer spelling: the dedicated kind, or
/// the generic kind with a numeric runtime value.
pub fn is_numeric_literal(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::LitNum(_) => true,
    Expr::Lit(lit) => matches!(lit.stx.value, LitValue::Num(_)),
    _ => false,
  }
}

/// String literal under either producer spelling.
pub fn is_string_literal(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::LitStr(_) => true,
    Expr::Lit(lit) => matches!(lit.stx.value, LitValue::Str(_)),
    _ => false,
  }
}

/// Binary, logical, or pipe application. Assignment does not count: it
/// groups like a statement, not like an operand chain.
pub fn is_binary_like(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Binary(binary) => !binary.stx.operator.is_assignment(),
    Expr::Pipe(_) => true,
    _ => false,
  }
}

/// Member access in any spelling, including optional chaining and a bind
/// expression that has an object (`a::b` reads like member access; `::b`
/// does not).
pub fn is_member_like(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Member(_) | Expr::ComputedMember(_) => true,
    Expr::Bind(bind) => bind.stx.object.is_some(),
    _ => false,
  }
}

pub fn is_function_or_arrow(expr: &Node<Expr>) -> bool {
  matches!(expr.stx.as_ref(), Expr::Func(_) | Expr::ArrowFunc(_))
}

pub fn has_block_body(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Func(func) => func.stx.func.stx.has_block_body(),
    Expr::ArrowFunc(arrow) => arrow.stx.func.stx.has_block_body(),
    _ => false,
  }
}

pub fn is_object_type(ty: &Node<TypeExpr>) -> bool {
  matches!(ty.stx.as_ref(), TypeExpr::TypeLiteral(_))
}

pub fn is_getter_or_setter(val: &ClassOrObjVal) -> bool {
  matches!(val, ClassOrObjVal::Getter(_) | ClassOrObjVal::Setter(_))
}
