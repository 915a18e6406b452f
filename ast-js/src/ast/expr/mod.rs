pub mod pat;
pub mod lit;
pub mod jsx;

use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use jsx::{JsxElem, JsxEmptyExpr, JsxExprContainer, JsxMemberExpr, JsxName, JsxSpreadAttr, JsxText};
use lit::{LitArrExpr, LitBigIntExpr, LitBoolExpr, LitExpr, LitNullExpr, LitNumExpr, LitObjExpr, LitRegexExpr, LitStrExpr, LitTemplateExpr, LitTemplatePart};
use pat::{ArrPat, ClassOrFuncName, IdPat, ObjPat};
use serde::Serialize;

use crate::operator::OperatorName;

use super::{class_or_object::ClassMember, func::Func, node::Node, type_expr::TypeExpr};

// We must wrap each variant with Node<T> as otherwise we won't be able to visit Node<T> instead of just T.
//
// The same semantic value can be spelled by two variants depending on the
// producing parser: dedicated literal kinds (LitNum, LitStr, ...) for
// parsers with per-type tags, and the generic Lit kind for parsers that emit
// one literal tag with a runtime-typed payload. Classifiers must treat the
// two spellings as equivalent; nothing downstream may assume one producer.
#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Expr {
  ArrowFunc(Node<ArrowFuncExpr>),
  Binary(Node<BinaryExpr>),
  Bind(Node<BindExpr>),
  Call(Node<CallExpr>),
  Class(Node<ClassExpr>),
  ComputedMember(Node<ComputedMemberExpr>),
  Cond(Node<CondExpr>),
  Func(Node<FuncExpr>),
  Id(Node<IdExpr>),
  Import(Node<ImportExpr>),
  ImportMeta(Node<ImportMeta>),
  Member(Node<MemberExpr>),
  New(Node<NewExpr>),
  NonNull(Node<NonNullExpr>),
  Pipe(Node<PipeExpr>),
  Placeholder(Node<PlaceholderExpr>),
  PrivateId(Node<PrivateIdExpr>),
  Seq(Node<SeqExpr>),
  Super(Node<SuperExpr>),
  TaggedTemplate(Node<TaggedTemplateExpr>),
  This(Node<ThisExpr>),
  TsAs(Node<TsAsExpr>),
  Unary(Node<UnaryExpr>),
  UnaryPostfix(Node<UnaryPostfixExpr>),

  // JSX.
  JsxElem(Node<JsxElem>),
  JsxEmpty(Node<JsxEmptyExpr>),
  JsxExprContainer(Node<JsxExprContainer>),
  JsxMember(Node<JsxMemberExpr>),
  JsxName(Node<JsxName>),
  JsxSpreadAttr(Node<JsxSpreadAttr>),
  JsxText(Node<JsxText>),

  // Literals, dedicated kinds.
  LitArr(Node<LitArrExpr>),
  LitBigInt(Node<LitBigIntExpr>),
  LitBool(Node<LitBoolExpr>),
  LitNull(Node<LitNullExpr>),
  LitNum(Node<LitNumExpr>),
  LitObj(Node<LitObjExpr>),
  LitRegex(Node<LitRegexExpr>),
  LitStr(Node<LitStrExpr>),
  LitTemplate(Node<LitTemplateExpr>),
  // Literals, generic single-tag spelling.
  Lit(Node<LitExpr>),

  // Patterns.
  ArrPat(Node<ArrPat>),
  IdPat(Node<IdPat>),
  ObjPat(Node<ObjPat>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CallArg {
  #[drive(skip)]
  pub spread: bool,
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Decorator {
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ArrowFuncExpr {
  pub func: Node<Func>, // Always arrow.
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BinaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Node<Expr>,
  pub right: Node<Expr>,
}

// `object::callee` or `::callee`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BindExpr {
  pub object: Option<Node<Expr>>,
  pub callee: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CallExpr {
  #[drive(skip)]
  pub optional_chaining: bool,
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<CallArg>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ClassExpr {
  pub decorators: Vec<Node<Decorator>>,
  pub name: Option<Node<ClassOrFuncName>>,
  pub extends: Option<Node<Expr>>,
  pub members: Vec<Node<ClassMember>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CondExpr {
  pub test: Node<Expr>,
  pub consequent: Node<Expr>,
  pub alternate: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ComputedMemberExpr {
  #[drive(skip)]
  pub optional_chaining: bool,
  pub object: Node<Expr>,
  pub member: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncExpr {
  pub name: Option<Node<ClassOrFuncName>>,
  pub func: Node<Func>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
}

// `import(module)`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ImportExpr {
  pub module: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ImportMeta {}

// Dedicated special type to easily distinguish when analysing. Also done to avoid using IdExpr as right, which is incorrect (not a variable usage).
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct MemberExpr {
  #[drive(skip)]
  pub optional_chaining: bool,
  pub left: Node<Expr>,
  #[drive(skip)]
  pub right: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct NewExpr {
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<CallArg>>,
}

// TypeScript `expr!`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct NonNullExpr {
  pub expression: Node<Expr>,
}

// Templating-language pipe application: `left | name : arg : arg`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct PipeExpr {
  pub left: Node<Expr>,
  #[drive(skip)]
  pub name: String,
  pub args: Vec<Node<Expr>>,
}

// Pattern-slot token emitted by template-producing parsers.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct PlaceholderExpr {
  #[drive(skip)]
  pub name: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct PrivateIdExpr {
  #[drive(skip)]
  pub name: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SeqExpr {
  pub expressions: Vec<Node<Expr>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SuperExpr {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ThisExpr {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TaggedTemplateExpr {
  pub function: Node<Expr>,
  pub parts: Vec<LitTemplatePart>,
}

// TypeScript `expr as Type`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TsAsExpr {
  pub expression: Node<Expr>,
  pub type_annotation: Node<TypeExpr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct UnaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub argument: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct UnaryPostfixExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub argument: Node<Expr>,
}
