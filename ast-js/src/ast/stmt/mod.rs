pub mod decl;

use decl::{ClassDecl, FuncDecl, PatDecl, VarDecl, VarDeclMode};
use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::{expr::{pat::Pat, Expr}, import_export::{ExportNames, ImportNames}, node::Node, type_expr::{TypeExpr, TypeLiteralType, TypeParameter}};

// We must wrap each variant with Node<T> as otherwise we won't be able to visit Node<T> instead of just T.
//
// Exports are wrapper statements around an inner declaration (attached via
// the `declaration` field), matching how every producing parser spells them;
// ancestor queries key on that attachment.
#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Stmt {
  Block(Node<BlockStmt>),
  Break(Node<BreakStmt>),
  Continue(Node<ContinueStmt>),
  Debugger(Node<DebuggerStmt>),
  DoWhile(Node<DoWhileStmt>),
  Empty(Node<EmptyStmt>),
  Expr(Node<ExprStmt>),
  ForIn(Node<ForInStmt>),
  ForOf(Node<ForOfStmt>),
  ForTriple(Node<ForTripleStmt>),
  If(Node<IfStmt>),
  Import(Node<ImportStmt>),
  Label(Node<LabelStmt>),
  Return(Node<ReturnStmt>),
  Switch(Node<SwitchStmt>),
  Throw(Node<ThrowStmt>),
  Try(Node<TryStmt>),
  While(Node<WhileStmt>),
  With(Node<WithStmt>),

  ClassDecl(Node<ClassDecl>),
  FunctionDecl(Node<FuncDecl>),
  VarDecl(Node<VarDecl>),

  // TypeScript statements.
  EnumDecl(Node<EnumDecl>),
  InterfaceDecl(Node<InterfaceDecl>),
  TypeAliasDecl(Node<TypeAliasDecl>),

  // Export wrappers.
  DeclareExport(Node<DeclareExportStmt>),
  DeclareExportAll(Node<DeclareExportAllStmt>),
  ExportAll(Node<ExportAllStmt>),
  ExportDefault(Node<ExportDefaultStmt>),
  ExportNamed(Node<ExportNamedStmt>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CatchBlock {
  pub parameter: Option<Node<PatDecl>>,
  pub body: Vec<Node<Stmt>>, // We don't want to use BlockStmt as the new block scope starts with the parameter, not the braces.
}

// Similar purpose to CatchBlock. (The scope for a `for` statement starts before the braces, so don't mix with BlockStmt.)
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ForBody {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SwitchBranch {
  // If None, it's `default`.
  pub case: Option<Node<Expr>>,
  pub body: Vec<Node<Stmt>>,
}

// Statements.

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BlockStmt {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BreakStmt {
  #[drive(skip)]
  pub label: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ContinueStmt {
  #[drive(skip)]
  pub label: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DebuggerStmt {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DoWhileStmt {
  pub condition: Node<Expr>,
  pub body: Node<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct EmptyStmt {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExprStmt {
  pub expr: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ForInit {
  None,
  Expression(Node<Expr>),
  Declaration(Node<VarDecl>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ForInStmt {
  #[drive(skip)]
  pub decl_mode: Option<VarDeclMode>,
  pub target: Node<Pat>,
  pub object: Node<Expr>,
  pub body: ForBody,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ForOfStmt {
  #[drive(skip)]
  pub await_: bool,
  #[drive(skip)]
  pub decl_mode: Option<VarDeclMode>,
  pub target: Node<Pat>,
  pub iterable: Node<Expr>,
  pub body: ForBody,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ForTripleStmt {
  pub init: ForInit,
  pub condition: Option<Node<Expr>>,
  pub update: Option<Node<Expr>>,
  pub body: ForBody,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IfStmt {
  pub test: Node<Expr>,
  pub consequent: Node<Stmt>,
  pub alternate: Option<Node<Stmt>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ImportStmt {
  #[drive(skip)]
  pub type_only: bool, // TypeScript: import type
  // PatDecl always contains IdPat.
  pub default: Option<Node<PatDecl>>,
  pub names: Option<ImportNames>,
  #[drive(skip)]
  pub module: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct LabelStmt {
  #[drive(skip)]
  pub name: String,
  pub statement: Node<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ReturnStmt {
  pub value: Option<Node<Expr>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SwitchStmt {
  pub test: Node<Expr>,
  pub branches: Vec<Node<SwitchBranch>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ThrowStmt {
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TryStmt {
  pub wrapped: Vec<Node<Stmt>>,
  pub catch: Option<Node<CatchBlock>>,
  pub finally: Option<Vec<Node<Stmt>>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct WhileStmt {
  pub condition: Node<Expr>,
  pub body: Node<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct WithStmt {
  pub object: Node<Expr>,
  pub body: Node<Stmt>,
}

// TypeScript statements.

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct EnumMember {
  #[drive(skip)]
  pub key: String,
  pub value: Option<Node<Expr>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct EnumDecl {
  #[drive(skip)]
  pub const_: bool,
  #[drive(skip)]
  pub name: String,
  pub members: Vec<EnumMember>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct InterfaceDecl {
  #[drive(skip)]
  pub name: String,
  pub type_parameters: Option<Vec<Node<TypeParameter>>>,
  pub extends: Vec<Node<TypeExpr>>,
  pub body: Node<TypeLiteralType>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeAliasDecl {
  #[drive(skip)]
  pub name: String,
  pub type_parameters: Option<Vec<Node<TypeParameter>>>,
  pub value: Node<TypeExpr>,
}

// Export wrappers.

// Flow: `declare export <declaration>`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DeclareExportStmt {
  pub declaration: Option<Node<Stmt>>,
}

// Flow: `declare export * from 'module'`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DeclareExportAllStmt {
  #[drive(skip)]
  pub from: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportAllStmt {
  #[drive(skip)]
  pub type_only: bool,
  #[drive(skip)]
  pub alias: Option<String>,
  #[drive(skip)]
  pub from: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ExportDefaultVal {
  Expr(Node<Expr>),
  Decl(Node<Stmt>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportDefaultStmt {
  pub declaration: ExportDefaultVal,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportNamedStmt {
  #[drive(skip)]
  pub type_only: bool, // TypeScript: export type
  pub declaration: Option<Node<Stmt>>,
  pub names: Option<ExportNames>,
  #[drive(skip)]
  pub from: Option<String>,
}
