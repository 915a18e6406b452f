use crate::ast::class_or_object::{ClassMember, ObjMember};
use crate::ast::expr::jsx::JsxElem;
use crate::ast::expr::Expr;
use crate::ast::func::Func;
use crate::ast::node::{Node, NodeAssocData};
use crate::ast::stmt::{Stmt, SwitchBranch};
use crate::ast::stx::TopLevel;
use crate::ast::type_expr::TypeExpr;
use crate::loc::Loc;

/// Borrowed view of one tree node, summed over the node sorts that own
/// children. Classifiers receive these instead of parent back-pointers.
#[derive(Clone, Copy)]
pub enum NodeRef<'a> {
  ClassMember(&'a Node<ClassMember>),
  Expr(&'a Node<Expr>),
  Func(&'a Node<Func>),
  JsxElem(&'a Node<JsxElem>),
  ObjMember(&'a Node<ObjMember>),
  Stmt(&'a Node<Stmt>),
  SwitchBranch(&'a Node<SwitchBranch>),
  TopLevel(&'a Node<TopLevel>),
  TypeExpr(&'a Node<TypeExpr>),
}

impl<'a> NodeRef<'a> {
  pub fn loc(&self) -> Loc {
    match self {
      NodeRef::ClassMember(n) => n.loc,
      NodeRef::Expr(n) => n.loc,
      NodeRef::Func(n) => n.loc,
      NodeRef::JsxElem(n) => n.loc,
      NodeRef::ObjMember(n) => n.loc,
      NodeRef::Stmt(n) => n.loc,
      NodeRef::SwitchBranch(n) => n.loc,
      NodeRef::TopLevel(n) => n.loc,
      NodeRef::TypeExpr(n) => n.loc,
    }
  }

  pub fn assoc(&self) -> &'a NodeAssocData {
    match self {
      NodeRef::ClassMember(n) => &n.assoc,
      NodeRef::Expr(n) => &n.assoc,
      NodeRef::Func(n) => &n.assoc,
      NodeRef::JsxElem(n) => &n.assoc,
      NodeRef::ObjMember(n) => &n.assoc,
      NodeRef::Stmt(n) => &n.assoc,
      NodeRef::SwitchBranch(n) => &n.assoc,
      NodeRef::TopLevel(n) => &n.assoc,
      NodeRef::TypeExpr(n) => &n.assoc,
    }
  }

  pub fn as_expr(&self) -> Option<&'a Node<Expr>> {
    match self {
      NodeRef::Expr(n) => Some(n),
      _ => None,
    }
  }

  pub fn as_stmt(&self) -> Option<&'a Node<Stmt>> {
    match self {
      NodeRef::Stmt(n) => Some(n),
      _ => None,
    }
  }

  pub fn as_jsx_elem(&self) -> Option<&'a Node<JsxElem>> {
    match self {
      NodeRef::JsxElem(n) => Some(n),
      _ => None,
    }
  }
}

/// The field name or list position by which a frame's node hangs off its
/// parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKey {
  Field(&'static str),
  Element(&'static str, usize),
}

#[derive(Clone, Copy)]
pub struct PathFrame<'a> {
  pub node: NodeRef<'a>,
  /// None only on the root frame.
  pub key: Option<ChildKey>,
}

/// Ancestor chain from the tree root to a focus node, built by the caller's
/// traversal. Immutable: extending produces a new value, so a `Path` can be
/// held across recursion without aliasing the tree.
#[derive(Clone)]
pub struct Path<'a> {
  frames: Vec<PathFrame<'a>>,
}

impl<'a> Path<'a> {
  pub fn new(root: NodeRef<'a>) -> Path<'a> {
    Path {
      frames: vec![PathFrame {
        node: root,
        key: None,
      }],
    }
  }

  /// Extends this path with one more frame, leaving `self` untouched.
  pub fn push(&self, node: NodeRef<'a>, key: ChildKey) -> Path<'a> {
    let mut frames = self.frames.clone();
    frames.push(PathFrame {
      node,
      key: Some(key),
    });
    Path { frames }
  }

  /// The focus node.
  pub fn node(&self) -> NodeRef<'a> {
    self.frames[self.frames.len() - 1].node
  }

  /// How the focus node attaches to its parent; None at the root.
  pub fn key(&self) -> Option<ChildKey> {
    self.frames[self.frames.len() - 1].key
  }

  /// `ancestor(0)` is the focus node itself, `ancestor(1)` its parent.
  pub fn ancestor(&self, n: usize) -> Option<NodeRef<'a>> {
    self
      .frames
      .len()
      .checked_sub(n + 1)
      .map(|i| self.frames[i].node)
  }

  pub fn parent(&self) -> Option<NodeRef<'a>> {
    self.ancestor(1)
  }

  pub fn depth(&self) -> usize {
    self.frames.len()
  }
}
