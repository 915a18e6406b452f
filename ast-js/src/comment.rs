use crate::ast::node::NodeAssocData;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommentKind {
  Line,
  Block,
}

/// Where a comment sits relative to its owner node, decided by the external
/// attachment pass. Exactly one placement per comment; this layer treats the
/// value as ground truth and never re-derives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommentPlacement {
  Leading,
  Trailing,
  Dangling,
}

#[derive(Clone, Debug, Serialize)]
pub struct Comment {
  pub kind: CommentKind,
  pub placement: CommentPlacement,
  /// Comment text without delimiters (`//`, `/*`, `*/`).
  pub text: String,
  pub loc: Loc,
}

impl Comment {
  pub fn new(kind: CommentKind, placement: CommentPlacement, text: impl Into<String>, loc: Loc) -> Comment {
    Comment {
      kind,
      placement,
      text: text.into(),
      loc,
    }
  }
}

/// Comment list as written into `NodeAssocData` by the attachment pass.
pub struct Comments(pub Vec<Comment>);

pub fn attach_comments(assoc: &mut NodeAssocData, comments: Vec<Comment>) {
  assoc.set(Comments(comments));
}

pub fn attached_comments(assoc: &NodeAssocData) -> &[Comment] {
  assoc.get::<Comments>().map(|c| c.0.as_slice()).unwrap_or(&[])
}

/// Side record produced by the parser adapter: the raw source spelling and
/// whether the producer saw explicit parentheses around the node.
#[derive(Clone, Debug, Default)]
pub struct NodeExtra {
  pub raw: Option<String>,
  pub parenthesized: bool,
}

pub fn set_node_extra(assoc: &mut NodeAssocData, extra: NodeExtra) {
  assoc.set(extra);
}

pub fn node_extra(assoc: &NodeAssocData) -> Option<&NodeExtra> {
  assoc.get::<NodeExtra>()
}
