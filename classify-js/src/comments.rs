use ast_js::ast::expr::jsx::JsxElemChild;
use ast_js::ast::expr::Expr;
use ast_js::ast::node::NodeAssocData;
use ast_js::comment::{attached_comments, CommentKind, CommentPlacement};
use ast_js::loc::Loc;
use ast_js::options::FormatOptions;
use ast_js::path::{ChildKey, Path};
use memchr::memchr;

/// Comment text that suppresses formatting of the annotated node.
pub const IGNORE_DIRECTIVE: &str = "fmt-ignore";

pub fn has_leading_comment(assoc: &NodeAssocData) -> bool {
  attached_comments(assoc)
    .iter()
    .any(|c| c.placement == CommentPlacement::Leading)
}

pub fn has_trailing_comment(assoc: &NodeAssocData) -> bool {
  attached_comments(assoc)
    .iter()
    .any(|c| c.placement == CommentPlacement::Trailing)
}

pub fn has_dangling_comments(assoc: &NodeAssocData) -> bool {
  attached_comments(assoc)
    .iter()
    .any(|c| c.placement == CommentPlacement::Dangling)
}

/// Whether some leading comment ends its line: only spaces/tabs between the
/// comment's end and the next newline, with the newline before the node's
/// own start. The printer parenthesizes `return` arguments and naked left
/// sides in this situation so the comment stays attached to the right token.
pub fn has_own_line_leading_comment(assoc: &NodeAssocData, node_loc: Loc, options: &FormatOptions) -> bool {
  attached_comments(assoc)
    .iter()
    .filter(|c| c.placement == CommentPlacement::Leading)
    .any(|c| {
      let gap_end = node_loc.start().min(options.source.len());
      let gap_start = c.loc.end().min(gap_end);
      let gap = &options.source_bytes()[gap_start..gap_end];
      match memchr(b'\n', gap) {
        Some(i) => gap[..i]
          .iter()
          .all(|&b| b == b' ' || b == b'\t' || b == b'\r'),
        None => false,
      }
    })
}

/// True iff the node's last dangling comment is line-style: everything after
/// it on the line would be swallowed into the comment, so the printer must
/// break before continuing.
pub fn needs_hardline_after_dangling_comment(assoc: &NodeAssocData) -> bool {
  attached_comments(assoc)
    .iter()
    .filter(|c| c.placement == CommentPlacement::Dangling)
    .next_back()
    .is_some_and(|c| c.kind == CommentKind::Line)
}

/// Whether the focus node is annotated with the ignore directive, either on
/// the node itself or, for JSX children, via the `{/* fmt-ignore */}`
/// container convention on the nearest non-blank previous sibling.
pub fn has_ignore_directive(path: &Path) -> bool {
  if has_node_ignore_comment(path.node().assoc()) {
    return true;
  }
  has_jsx_ignore_comment(path)
}

fn has_node_ignore_comment(assoc: &NodeAssocData) -> bool {
  attached_comments(assoc)
    .iter()
    .any(|c| c.text.trim() == IGNORE_DIRECTIVE)
}

fn has_jsx_ignore_comment(path: &Path) -> bool {
  let Some(parent) = path.parent().and_then(|p| p.as_jsx_elem()) else {
    return false;
  };
  let Some(ChildKey::Element("children", index)) = path.key() else {
    return false;
  };
  let Some(older_siblings) = parent.stx.children.get(..index) else {
    return false;
  };
  // Nearest previous sibling that isn't whitespace-only text.
  let previous = older_siblings.iter().rev().find(|child| {
    !matches!(child, JsxElemChild::Text(text) if text.stx.value.chars().all(char::is_whitespace))
  });
  let Some(JsxElemChild::Expr(container)) = previous else {
    return false;
  };
  match container.stx.value.stx.as_ref() {
    Expr::JsxEmpty(empty) => has_node_ignore_comment(&empty.assoc),
    _ => false,
  }
}
