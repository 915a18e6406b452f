use ast_js::ast::class_or_object::{ClassMember, ClassOrObjKey, ClassOrObjVal};
use ast_js::ast::func::FuncBody;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use ast_js::loc::Loc;
use ast_js::options::FormatOptions;
use ast_js::path::{ChildKey, NodeRef, Path};

/// Membership in the export-wrapper set, across dialect spellings.
pub fn is_export_declaration(stmt: &Node<Stmt>) -> bool {
  matches!(
    stmt.stx.as_ref(),
    Stmt::DeclareExport(_)
      | Stmt::DeclareExportAll(_)
      | Stmt::ExportAll(_)
      | Stmt::ExportDefault(_)
      | Stmt::ExportNamed(_)
  )
}

/// The parent export wrapper, but only when the focus node hangs off it via
/// the `declaration` field. A declaration referenced from an export's name
/// list does not count.
pub fn enclosing_export_declaration<'a>(path: &Path<'a>) -> Option<&'a Node<Stmt>> {
  if path.key() != Some(ChildKey::Field("declaration")) {
    return None;
  }
  let parent = path.parent()?.as_stmt()?;
  is_export_declaration(parent).then_some(parent)
}

/// Whether the focus statement is the last one that actually prints in its
/// enclosing statement list, with empty statements filtered out. The root
/// counts as last; so does a focus whose parent holds no statement list at
/// all, which only arises for single-statement slots.
pub fn is_last_statement(path: &Path) -> bool {
  let Some(parent) = path.parent() else {
    return true;
  };
  let Some(ChildKey::Element(_, index)) = path.key() else {
    return true;
  };
  let Some(body) = statement_list(parent) else {
    return true;
  };
  last_printing_index(body) == Some(index)
}

fn statement_list<'a>(parent: NodeRef<'a>) -> Option<&'a [Node<Stmt>]> {
  match parent {
    NodeRef::TopLevel(top) => Some(&top.stx.body),
    NodeRef::SwitchBranch(branch) => Some(&branch.stx.body),
    NodeRef::Func(func) => match &func.stx.body {
      FuncBody::Block(body) => Some(body),
      FuncBody::Expression(_) => None,
    },
    NodeRef::Stmt(stmt) => match stmt.stx.as_ref() {
      Stmt::Block(block) => Some(&block.stx.body),
      _ => None,
    },
    _ => None,
  }
}

fn last_printing_index(body: &[Node<Stmt>]) -> Option<usize> {
  body
    .iter()
    .enumerate()
    .rev()
    .find(|(_, stmt)| !matches!(stmt.stx.as_ref(), Stmt::Empty(_)))
    .map(|(i, _)| i)
}

/// A field named exactly `static`, `get`, or `set` with neither a value nor
/// a type annotation: on the next parse the name token could be read as a
/// modifier of whatever follows.
pub fn is_bare_modifier_name_field(member: &Node<ClassMember>) -> bool {
  matches!(&member.stx.val, ClassOrObjVal::Prop(None))
    && member.stx.type_annotation.is_none()
    && matches!(
      &member.stx.key,
      ClassOrObjKey::Direct(key) if matches!(key.stx.key.as_str(), "static" | "get" | "set")
    )
}

/// Class members whose first token could fuse with the previous line under
/// automatic-semicolon-insertion, so the printer must emit a protective
/// semicolon. Static or accessibility-qualified members always start with a
/// safe keyword; index signatures always start with `[`.
pub fn class_member_needs_semicolon(member: &Node<ClassMember>) -> bool {
  if matches!(&member.stx.val, ClassOrObjVal::IndexSignature(_)) {
    return true;
  }
  if member.stx.static_ || member.stx.accessibility.is_some() {
    return false;
  }
  let computed = member.stx.key.is_computed();
  if computed && matches!(member.stx.key.name(), Some("in" | "instanceof")) {
    return true;
  }
  match &member.stx.val {
    ClassOrObjVal::Prop(_) => computed,
    ClassOrObjVal::Method(method) => {
      !method.stx.func.stx.async_ && (computed || method.stx.func.stx.generator)
    }
    _ => false,
  }
}

/// Scans a block's raw text (outer braces included) for a truly blank line
/// at the block's own nesting level: two newlines with only space characters
/// between them while exactly one brace deep. Blank lines inside nested
/// braces don't count.
pub fn block_has_top_level_blank_line(raw: &str) -> bool {
  let mut depth = 0i32;
  // Set after a newline at depth 1, cleared by anything but a space.
  let mut blank = false;
  for byte in raw.bytes() {
    match byte {
      b'{' => {
        depth += 1;
        blank = false;
      }
      b'}' => {
        depth -= 1;
        blank = false;
      }
      b'\n' => {
        if depth == 1 && blank {
          return true;
        }
        blank = depth == 1;
      }
      b' ' => {}
      _ => blank = false,
    }
  }
  false
}

/// [`block_has_top_level_blank_line`] over a node's span in the original
/// text.
pub fn block_node_has_top_level_blank_line(loc: Loc, options: &FormatOptions) -> bool {
  block_has_top_level_blank_line(options.slice(loc))
}
