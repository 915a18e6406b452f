use ast_js::ast::class_or_object::{ClassMember, ClassOrObjKey, ClassOrObjMemberDirectKey, ClassOrObjMethod, ClassOrObjVal, ClassIndexSignature};
use ast_js::ast::expr::{Expr, IdExpr};
use ast_js::ast::func::{Func, FuncBody};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::decl::{Accessibility, ClassDecl, VarDecl, VarDeclMode};
use ast_js::ast::stmt::{BlockStmt, EmptyStmt, ExportNamedStmt, ExprStmt, Stmt};
use ast_js::ast::stx::TopLevel;
use ast_js::ast::type_expr::{KeywordType, TypeExpr};
use ast_js::loc::Loc;
use ast_js::options::{Dialect, FormatOptions};
use ast_js::path::{ChildKey, NodeRef, Path};
use classify_js::stmt::{block_node_has_top_level_blank_line, class_member_needs_semicolon, enclosing_export_declaration, is_bare_modifier_name_field, is_export_declaration, is_last_statement};

fn node<T: derive_visitor::Drive + derive_visitor::DriveMut>(stx: T) -> Node<T> {
  Node::new(Loc(0, 0), stx)
}

fn id(name: &str) -> Node<Expr> {
  node(Expr::Id(node(IdExpr {
    name: name.to_string(),
  })))
}

fn expr_stmt(expr: Node<Expr>) -> Node<Stmt> {
  node(Stmt::Expr(node(ExprStmt { expr })))
}

fn empty_stmt() -> Node<Stmt> {
  node(Stmt::Empty(node(EmptyStmt {})))
}

fn class_decl() -> Node<Stmt> {
  node(Stmt::ClassDecl(node(ClassDecl {
    decorators: vec![],
    declare: false,
    abstract_: false,
    name: None,
    type_parameters: None,
    extends: None,
    implements: vec![],
    members: vec![],
  })))
}

fn direct_key(name: &str) -> ClassOrObjKey {
  ClassOrObjKey::Direct(node(ClassOrObjMemberDirectKey {
    key: name.to_string(),
  }))
}

fn computed_key(name: &str) -> ClassOrObjKey {
  ClassOrObjKey::Computed(id(name))
}

fn method_val(async_: bool, generator: bool) -> ClassOrObjVal {
  ClassOrObjVal::Method(node(ClassOrObjMethod {
    func: node(Func {
      arrow: false,
      async_,
      generator,
      type_parameters: None,
      parameters: vec![],
      return_type: None,
      body: FuncBody::Block(vec![]),
    }),
  }))
}

fn class_member(key: ClassOrObjKey, val: ClassOrObjVal) -> Node<ClassMember> {
  node(ClassMember {
    decorators: vec![],
    key,
    static_: false,
    abstract_: false,
    readonly: false,
    optional: false,
    override_: false,
    definite_assignment: false,
    accessibility: None,
    type_annotation: None,
    val,
  })
}

#[test]
fn root_is_last_statement() {
  let stmt = expr_stmt(id("a"));
  let path = Path::new(NodeRef::Stmt(&stmt));
  assert!(is_last_statement(&path));
}

#[test]
fn trailing_empty_statements_are_ignored() {
  let block = node(BlockStmt {
    body: vec![expr_stmt(id("a")), expr_stmt(id("b")), empty_stmt()],
  });
  let block_stmt = node(Stmt::Block(block));

  let path = Path::new(NodeRef::Stmt(&block_stmt));
  let Stmt::Block(block) = block_stmt.stx.as_ref() else {
    unreachable!()
  };

  let at = |i: usize| path.push(NodeRef::Stmt(&block.stx.body[i]), ChildKey::Element("body", i));
  assert!(!is_last_statement(&at(0)));
  assert!(is_last_statement(&at(1)));
  // The empty statement itself never prints, so it is not "last" either.
  assert!(!is_last_statement(&at(2)));
}

#[test]
fn top_level_body_is_a_statement_list() {
  let top = node(TopLevel {
    body: vec![expr_stmt(id("a")), expr_stmt(id("b"))],
  });
  let path = Path::new(NodeRef::TopLevel(&top));
  let last = path.push(NodeRef::Stmt(&top.stx.body[1]), ChildKey::Element("body", 1));
  assert!(is_last_statement(&last));
  let first = path.push(NodeRef::Stmt(&top.stx.body[0]), ChildKey::Element("body", 0));
  assert!(!is_last_statement(&first));
}

#[test]
fn switch_branch_bodies_are_statement_lists() {
  use ast_js::ast::stmt::SwitchBranch;
  let branch = node(SwitchBranch {
    case: Some(id("v")),
    body: vec![expr_stmt(id("a")), expr_stmt(id("b"))],
  });
  let path = Path::new(NodeRef::SwitchBranch(&branch));
  let first = path.push(NodeRef::Stmt(&branch.stx.body[0]), ChildKey::Element("body", 0));
  assert!(!is_last_statement(&first));
  let last = path.push(NodeRef::Stmt(&branch.stx.body[1]), ChildKey::Element("body", 1));
  assert!(is_last_statement(&last));
}

#[test]
fn function_block_bodies_are_statement_lists() {
  let func = node(Func {
    arrow: false,
    async_: false,
    generator: false,
    type_parameters: None,
    parameters: vec![],
    return_type: None,
    body: FuncBody::Block(vec![expr_stmt(id("a")), expr_stmt(id("b")), empty_stmt()]),
  });
  let path = Path::new(NodeRef::Func(&func));
  let FuncBody::Block(body) = &func.stx.body else {
    unreachable!()
  };
  let second = path.push(NodeRef::Stmt(&body[1]), ChildKey::Element("body", 1));
  assert!(is_last_statement(&second));
  let first = path.push(NodeRef::Stmt(&body[0]), ChildKey::Element("body", 0));
  assert!(!is_last_statement(&first));
}

#[test]
fn export_wrapper_set() {
  let named = node(Stmt::ExportNamed(node(ExportNamedStmt {
    type_only: false,
    declaration: Some(class_decl()),
    names: None,
    from: None,
  })));
  assert!(is_export_declaration(&named));
  assert!(!is_export_declaration(&expr_stmt(id("a"))));
}

#[test]
fn enclosing_export_requires_declaration_field() {
  let named = node(Stmt::ExportNamed(node(ExportNamedStmt {
    type_only: false,
    declaration: Some(class_decl()),
    names: None,
    from: None,
  })));
  let path = Path::new(NodeRef::Stmt(&named));
  let Stmt::ExportNamed(wrapper) = named.stx.as_ref() else {
    unreachable!()
  };
  let declaration = wrapper.stx.declaration.as_ref().unwrap();

  let via_declaration = path.push(NodeRef::Stmt(declaration), ChildKey::Field("declaration"));
  assert!(enclosing_export_declaration(&via_declaration).is_some());

  let via_other_field = path.push(NodeRef::Stmt(declaration), ChildKey::Field("names"));
  assert!(enclosing_export_declaration(&via_other_field).is_none());
}

#[test]
fn bare_modifier_name_fields_are_asi_risky() {
  let bare = class_member(direct_key("static"), ClassOrObjVal::Prop(None));
  assert!(is_bare_modifier_name_field(&bare));

  let named_other = class_member(direct_key("rest"), ClassOrObjVal::Prop(None));
  assert!(!is_bare_modifier_name_field(&named_other));

  let with_value = class_member(direct_key("get"), ClassOrObjVal::Prop(Some(id("a"))));
  assert!(!is_bare_modifier_name_field(&with_value));

  let mut with_type = class_member(direct_key("set"), ClassOrObjVal::Prop(None));
  with_type.stx.type_annotation = Some(node(TypeExpr::Keyword(node(KeywordType {
    name: "string".to_string(),
  }))));
  assert!(!is_bare_modifier_name_field(&with_type));
}

#[test]
fn computed_operator_keys_need_semicolons() {
  let in_key = class_member(computed_key("in"), ClassOrObjVal::Prop(Some(id("a"))));
  assert!(class_member_needs_semicolon(&in_key));

  let instanceof_method = class_member(computed_key("instanceof"), method_val(false, false));
  assert!(class_member_needs_semicolon(&instanceof_method));
}

#[test]
fn computed_fields_need_semicolons() {
  let computed_field = class_member(computed_key("k"), ClassOrObjVal::Prop(Some(id("a"))));
  assert!(class_member_needs_semicolon(&computed_field));

  let direct_field = class_member(direct_key("k"), ClassOrObjVal::Prop(Some(id("a"))));
  assert!(!class_member_needs_semicolon(&direct_field));
}

#[test]
fn generator_methods_need_semicolons_unless_async() {
  let generator = class_member(direct_key("m"), method_val(false, true));
  assert!(class_member_needs_semicolon(&generator));

  let async_generator = class_member(direct_key("m"), method_val(true, true));
  assert!(!class_member_needs_semicolon(&async_generator));

  let plain = class_member(direct_key("m"), method_val(false, false));
  assert!(!class_member_needs_semicolon(&plain));
}

#[test]
fn static_and_qualified_members_are_safe() {
  let mut static_field = class_member(computed_key("k"), ClassOrObjVal::Prop(Some(id("a"))));
  static_field.stx.static_ = true;
  assert!(!class_member_needs_semicolon(&static_field));

  let mut private_field = class_member(computed_key("k"), ClassOrObjVal::Prop(Some(id("a"))));
  private_field.stx.accessibility = Some(Accessibility::Private);
  assert!(!class_member_needs_semicolon(&private_field));
}

#[test]
fn index_signatures_always_need_semicolons() {
  let keyword = |name: &str| {
    node(TypeExpr::Keyword(node(KeywordType {
      name: name.to_string(),
    })))
  };
  let mut member = class_member(
    direct_key("ignored"),
    ClassOrObjVal::IndexSignature(node(ClassIndexSignature {
      parameter_name: "key".to_string(),
      parameter_type: keyword("string"),
      type_annotation: keyword("number"),
    })),
  );
  member.stx.static_ = true;
  assert!(class_member_needs_semicolon(&member));
}

#[test]
fn blank_line_scan_reads_the_original_text() {
  let source = "class A {\n\n  m() {}\n}";
  let options = FormatOptions::new(Dialect::Babel, source);
  // The block spans the braces.
  assert!(block_node_has_top_level_blank_line(Loc(8, source.len()), &options));
  assert!(!block_node_has_top_level_blank_line(Loc(14, 20), &options));
}

#[test]
fn var_decl_statements_are_not_export_wrappers() {
  let decl = node(Stmt::VarDecl(node(VarDecl {
    declare: false,
    mode: VarDeclMode::Const,
    declarators: vec![],
  })));
  assert!(!is_export_declaration(&decl));
}
