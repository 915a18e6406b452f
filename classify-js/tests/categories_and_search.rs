use ast_js::ast::class_or_object::{ClassOrObjGetter, ClassOrObjKey, ClassOrObjMemberDirectKey, ClassOrObjVal, ObjMember, ObjMemberType};
use ast_js::ast::expr::lit::{LitArrElem, LitArrExpr, LitTemplateExpr, LitTemplatePart};
use ast_js::ast::expr::{ArrowFuncExpr, CallArg, CallExpr, Expr, FuncExpr, IdExpr};
use ast_js::ast::func::{Func, FuncBody};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::{ExportAllStmt, Stmt};
use ast_js::ast::type_expr::{KeywordType, TypeExpr, TypeLiteralType};
use ast_js::loc::Loc;
use ast_js::path::NodeRef;
use classify_js::kind::{category, Category};
use classify_js::search::{contains_expr, expr_children};

fn node<T: derive_visitor::Drive + derive_visitor::DriveMut>(stx: T) -> Node<T> {
  Node::new(Loc(0, 0), stx)
}

fn id(name: &str) -> Node<Expr> {
  node(Expr::Id(node(IdExpr {
    name: name.to_string(),
  })))
}

fn call(callee: Node<Expr>, args: Vec<Node<Expr>>) -> Node<Expr> {
  node(Expr::Call(node(CallExpr {
    optional_chaining: false,
    callee,
    arguments: args
      .into_iter()
      .map(|value| {
        node(CallArg {
          spread: false,
          value,
        })
      })
      .collect(),
  })))
}

fn func(arrow: bool, body: FuncBody) -> Node<Func> {
  node(Func {
    arrow,
    async_: false,
    generator: false,
    type_parameters: None,
    parameters: vec![],
    return_type: None,
    body,
  })
}

#[test]
fn function_categories_split_on_body() {
  let block = node(Expr::Func(node(FuncExpr {
    name: None,
    func: func(false, FuncBody::Block(vec![])),
  })));
  assert_eq!(
    category(NodeRef::Expr(&block)),
    Category::FunctionOrArrowWithBlockBody
  );

  let expression = node(Expr::ArrowFunc(node(ArrowFuncExpr {
    func: func(true, FuncBody::Expression(id("x"))),
  })));
  assert_eq!(category(NodeRef::Expr(&expression)), Category::FunctionOrArrow);
}

#[test]
fn export_statements_categorize_as_exports() {
  let export = node(Stmt::ExportAll(node(ExportAllStmt {
    type_only: false,
    alias: None,
    from: "m".to_string(),
  })));
  assert_eq!(
    category(NodeRef::Stmt(&export)),
    Category::ExportDeclarationLike
  );
}

#[test]
fn object_types_categorize_as_object_type_like() {
  let literal = node(TypeExpr::TypeLiteral(node(TypeLiteralType {
    members: vec![],
  })));
  assert_eq!(category(NodeRef::TypeExpr(&literal)), Category::ObjectTypeLike);

  let keyword = node(TypeExpr::Keyword(node(KeywordType {
    name: "string".to_string(),
  })));
  assert_eq!(category(NodeRef::TypeExpr(&keyword)), Category::Other);
}

#[test]
fn accessor_object_members_categorize_as_accessors() {
  let getter = node(ObjMember {
    typ: ObjMemberType::Valued {
      key: ClassOrObjKey::Direct(node(ClassOrObjMemberDirectKey {
        key: "a".to_string(),
      })),
      val: ClassOrObjVal::Getter(node(ClassOrObjGetter {
        func: func(false, FuncBody::Block(vec![])),
      })),
    },
  });
  assert_eq!(category(NodeRef::ObjMember(&getter)), Category::GetterOrSetter);
}

#[test]
fn children_enumeration_covers_call_edges() {
  let expr = call(id("f"), vec![id("a"), id("b")]);
  let children = expr_children(&expr);
  assert_eq!(children.len(), 3);
}

#[test]
fn search_terminates_early_on_match() {
  let expr = call(id("f"), vec![id("needle"), id("b")]);
  let mut visited = 0usize;
  let found = contains_expr(&expr, &mut |node| {
    visited += 1;
    matches!(node.stx.as_ref(), Expr::Id(i) if i.stx.name == "needle")
  });
  assert!(found);
  assert!(visited < 4);
}

#[test]
fn search_descends_through_containers() {
  let template = node(Expr::LitTemplate(node(LitTemplateExpr {
    parts: vec![LitTemplatePart::Substitution(node(Expr::LitArr(node(
      LitArrExpr {
        elements: vec![LitArrElem::Single(id("deep"))],
      },
    ))))],
  })));
  let found = contains_expr(&template, &mut |node| {
    matches!(node.stx.as_ref(), Expr::Id(i) if i.stx.name == "deep")
  });
  assert!(found);

  let missing = contains_expr(&template, &mut |node| {
    matches!(node.stx.as_ref(), Expr::Id(i) if i.stx.name == "absent")
  });
  assert!(!missing);
}
