use ast_js::ast::class_or_object::{ClassMember, ClassOrObjKey, ClassOrObjVal, ObjMemberType};
use ast_js::ast::expr::jsx::{JsxAttr, JsxAttrVal, JsxElem, JsxElemChild};
use ast_js::ast::expr::lit::{LitArrElem, LitTemplatePart};
use ast_js::ast::expr::Expr;
use ast_js::ast::func::{Func, FuncBody};
use ast_js::ast::node::Node;

/// Every direct child expression edge of a node, in source order. Statement
/// bodies inside function blocks are not crossed; this walk answers
/// expression-level questions only.
pub fn expr_children<'a>(expr: &'a Node<Expr>) -> Vec<&'a Node<Expr>> {
  let mut children = Vec::new();
  collect_children(expr, &mut children);
  children
}

/// Depth-first search with early termination: true as soon as `pred` holds
/// for the root or any descendant expression. Bounded by the tree size.
pub fn contains_expr(root: &Node<Expr>, pred: &mut dyn FnMut(&Node<Expr>) -> bool) -> bool {
  let mut stack = vec![root];
  while let Some(node) = stack.pop() {
    if pred(node) {
      return true;
    }
    stack.extend(expr_children(node));
  }
  false
}

fn collect_children<'a>(expr: &'a Node<Expr>, out: &mut Vec<&'a Node<Expr>>) {
  match expr.stx.as_ref() {
    Expr::ArrowFunc(arrow) => collect_func_children(&arrow.stx.func, out),
    Expr::Func(func) => collect_func_children(&func.stx.func, out),
    Expr::Binary(binary) => {
      out.push(&binary.stx.left);
      out.push(&binary.stx.right);
    }
    Expr::Bind(bind) => {
      out.extend(bind.stx.object.as_ref());
      out.push(&bind.stx.callee);
    }
    Expr::Call(call) => {
      out.push(&call.stx.callee);
      out.extend(call.stx.arguments.iter().map(|arg| &arg.stx.value));
    }
    Expr::New(new) => {
      out.push(&new.stx.callee);
      out.extend(new.stx.arguments.iter().map(|arg| &arg.stx.value));
    }
    Expr::Class(class) => {
      out.extend(class.stx.decorators.iter().map(|d| &d.stx.value));
      out.extend(class.stx.extends.as_ref());
      for member in &class.stx.members {
        collect_class_member_children(member, out);
      }
    }
    Expr::ComputedMember(member) => {
      out.push(&member.stx.object);
      out.push(&member.stx.member);
    }
    Expr::Cond(cond) => {
      out.push(&cond.stx.test);
      out.push(&cond.stx.consequent);
      out.push(&cond.stx.alternate);
    }
    Expr::Import(import) => out.push(&import.stx.module),
    Expr::Member(member) => out.push(&member.stx.left),
    Expr::NonNull(assertion) => out.push(&assertion.stx.expression),
    Expr::Pipe(pipe) => {
      out.push(&pipe.stx.left);
      out.extend(&pipe.stx.args);
    }
    Expr::Seq(seq) => out.extend(&seq.stx.expressions),
    Expr::TaggedTemplate(tagged) => {
      out.push(&tagged.stx.function);
      collect_template_children(&tagged.stx.parts, out);
    }
    Expr::TsAs(cast) => out.push(&cast.stx.expression),
    Expr::Unary(unary) => out.push(&unary.stx.argument),
    Expr::UnaryPostfix(unary) => out.push(&unary.stx.argument),

    Expr::JsxElem(elem) => collect_jsx_children(elem, out),
    Expr::JsxExprContainer(container) => out.push(&container.stx.value),
    Expr::JsxSpreadAttr(attr) => out.push(&attr.stx.value),

    Expr::LitArr(arr) => {
      for elem in &arr.stx.elements {
        match elem {
          LitArrElem::Single(value) | LitArrElem::Rest(value) => out.push(value),
          LitArrElem::Empty => {}
        }
      }
    }
    Expr::LitObj(obj) => {
      for member in &obj.stx.members {
        match &member.stx.typ {
          ObjMemberType::Valued { key, val } => {
            if let ClassOrObjKey::Computed(key) = key {
              out.push(key);
            }
            collect_val_children(val, out);
          }
          ObjMemberType::Shorthand { .. } => {}
          ObjMemberType::Rest { val } => out.push(val),
        }
      }
    }
    Expr::LitTemplate(template) => collect_template_children(&template.stx.parts, out),

    Expr::Id(_)
    | Expr::IdPat(_)
    | Expr::ArrPat(_)
    | Expr::ObjPat(_)
    | Expr::ImportMeta(_)
    | Expr::JsxEmpty(_)
    | Expr::JsxMember(_)
    | Expr::JsxName(_)
    | Expr::JsxText(_)
    | Expr::Lit(_)
    | Expr::LitBigInt(_)
    | Expr::LitBool(_)
    | Expr::LitNull(_)
    | Expr::LitNum(_)
    | Expr::LitRegex(_)
    | Expr::LitStr(_)
    | Expr::Placeholder(_)
    | Expr::PrivateId(_)
    | Expr::Super(_)
    | Expr::This(_) => {}
  }
}

fn collect_func_children<'a>(func: &'a Node<Func>, out: &mut Vec<&'a Node<Expr>>) {
  for param in &func.stx.parameters {
    out.extend(param.stx.default_value.as_ref());
  }
  if let FuncBody::Expression(value) = &func.stx.body {
    out.push(value);
  }
}

fn collect_class_member_children<'a>(member: &'a Node<ClassMember>, out: &mut Vec<&'a Node<Expr>>) {
  out.extend(member.stx.decorators.iter().map(|d| &d.stx.value));
  if let ClassOrObjKey::Computed(key) = &member.stx.key {
    out.push(key);
  }
  collect_val_children(&member.stx.val, out);
}

fn collect_val_children<'a>(val: &'a ClassOrObjVal, out: &mut Vec<&'a Node<Expr>>) {
  match val {
    ClassOrObjVal::Prop(Some(value)) => out.push(value),
    ClassOrObjVal::Getter(getter) => collect_func_children(&getter.stx.func, out),
    ClassOrObjVal::Setter(setter) => collect_func_children(&setter.stx.func, out),
    ClassOrObjVal::Method(method) => collect_func_children(&method.stx.func, out),
    ClassOrObjVal::Prop(None) | ClassOrObjVal::IndexSignature(_) => {}
  }
}

fn collect_template_children<'a>(parts: &'a [LitTemplatePart], out: &mut Vec<&'a Node<Expr>>) {
  for part in parts {
    if let LitTemplatePart::Substitution(value) = part {
      out.push(value);
    }
  }
}

fn collect_jsx_children<'a>(elem: &'a Node<JsxElem>, out: &mut Vec<&'a Node<Expr>>) {
  for attr in &elem.stx.attributes {
    match attr {
      JsxAttr::Named { value, .. } => match value {
        Some(JsxAttrVal::Expression(container)) => out.push(&container.stx.value),
        Some(JsxAttrVal::Element(child)) => collect_jsx_children(child, out),
        Some(JsxAttrVal::Text(_)) | None => {}
      },
      JsxAttr::Spread { value } => out.push(&value.stx.value),
    }
  }
  for child in &elem.stx.children {
    match child {
      JsxElemChild::Element(child) => collect_jsx_children(child, out),
      JsxElemChild::Expr(container) => out.push(&container.stx.value),
      JsxElemChild::Text(_) => {}
    }
  }
}
