use crate::compiler::{bracketed, parameter_list, type_name, CodeGenerator};
use dsharp_ast::ast::{Body, ClassDecl, Conditional, FunctionDecl, Node, VariableDecl, VariableSet};
use dsharp_ast::report::Reporter;
use dsharp_ast::token::TokenRun;

/// Definition-site emitter: function bodies and out-of-class storage for
/// static members and globals.
///
/// Indentation is tracked for parity with the header walk but does not shape
/// the output.
pub struct SourceEmitter<'r> {
    indent: usize,
    reporter: &'r dyn Reporter,
}

impl<'r> SourceEmitter<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            indent: 0,
            reporter,
        }
    }

    /// Only functions and, for a static owner, fields are defined at class
    /// scope.
    fn class_defs(&self, class: &ClassDecl) -> String {
        let mut out = String::new();
        for node in class.body.iter() {
            match node {
                Node::Fn(f) => out.push_str(&self.function_def(f, Some(class))),
                Node::Var(v) if class.is_static => out.push_str(&field_def(v, Some(class))),
                _ => {}
            }
        }
        out.push('\n');
        out
    }

    fn function_def(&self, func: &FunctionDecl, owner: Option<&ClassDecl>) -> String {
        let qualifier = owner.map(|c| format!("{}::", c.name)).unwrap_or_default();
        format!(
            "\n{} {}{}({})\n{{\n{}}}\n",
            type_name(&func.ret_ty, func.ret_pointer),
            qualifier,
            func.name,
            parameter_list(&func.params),
            self.statements(&func.body)
        )
    }

    fn statements(&self, body: &Body) -> String {
        let mut out = String::new();
        for node in body.iter() {
            let text = match node {
                Node::Var(v) => local_decl(v),
                Node::Set(s) => assignment(s),
                Node::Call(c) => format!("{}({});\n", c.callee, c.args.joined()),
                Node::Return(r) if r.value.is_empty() => "return;\n".to_string(),
                Node::Return(r) => format!("return {};\n", r.value.joined()),
                Node::While(w) => self.guarded("while", w),
                Node::If(i) => self.guarded("if", i),
                Node::ElseIf(e) => self.guarded("else if", e),
                Node::Else(b) => format!("else\n{{\n{}}}\n", self.statements(b)),
                // declarations have no meaning inside a function body
                Node::Import(_)
                | Node::Region(_)
                | Node::Class(_)
                | Node::Struct(_)
                | Node::Fn(_) => String::new(),
            };
            out.push_str(&text);
        }
        out
    }

    fn guarded(&self, keyword: &str, block: &Conditional) -> String {
        format!(
            "{keyword} ({})\n{{\n{}}}\n",
            block.condition.joined(),
            self.statements(&block.body)
        )
    }
}

/// Storage for a static field or a global. Constants are fully defined in
/// the header and produce nothing here.
fn field_def(var: &VariableDecl, owner: Option<&ClassDecl>) -> String {
    if var.constant {
        return String::new();
    }
    let qualifier = owner.map(|c| format!("{}::", c.name)).unwrap_or_default();
    format!(
        "{} {}{}{}{};\n",
        type_name(&var.ty, var.pointer),
        qualifier,
        var.name,
        array_suffix(var),
        initializer(&var.init)
    )
}

fn local_decl(var: &VariableDecl) -> String {
    let constant = if var.constant { "const " } else { "" };
    format!(
        "{constant}{} {}{}{};\n",
        type_name(&var.ty, var.pointer),
        var.name,
        array_suffix(var),
        initializer(&var.init)
    )
}

fn assignment(set: &VariableSet) -> String {
    let mut out = set.target.clone();
    for index in &set.index {
        out.push_str(&bracketed(index));
    }
    out.push(' ');
    out.push_str(&set.op);
    if !set.value.is_empty() {
        out.push(' ');
        out.push_str(&set.value.joined());
    }
    out.push_str(";\n");
    out
}

fn array_suffix(var: &VariableDecl) -> String {
    var.array.as_ref().map(bracketed).unwrap_or_default()
}

fn initializer(init: &TokenRun) -> String {
    if init.is_empty() {
        String::new()
    } else {
        format!(" = {}", init.joined())
    }
}

impl CodeGenerator for SourceEmitter<'_> {
    fn artifact(&self) -> &'static str {
        "source"
    }

    fn reporter(&self) -> &dyn Reporter {
        self.reporter
    }

    fn indent_mut(&mut self) -> &mut usize {
        &mut self.indent
    }

    fn generate(&mut self, body: &Body) -> String {
        let mut out = String::new();
        for node in body.iter() {
            let text = match node {
                Node::Region(r) => self.generate_region(r),
                Node::Class(c) | Node::Struct(c) => self.class_defs(c),
                Node::Fn(f) => self.function_def(f, None),
                Node::Var(v) => field_def(v, None),
                Node::Import(_)
                | Node::Set(_)
                | Node::While(_)
                | Node::If(_)
                | Node::ElseIf(_)
                | Node::Else(_)
                | Node::Return(_)
                | Node::Call(_) => String::new(),
            };
            out.push_str(&text);
        }
        out
    }
}
