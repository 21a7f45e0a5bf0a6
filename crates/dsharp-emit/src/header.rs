use crate::compiler::{bracketed, parameter_list, type_name, CodeGenerator};
use dsharp_ast::ast::{Body, ClassDecl, FunctionDecl, Import, Node, VariableDecl};
use dsharp_ast::report::Reporter;
use std::path::Path;

const INDENT: &str = "    ";

/// Declaration-site emitter: type declarations, prototypes and the full
/// definitions of compile-time constants.
pub struct HeaderEmitter<'r> {
    indent: usize,
    reporter: &'r dyn Reporter,
}

impl<'r> HeaderEmitter<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            indent: 0,
            reporter,
        }
    }

    fn include(&self, import: &Import) -> String {
        let header = Path::new(&import.file).with_extension("h");
        format!("{}#include \"{}\"\n", self.pad(), header.display())
    }

    fn class_decl(&mut self, class: &ClassDecl, keyword: &str) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}{keyword} {}\n{pad}{{\n", class.name);
        if keyword == "class" {
            out.push_str(&format!("{pad}public:\n"));
        }
        self.indent += 1;
        for node in class.body.iter() {
            match node {
                Node::Fn(f) => out.push_str(&self.function_decl(f, Some(class))),
                Node::Var(v) => out.push_str(&self.variable_decl(v, Some(class))),
                // nested types and stray statements have no declaration here
                _ => {}
            }
        }
        self.indent -= 1;
        out.push_str(&format!("{pad}}};\n"));
        out
    }

    fn function_decl(&self, func: &FunctionDecl, owner: Option<&ClassDecl>) -> String {
        let mut out = format!("\n{}", self.pad());
        if owner.is_some_and(|c| c.is_static) {
            out.push_str("static ");
        }
        out.push_str(&format!(
            "{} {}({});\n",
            type_name(&func.ret_ty, func.ret_pointer),
            func.name,
            parameter_list(&func.params)
        ));
        out
    }

    /// Members of a static class and top-level constants are defined here in
    /// full; everything else is only declared.
    fn variable_decl(&self, var: &VariableDecl, owner: Option<&ClassDecl>) -> String {
        let owner_static = owner.is_some_and(|c| c.is_static);
        let defined_here = var.constant && (owner.is_none() || owner_static);

        let mut out = self.pad();
        if owner_static {
            out.push_str("static ");
        } else if owner.is_none() && !var.constant {
            out.push_str("extern ");
        }
        if var.constant {
            out.push_str("const ");
        }
        out.push_str(&type_name(&var.ty, var.pointer));
        out.push(' ');
        out.push_str(&var.name);
        if let Some(size) = &var.array {
            if defined_here {
                out.push_str(&bracketed(size));
            } else {
                out.push_str("[]");
            }
        }
        if var.constant && var.has_init() {
            out.push_str(" = ");
            out.push_str(&var.init.joined());
        }
        out.push_str(";\n");
        out
    }
}

impl CodeGenerator for HeaderEmitter<'_> {
    fn artifact(&self) -> &'static str {
        "header"
    }

    fn reporter(&self) -> &dyn Reporter {
        self.reporter
    }

    fn indent_mut(&mut self) -> &mut usize {
        &mut self.indent
    }

    fn pad(&self) -> String {
        INDENT.repeat(self.indent)
    }

    fn generate(&mut self, body: &Body) -> String {
        let mut out = String::new();
        for node in body.iter() {
            let text = match node {
                Node::Import(i) => self.include(i),
                Node::Region(r) => self.generate_region(r),
                Node::Class(c) => self.class_decl(c, "class"),
                Node::Struct(s) => self.class_decl(s, "struct"),
                Node::Fn(f) => self.function_decl(f, None),
                Node::Var(v) => self.variable_decl(v, None),
                Node::Set(_)
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
