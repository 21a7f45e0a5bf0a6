//! Contract shared by the header and source emitters, plus the spelling
//! rules both of them must agree on.

use dsharp_ast::ast::{Body, Region, VariableDecl};
use dsharp_ast::grammar;
use dsharp_ast::report::Reporter;
use dsharp_ast::token::TokenRun;

/// A read-only, depth-first walk of the tree that accumulates text.
pub trait CodeGenerator {
    /// Artifact name used in progress messages.
    fn artifact(&self) -> &'static str;

    fn reporter(&self) -> &dyn Reporter;

    fn indent_mut(&mut self) -> &mut usize;

    /// Leading whitespace for the current indent level. Flat by default.
    fn pad(&self) -> String {
        String::new()
    }

    /// Emit one body at the current scope.
    fn generate(&mut self, body: &Body) -> String;

    /// Top-level pass over the primary body.
    fn perform(&mut self, root: &Body) -> String {
        *self.indent_mut() = 0;
        let out = self.generate(root);
        self.reporter()
            .ok(&format!("Finished compiling AST into {}", self.artifact()));
        out
    }

    fn generate_region(&mut self, region: &Region) -> String {
        let pad = self.pad();
        let mut out = format!("{pad}namespace {}\n{pad}{{\n", region.name);
        *self.indent_mut() += 1;
        out.push_str(&self.generate(&region.body));
        *self.indent_mut() -= 1;
        out.push_str(&format!("{pad}}}\n"));
        out
    }
}

/// Target spelling of a type followed by one `*` per indirection.
pub fn type_name(ty: &str, pointer: usize) -> String {
    let mut out = grammar::convert_type(ty).to_string();
    out.push_str(&"*".repeat(pointer));
    out
}

/// `[<run>]`, or `[]` for an empty run.
pub fn bracketed(run: &TokenRun) -> String {
    format!("[{}]", run.joined())
}

/// Parameters render the same at both sites:
/// `[const ]<type> <name>[<array run>]`.
pub fn parameter(param: &VariableDecl) -> String {
    let mut out = String::new();
    if param.constant {
        out.push_str("const ");
    }
    out.push_str(&type_name(&param.ty, param.pointer));
    out.push(' ');
    out.push_str(&param.name);
    if let Some(size) = &param.array {
        out.push_str(&bracketed(size));
    }
    out
}

pub fn parameter_list(params: &[VariableDecl]) -> String {
    params.iter().map(parameter).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsharp_ast::token::{Token, TokenKind};

    fn param(name: &str, ty: &str, pointer: usize) -> VariableDecl {
        VariableDecl {
            name: name.into(),
            ty: ty.into(),
            pointer,
            constant: false,
            array: None,
            init: TokenRun::default(),
        }
    }

    #[test]
    fn builtin_types_are_converted_and_pointers_appended() {
        assert_eq!(type_name("int", 0), "int32_t");
        assert_eq!(type_name("byte", 2), "uint8_t**");
        assert_eq!(type_name("Mesh", 1), "Mesh*");
    }

    #[test]
    fn parameters_join_with_commas() {
        let mut xs = param("xs", "uint", 1);
        xs.constant = true;
        xs.array = Some(TokenRun::new(vec![Token::new(TokenKind::LiteralDecimal, 1, "4")]));
        let list = parameter_list(&[param("n", "int", 0), xs]);
        assert_eq!(list, "int32_t n, const uint32_t* xs[4]");
        assert_eq!(parameter_list(&[]), "");
    }
}
