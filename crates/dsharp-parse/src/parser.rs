use crate::error::ParseError;
use crate::lexer::tokenize;
use crate::stream::TokenStream;
use dsharp_ast::ast::{
    Body, Call, ClassDecl, Conditional, FunctionDecl, Import, Node, Region, Return, VariableDecl,
    VariableSet,
};
use dsharp_ast::report::{Reporter, Silent};
use dsharp_ast::token::{Token, TokenKind, TokenRun};

type Result<T> = std::result::Result<T, ParseError>;

/// Maximum block nesting depth; deeper input fails instead of exhausting
/// the stack.
pub const MAX_NESTING_DEPTH: usize = 512;

pub fn parse_str(src: &str) -> Result<Body> {
    let tokens = tokenize(src)?;
    parse_tokens(tokens)
}

pub fn parse_tokens(tokens: Vec<Token>) -> Result<Body> {
    Parser::new(tokens, &Silent).parse()
}

/// Where a variable declaration appears; parameters leave their terminator
/// (`,` or `)`) to the enclosing list.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DeclSite {
    Statement,
    Parameter,
}

pub struct Parser<'r> {
    tokens: TokenStream,
    reporter: &'r dyn Reporter,
    depth: usize,
}

impl<'r> Parser<'r> {
    pub fn new(tokens: Vec<Token>, reporter: &'r dyn Reporter) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            reporter,
            depth: 0,
        }
    }

    /// Parse the whole stream into the primary body.
    pub fn parse(mut self) -> Result<Body> {
        let mut root = Body::default();
        self.perform(&mut root)?;
        self.reporter.ok("Finished generating AST nodes");
        Ok(root)
    }

    fn perform(&mut self, parent: &mut Body) -> Result<()> {
        while !self.tokens.done() {
            let tok = self.tokens.next();
            if tok.is_invalid() {
                break;
            }
            if let Some(node) = self.handle(&tok)? {
                self.add(parent, node);
            }
        }
        Ok(())
    }

    fn add(&self, parent: &mut Body, node: Node) {
        self.reporter.info(&format!("Created node  - {node}"));
        parent.nodes.push(node);
    }

    // ======= dispatch =======

    /// Statement dispatch on an already consumed token. Tokens that start no
    /// statement yield `None` and are skipped by the caller.
    fn handle(&mut self, tok: &Token) -> Result<Option<Node>> {
        match tok.kind {
            TokenKind::Keyword => self.handle_keyword(tok),
            TokenKind::Ident => self.handle_ident(),
            _ => Ok(None),
        }
    }

    fn handle_keyword(&mut self, tok: &Token) -> Result<Option<Node>> {
        let node = match tok.text.as_str() {
            "import" => Node::Import(self.parse_import()?),
            "region" => Node::Region(self.parse_region()?),
            "class" => Node::Class(self.parse_class(false, "class declaration")?),
            "struct" => Node::Struct(self.parse_class(false, "struct declaration")?),
            "static" => return self.parse_static(),
            "var" => Node::Var(self.parse_var_decl(false, DeclSite::Statement)?),
            "const" => Node::Var(self.parse_var_decl(true, DeclSite::Statement)?),
            "fn" => Node::Fn(self.parse_fn_decl()?),
            "while" => Node::While(self.parse_conditional("while statement")?),
            "if" => Node::If(self.parse_conditional("if statement")?),
            "elseif" => Node::ElseIf(self.parse_conditional("elseif statement")?),
            "else" => Node::Else(self.parse_scope("else statement")?),
            "return" => Node::Return(self.parse_return(tok.line)?),
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    /// One-token lookahead decides between assignment and call.
    fn handle_ident(&mut self) -> Result<Option<Node>> {
        let next = self.tokens.peek();
        if next.is_symbol("=") || next.is_symbol("[") || next.is_operator() {
            self.tokens.back();
            return self.parse_set().map(|s| Some(Node::Set(s)));
        }
        if next.is_symbol("(") {
            self.tokens.back();
            return self.parse_call();
        }
        Ok(None)
    }

    // ======= scopes =======

    /// Brace-depth scope closing shared by every block-bearing construct.
    ///
    /// The opening `{` sets depth 1. Nested `{`/`}` only move the counter; the
    /// `}` that brings it back to 0 closes the block. Everything else goes
    /// through statement dispatch and lands in the block's own children.
    fn parse_scope(&mut self, context: &'static str) -> Result<Body> {
        let open = self.tokens.next();
        if !open.is_symbol("{") {
            return Err(self.expected("'{'", context, &open));
        }
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                line: open.line,
            });
        }

        self.depth += 1;
        let result = self.scope_body(context, &open);
        self.depth -= 1;
        result
    }

    fn scope_body(&mut self, context: &'static str, open: &Token) -> Result<Body> {
        let mut depth = 1usize;
        let mut body = Body::default();
        loop {
            if self.tokens.done() {
                return Err(ParseError::Unterminated {
                    expected: "closing brace '}'",
                    context,
                    line: open.line,
                });
            }
            let tok = self.tokens.next();
            // an unclassifiable token ends the block like end of input
            if tok.is_invalid() {
                return Err(ParseError::Unterminated {
                    expected: "closing brace '}'",
                    context,
                    line: open.line,
                });
            }
            if tok.is_symbol("{") {
                depth += 1;
                continue;
            }
            if tok.is_symbol("}") {
                depth -= 1;
                if depth == 0 {
                    return Ok(body);
                }
            }
            if let Some(node) = self.handle(&tok)? {
                self.add(&mut body, node);
            }
        }
    }

    // ======= declarations =======

    fn parse_import(&mut self) -> Result<Import> {
        let tok = self.tokens.next();
        if tok.kind != TokenKind::LiteralString {
            return Err(self.expected("file name string", "import statement", &tok));
        }
        let file = tok
            .text
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(&tok.text)
            .to_string();
        Ok(Import { file })
    }

    fn parse_region(&mut self) -> Result<Region> {
        let id = self.expect_ident("region")?;
        let body = self.parse_scope("region")?;
        Ok(Region {
            name: id.text,
            body,
        })
    }

    /// `static` marks a class or struct. Before anything else it yields no
    /// node and the following token is dispatched as usual.
    fn parse_static(&mut self) -> Result<Option<Node>> {
        let next = self.tokens.peek();
        if next.is_keyword("class") {
            self.tokens.next();
            let class = self.parse_class(true, "class declaration")?;
            return Ok(Some(Node::Class(class)));
        }
        if next.is_keyword("struct") {
            self.tokens.next();
            let class = self.parse_class(true, "struct declaration")?;
            return Ok(Some(Node::Struct(class)));
        }
        Ok(None)
    }

    fn parse_class(&mut self, is_static: bool, context: &'static str) -> Result<ClassDecl> {
        let id = self.expect_ident(context)?;
        let body = self.parse_scope(context)?;
        Ok(ClassDecl {
            name: id.text,
            is_static,
            body,
        })
    }

    /// `name : @* type ([ size ])? (= init)? ;`
    fn parse_var_decl(&mut self, constant: bool, site: DeclSite) -> Result<VariableDecl> {
        const CONTEXT: &str = "variable declaration";
        let id = self.expect_ident(CONTEXT)?;
        let colon = self.tokens.next();
        if !colon.is_symbol(":") {
            return Err(self.expected("':'", CONTEXT, &colon));
        }
        let (ty, pointer) = self.parse_type(CONTEXT)?;

        let array = if self.tokens.peek().is_symbol("[") {
            self.tokens.next();
            Some(TokenRun::new(self.capture_brackets("array size", id.line)?))
        } else {
            None
        };

        let init = match site {
            DeclSite::Parameter => TokenRun::default(),
            DeclSite::Statement => {
                let tok = self.tokens.next();
                if tok.is_symbol("=") {
                    TokenRun::new(self.capture_statement(CONTEXT, id.line)?)
                } else if tok.is_symbol(";") {
                    TokenRun::default()
                } else {
                    return Err(ParseError::Expected {
                        expected: "';' or '='",
                        context: CONTEXT,
                        line: id.line,
                    });
                }
            }
        };

        Ok(VariableDecl {
            name: id.text,
            ty,
            pointer,
            constant,
            array,
            init,
        })
    }

    /// `fn name ( params ) : @* type { body }`
    fn parse_fn_decl(&mut self) -> Result<FunctionDecl> {
        const CONTEXT: &str = "function declaration";
        let id = self.expect_ident(CONTEXT)?;
        let open = self.tokens.next();
        if !open.is_symbol("(") {
            return Err(self.expected("'('", CONTEXT, &open));
        }

        let mut params = Vec::new();
        loop {
            if self.tokens.done() {
                return Err(ParseError::Unterminated {
                    expected: "')'",
                    context: CONTEXT,
                    line: id.line,
                });
            }
            let tok = self.tokens.next();
            if tok.is_symbol(")") {
                break;
            }
            if tok.is_symbol(",") {
                continue;
            }
            if tok.is_ident() {
                self.tokens.back();
                params.push(self.parse_var_decl(false, DeclSite::Parameter)?);
                continue;
            }
            if tok.is_keyword("const") {
                params.push(self.parse_var_decl(true, DeclSite::Parameter)?);
                continue;
            }
            return Err(self.expected("parameter declaration", CONTEXT, &tok));
        }

        let colon = self.tokens.next();
        if !colon.is_symbol(":") {
            return Err(self.expected("':'", CONTEXT, &colon));
        }
        let (ret_ty, ret_pointer) = self.parse_type(CONTEXT)?;
        let body = self.parse_scope("function body")?;

        Ok(FunctionDecl {
            name: id.text,
            ret_ty,
            ret_pointer,
            params,
            body,
        })
    }

    /// `@* type`: pointer markers then a built-in or user type name.
    fn parse_type(&mut self, context: &'static str) -> Result<(String, usize)> {
        let mut pointer = 0;
        let mut tok = self.tokens.next();
        while tok.is_symbol("@") {
            pointer += 1;
            tok = self.tokens.next();
        }
        if !tok.is_type_name() {
            return Err(self.expected("type name", context, &tok));
        }
        Ok((tok.text, pointer))
    }

    // ======= statements =======

    fn parse_conditional(&mut self, context: &'static str) -> Result<Conditional> {
        let open = self.tokens.next();
        if !open.is_symbol("(") {
            return Err(self.expected("'('", context, &open));
        }
        let condition = TokenRun::new(self.capture_condition(context, open.line)?);
        let body = self.parse_scope(context)?;
        Ok(Conditional { condition, body })
    }

    fn parse_return(&mut self, line: u32) -> Result<Return> {
        let value = TokenRun::new(self.capture_statement("return statement", line)?);
        Ok(Return { value })
    }

    /// `target ([ index ])* op (=)? value ;`
    fn parse_set(&mut self) -> Result<VariableSet> {
        const CONTEXT: &str = "assignment";
        let id = self.expect_ident(CONTEXT)?;

        let mut index = Vec::new();
        while self.tokens.peek().is_symbol("[") {
            self.tokens.next();
            index.push(TokenRun::new(
                self.capture_brackets("index expression", id.line)?,
            ));
        }

        let tok = self.tokens.next();
        if !tok.is_operator() && !tok.is_symbol("=") {
            return Err(ParseError::Expected {
                expected: "assignment operator",
                context: CONTEXT,
                line: id.line,
            });
        }
        let mut op = tok.text;
        // `+` `=` spelled apart still forms `+=`
        if self.tokens.peek().is_symbol("=") {
            self.tokens.next();
            op.push('=');
        }

        let value = TokenRun::new(self.capture_statement(CONTEXT, id.line)?);
        Ok(VariableSet {
            target: id.text,
            index,
            op,
            value,
        })
    }

    /// `callee ( args ) ;` with the arguments kept as one run.
    fn parse_call(&mut self) -> Result<Option<Node>> {
        let id = self.tokens.next();
        if !id.is_ident() {
            return Ok(None);
        }
        self.tokens.next(); // '('
        let mut args = self.capture_statement("call statement", id.line)?;
        if args.last().is_some_and(|t| t.is_symbol(")")) {
            args.pop();
        }
        Ok(Some(Node::Call(Call {
            callee: id.text,
            args: TokenRun::new(args),
        })))
    }

    // ======= token runs =======

    /// Tokens up to the first `;` outside any `()`, `[]` or `{}` nesting.
    /// The `;` is consumed and not captured.
    fn capture_statement(&mut self, context: &'static str, line: u32) -> Result<Vec<Token>> {
        let mut depth = 0i32;
        let mut run = Vec::new();
        loop {
            if self.tokens.done() {
                return Err(ParseError::Unterminated {
                    expected: "';'",
                    context,
                    line,
                });
            }
            let tok = self.tokens.next();
            if tok.is_symbol(";") && depth <= 0 {
                return Ok(run);
            }
            if tok.is_symbol("}") && depth <= 0 {
                // would steal the enclosing scope's closing brace
                return Err(ParseError::Expected {
                    expected: "';'",
                    context,
                    line,
                });
            }
            if is_opener(&tok) {
                depth += 1;
            } else if is_closer(&tok) {
                depth -= 1;
            }
            run.push(tok);
        }
    }

    /// Tokens after `(` up to the matching `)`, which is consumed.
    fn capture_condition(&mut self, context: &'static str, line: u32) -> Result<Vec<Token>> {
        let mut depth = 1usize;
        let mut run = Vec::new();
        loop {
            if self.tokens.done() {
                return Err(ParseError::Unterminated {
                    expected: "')'",
                    context,
                    line,
                });
            }
            let tok = self.tokens.next();
            if tok.is_symbol(";") || tok.is_symbol("{") {
                return Err(ParseError::Expected {
                    expected: "')'",
                    context,
                    line,
                });
            }
            if tok.is_symbol("(") {
                depth += 1;
            } else if tok.is_symbol(")") {
                depth -= 1;
                if depth == 0 {
                    return Ok(run);
                }
            }
            run.push(tok);
        }
    }

    /// Tokens after `[` up to the matching `]`, which is consumed. A `;`
    /// first is fatal.
    fn capture_brackets(&mut self, context: &'static str, line: u32) -> Result<Vec<Token>> {
        let mut depth = 1usize;
        let mut run = Vec::new();
        loop {
            if self.tokens.done() {
                return Err(ParseError::Unterminated {
                    expected: "']'",
                    context,
                    line,
                });
            }
            let tok = self.tokens.next();
            if tok.is_symbol(";") {
                return Err(ParseError::Expected {
                    expected: "']'",
                    context,
                    line,
                });
            }
            if tok.is_symbol("[") {
                depth += 1;
            } else if tok.is_symbol("]") {
                depth -= 1;
                if depth == 0 {
                    return Ok(run);
                }
            }
            run.push(tok);
        }
    }

    // ======= helpers =======

    fn expect_ident(&mut self, context: &'static str) -> Result<Token> {
        let tok = self.tokens.next();
        if tok.is_ident() {
            Ok(tok)
        } else {
            Err(self.expected("identifier", context, &tok))
        }
    }

    fn expected(&self, expected: &'static str, context: &'static str, found: &Token) -> ParseError {
        // the sentinel has no line of its own
        let line = if found.is_invalid() {
            self.tokens.line()
        } else {
            found.line
        };
        ParseError::Expected {
            expected,
            context,
            line,
        }
    }
}

fn is_opener(tok: &Token) -> bool {
    tok.is_symbol("(") || tok.is_symbol("[") || tok.is_symbol("{")
}

fn is_closer(tok: &Token) -> bool {
    tok.is_symbol(")") || tok.is_symbol("]") || tok.is_symbol("}")
}
