use crate::token::TokenRun;
use serde::Serialize;
use std::fmt;

/// Ordered child list. The parser's root is a `Body` (the primary body).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Body {
    pub nodes: Vec<Node>,
}

impl Body {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Import(Import),
    Region(Region),
    Class(ClassDecl),
    Struct(ClassDecl),
    Var(VariableDecl),
    Fn(FunctionDecl),
    Set(VariableSet),
    While(Conditional),
    If(Conditional),
    ElseIf(Conditional),
    Else(Body),
    Return(Return),
    Call(Call),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    /// File name without the surrounding quotes.
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub body: Body,
}

/// Shared by `class` and `struct` declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDecl {
    pub name: String,
    pub is_static: bool,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    pub name: String,
    /// Type name as written; built-in names are converted at emission.
    pub ty: String,
    pub pointer: usize,
    pub constant: bool,
    /// `None` when not an array; `Some(empty)` for `x:int[]`.
    pub array: Option<TokenRun>,
    pub init: TokenRun,
}

impl VariableDecl {
    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    pub fn has_init(&self) -> bool {
        !self.init.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: String,
    pub ret_ty: String,
    pub ret_pointer: usize,
    pub params: Vec<VariableDecl>,
    pub body: Body,
}

/// Assignment statement: `target[index]... op value;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSet {
    pub target: String,
    /// One run per bracketed subscript, outermost first.
    pub index: Vec<TokenRun>,
    pub op: String,
    pub value: TokenRun,
}

/// `while`, `if` and `elseif` blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditional {
    pub condition: TokenRun,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub value: TokenRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub callee: String,
    pub args: TokenRun,
}

impl Node {
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Import(_) => "Import",
            Node::Region(_) => "Region",
            Node::Class(_) => "ClassDecl",
            Node::Struct(_) => "StructDecl",
            Node::Var(_) => "VariableDecl",
            Node::Fn(_) => "FunctionDecl",
            Node::Set(_) => "VariableSet",
            Node::While(_) => "While",
            Node::If(_) => "If",
            Node::ElseIf(_) => "ElseIf",
            Node::Else(_) => "Else",
            Node::Return(_) => "Return",
            Node::Call(_) => "Call",
        }
    }

    /// Child list of block-bearing nodes.
    pub fn body(&self) -> Option<&Body> {
        match self {
            Node::Region(r) => Some(&r.body),
            Node::Class(c) | Node::Struct(c) => Some(&c.body),
            Node::Fn(f) => Some(&f.body),
            Node::While(c) | Node::If(c) | Node::ElseIf(c) => Some(&c.body),
            Node::Else(b) => Some(b),
            Node::Import(_) | Node::Var(_) | Node::Set(_) | Node::Return(_) | Node::Call(_) => {
                None
            }
        }
    }
}

// One-line summaries for progress reporting.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14}", self.tag())?;
        match self {
            Node::Import(i) => write!(f, " file:{}", i.file),
            Node::Region(r) => write!(f, " id:{} nodes:{}", r.name, r.body.len()),
            Node::Class(c) | Node::Struct(c) => write!(
                f,
                " id:{} static:{} nodes:{}",
                c.name,
                u8::from(c.is_static),
                c.body.len()
            ),
            Node::Var(v) => write!(
                f,
                " id:{} type:{} pointer:{} const:{} array:{} init:{{ {} }}",
                v.name,
                v.ty,
                v.pointer,
                u8::from(v.constant),
                v.is_array(),
                v.init
            ),
            Node::Fn(func) => write!(
                f,
                " id:{} type:{} args:{} nodes:{}",
                func.name,
                func.ret_ty,
                func.params.len(),
                func.body.len()
            ),
            Node::Set(s) => write!(f, " id:{} op:{} expr:{{ {} }}", s.target, s.op, s.value),
            Node::While(c) | Node::If(c) | Node::ElseIf(c) => {
                write!(f, " expr:{{ {} }} nodes:{}", c.condition, c.body.len())
            }
            Node::Else(b) => write!(f, " nodes:{}", b.len()),
            Node::Return(r) => write!(f, " expr:{{ {} }}", r.value),
            Node::Call(c) => write!(f, " id:{} args:{{ {} }}", c.callee, c.args),
        }
    }
}
