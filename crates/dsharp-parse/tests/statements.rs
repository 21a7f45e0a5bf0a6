use dsharp_ast::ast::{Body, Node, VariableSet};
use dsharp_ast::token::{Token, TokenKind};
use dsharp_parse::{parse_str, parse_tokens};

/// Helper: parse a function and return its body
fn fn_body(stmts: &str) -> Body {
    let body = parse_str(&format!("fn f() : void {{ {stmts} }}")).expect("parse ok");
    let Some(Node::Fn(f)) = body.nodes.into_iter().next() else {
        panic!("expected FunctionDecl");
    };
    f.body
}

fn set(stmt: &str) -> VariableSet {
    let body = fn_body(stmt);
    let Node::Set(s) = &body.nodes[0] else {
        panic!("expected VariableSet, got {}", body.nodes[0]);
    };
    s.clone()
}

// ============ Assignment ============

#[test]
fn plain_assignment() {
    let s = set("x = y * 2;");
    assert_eq!(s.target, "x");
    assert_eq!(s.op, "=");
    assert_eq!(s.value.joined(), "y * 2");
    assert!(s.index.is_empty());
}

#[test]
fn compound_operator_token() {
    let s = set("total -= 3;");
    assert_eq!(s.op, "-=");
    assert_eq!(s.value.joined(), "3");
}

#[test]
fn compound_operator_from_split_tokens() {
    // i + = 1 ; handed over as five separate tokens
    let toks = vec![
        Token::new(TokenKind::Ident, 1, "i"),
        Token::new(TokenKind::Operator, 1, "+"),
        Token::new(TokenKind::Symbol, 1, "="),
        Token::new(TokenKind::LiteralDecimal, 1, "1"),
        Token::new(TokenKind::Symbol, 1, ";"),
    ];
    let body = parse_tokens(toks).expect("parse ok");
    let Node::Set(s) = &body.nodes[0] else {
        panic!("expected VariableSet");
    };
    assert_eq!(s.op, "+=");
    assert_eq!(s.value.joined(), "1");
}

#[test]
fn indexed_assignment_keeps_index() {
    let s = set("cells[row * 4 + col] = 0;");
    assert_eq!(s.target, "cells");
    assert_eq!(s.index.len(), 1);
    assert_eq!(s.index[0].joined(), "row * 4 + col");
    assert_eq!(s.op, "=");
    assert_eq!(s.value.joined(), "0");
}

#[test]
fn multi_dimensional_index() {
    let s = set("m[i][j] += k;");
    assert_eq!(s.index.len(), 2);
    assert_eq!(s.index[1].joined(), "j");
    assert_eq!(s.op, "+=");
}

#[test]
fn nested_index_brackets() {
    let s = set("a[b[0]] = 1;");
    assert_eq!(s.index[0].joined(), "b [ 0 ]");
}

// ============ Calls ============

#[test]
fn call_drops_closing_paren() {
    let body = fn_body("print(x, y + 1);");
    let Node::Call(c) = &body.nodes[0] else {
        panic!("expected Call");
    };
    assert_eq!(c.callee, "print");
    assert_eq!(c.args.joined(), "x , y + 1");
}

#[test]
fn call_without_arguments() {
    let body = fn_body("flush();");
    let Node::Call(c) = &body.nodes[0] else {
        panic!("expected Call");
    };
    assert!(c.args.is_empty());
}

#[test]
fn nested_call_arguments_stay_verbatim() {
    let body = fn_body("log(fmt(a), b);");
    let Node::Call(c) = &body.nodes[0] else {
        panic!("expected Call");
    };
    assert_eq!(c.args.joined(), "fmt ( a ) , b");
}

// ============ Control flow ============

#[test]
fn while_condition_and_body() {
    let body = fn_body("while (i < 10) { i += 1; }");
    let Node::While(w) = &body.nodes[0] else {
        panic!("expected While");
    };
    assert_eq!(w.condition.joined(), "i < 10");
    assert_eq!(w.body.len(), 1);
}

#[test]
fn condition_keeps_inner_parentheses() {
    let body = fn_body("if ((a + b) * 2 > c) { }");
    let Node::If(i) = &body.nodes[0] else {
        panic!("expected If");
    };
    assert_eq!(i.condition.joined(), "( a + b ) * 2 > c");
}

#[test]
fn if_elseif_else_are_siblings() {
    let body = fn_body(
        "if (a) { x = 1; } elseif (b) { x = 2; } elseif (c) { x = 3; } else { x = 4; }",
    );
    let tags: Vec<&str> = body.iter().map(Node::tag).collect();
    assert_eq!(tags, vec!["If", "ElseIf", "ElseIf", "Else"]);
    let Node::Else(e) = &body.nodes[3] else {
        panic!("expected Else");
    };
    assert_eq!(e.len(), 1);
}

#[test]
fn return_with_and_without_value() {
    let body = fn_body("return a + b; return;");
    let Node::Return(r) = &body.nodes[0] else {
        panic!("expected Return");
    };
    assert_eq!(r.value.joined(), "a + b");
    let Node::Return(bare) = &body.nodes[1] else {
        panic!("expected Return");
    };
    assert!(bare.value.is_empty());
}

#[test]
fn local_declarations() {
    let body = fn_body("var i:int = 0; const n:int = 8;");
    assert_eq!(body.len(), 2);
    let Node::Var(n) = &body.nodes[1] else {
        panic!("expected VariableDecl");
    };
    assert!(n.constant);
    assert_eq!(n.init.joined(), "8");
}

#[test]
fn stray_tokens_are_skipped() {
    let body = fn_body("; ; x; 42; x = 1;");
    assert_eq!(body.len(), 1);
    assert!(matches!(body.nodes[0], Node::Set(_)));
}
