use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// End-of-stream sentinel; never produced by the lexer.
    Invalid,
    Ident,
    Keyword,
    Type,
    Operator,
    Comparator,
    Symbol,
    // literals
    LiteralDecimal,
    LiteralHex,
    LiteralBinary,
    LiteralFloat,
    LiteralDouble,
    LiteralBool,
    LiteralChar,
    LiteralString,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "Invalid",
            TokenKind::Ident => "ID",
            TokenKind::Keyword => "Keyword",
            TokenKind::Type => "Type",
            TokenKind::Operator => "Operator",
            TokenKind::Comparator => "Comparator",
            TokenKind::Symbol => "Symbol",
            TokenKind::LiteralDecimal => "LiteralDecimal",
            TokenKind::LiteralHex => "LiteralHex",
            TokenKind::LiteralBinary => "LiteralBinary",
            TokenKind::LiteralFloat => "LiteralFloat",
            TokenKind::LiteralDouble => "LiteralDouble",
            TokenKind::LiteralBool => "LiteralBool",
            TokenKind::LiteralChar => "LiteralChar",
            TokenKind::LiteralString => "LiteralString",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme. `text` is the canonical spelling, used both for
/// table lookups and for verbatim re-emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub text: String,
}

/// Returned by out-of-range stream reads.
pub static INVALID: Token = Token {
    kind: TokenKind::Invalid,
    line: 0,
    text: String::new(),
};

impl Token {
    pub fn new(kind: TokenKind, line: u32, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    pub fn is_keyword(&self, kw: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == kw
    }

    pub fn is_symbol(&self, sym: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == sym
    }

    /// Built-in type name or user type identifier.
    pub fn is_type_name(&self) -> bool {
        matches!(self.kind, TokenKind::Type | TokenKind::Ident)
    }
}

/// An unparsed run of tokens captured for verbatim replay
/// (conditions, initializers, array bounds, call arguments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenRun(Vec<Token>);

impl TokenRun {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token texts joined by single spaces.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TokenRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_joins_with_single_spaces() {
        let run = TokenRun::new(vec![
            Token::new(TokenKind::Ident, 1, "a"),
            Token::new(TokenKind::Operator, 1, "+"),
            Token::new(TokenKind::Ident, 1, "b"),
        ]);
        assert_eq!(run.joined(), "a + b");
        assert_eq!(TokenRun::default().joined(), "");
    }

    #[test]
    fn symbol_checks_kind_and_text() {
        let eq = Token::new(TokenKind::Symbol, 3, "=");
        assert!(eq.is_symbol("="));
        assert!(!eq.is_symbol(";"));
        assert!(!Token::new(TokenKind::Ident, 3, "=").is_symbol("="));
        assert!(INVALID.is_invalid());
    }
}
