use crate::error::LexError;
use dsharp_ast::grammar;
use dsharp_ast::token::{Token, TokenKind};

pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).tokenize()
}

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }

    fn bump(&mut self) -> Option<u8> {
        let b = *self.src.as_bytes().get(self.pos)?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn peek2(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos + 1).copied()
    }

    fn skip_ws_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
                self.bump();
            }
            // line comment: //
            if self.peek() == Some(b'/') && self.peek2() == Some(b'/') {
                while let Some(b) = self.peek() {
                    if b == b'\n' {
                        break;
                    }
                    self.bump();
                }
                continue;
            }
            break;
        }
    }

    /// `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_ws_and_comments();
        let start = self.pos;
        let line = self.line;
        let Some(b) = self.peek() else {
            return Ok(None);
        };

        // single-char symbols
        if matches!(
            b,
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b':' | b';' | b',' | b'@'
        ) {
            self.bump();
            return Ok(Some(self.token(TokenKind::Symbol, line, start)));
        }

        // operators, comparators and '=' by longest match
        if let Some(kind) = self.punct() {
            return Ok(Some(self.token(kind, line, start)));
        }

        if b == b'"' || b == b'\'' {
            return self.quoted(b, line).map(Some);
        }

        if b.is_ascii_alphanumeric() || b == b'_' {
            while self.peek().is_some_and(is_word_byte) {
                self.bump();
            }
            return Ok(Some(classify_word(&self.src[start..self.pos], line)));
        }

        let ch = self.src[start..].chars().next().unwrap_or('\0');
        Err(LexError::UnexpectedChar { ch, line })
    }

    fn punct(&mut self) -> Option<TokenKind> {
        for len in (1..=3).rev() {
            let Some(cand) = self.src.get(self.pos..self.pos + len) else {
                continue;
            };
            let kind = if grammar::is_comparator(cand) {
                TokenKind::Comparator
            } else if grammar::is_operator(cand) {
                TokenKind::Operator
            } else if cand == "=" {
                TokenKind::Symbol
            } else {
                continue;
            };
            for _ in 0..len {
                self.bump();
            }
            return Some(kind);
        }
        None
    }

    /// String and char literals keep their quotes; escapes are kept verbatim.
    fn quoted(&mut self, quote: u8, line: u32) -> Result<Token, LexError> {
        let start = self.pos;
        self.bump();
        loop {
            match self.bump() {
                None => {
                    return Err(LexError::UnterminatedLiteral {
                        quote: quote as char,
                        line,
                    })
                }
                Some(b'\\') => {
                    self.bump();
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        let kind = if quote == b'"' {
            TokenKind::LiteralString
        } else {
            TokenKind::LiteralChar
        };
        Ok(self.token(kind, line, start))
    }

    fn token(&self, kind: TokenKind, line: u32, start: usize) -> Token {
        Token::new(kind, line, &self.src[start..self.pos])
    }
}

// Malformed numbers fall back to identifiers rather than failing.
fn classify_word(word: &str, line: u32) -> Token {
    let kind = if grammar::is_keyword(word) {
        TokenKind::Keyword
    } else if grammar::is_type(word) {
        TokenKind::Type
    } else if grammar::is_bool(word) {
        TokenKind::LiteralBool
    } else if grammar::is_decimal(word) {
        TokenKind::LiteralDecimal
    } else if grammar::is_hex(word) {
        return Token::new(
            TokenKind::LiteralHex,
            line,
            format!("0x{}", word[2..].to_ascii_uppercase()),
        );
    } else if grammar::is_binary(word) {
        TokenKind::LiteralBinary
    } else if grammar::is_float(word) {
        TokenKind::LiteralFloat
    } else if grammar::is_double(word) {
        TokenKind::LiteralDouble
    } else {
        TokenKind::Ident
    };
    Token::new(kind, line, word)
}

fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'.'
}
