//! Line-oriented token dump for inspection: `LINE:<n>,TYPE:<kind>,VAL:<text>`.
//!
//! Write-only. The text is not escaped, so a dump is not guaranteed to
//! round-trip and no reader is provided.

use dsharp_ast::token::Token;

pub fn serialize_token(tok: &Token) -> String {
    format!("LINE:{},TYPE:{},VAL:{}", tok.line, tok.kind, tok.text)
}

/// One token per line, newline-terminated.
pub fn serialize_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&serialize_token(tok));
        out.push('\n');
    }
    out
}
