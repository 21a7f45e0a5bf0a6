//! Classification tables shared by the lexer, the parser and both emitters.
//!
//! Every list is fixed. `TYPES` and `OUTPUT_TYPES` are correlated by index:
//! the built-in name at position `i` is spelled `OUTPUT_TYPES[i]` in C++.

pub const KEYWORDS: &[&str] = &[
    "import", "class", "struct", "enum", "const", "static", "region", "fn", "var", "break",
    "continue", "return", "this", "typeof", "if", "elseif", "else", "for", "foreach", "while",
    "null",
];

pub const TYPES: &[&str] = &[
    "byte", "char", "short", "ushort", "int", "uint", "long", "ulong", "float", "double", "bool",
    "void",
];

pub const OUTPUT_TYPES: &[&str] = &[
    "uint8_t", "int8_t", "int16_t", "uint16_t", "int32_t", "uint32_t", "int64_t", "uint64_t",
    "float", "double", "bool", "void",
];

pub const COMPARATORS: &[&str] = &["==", "!=", ">=", "<=", ">", "<"];

// Compound spellings come first so a longest-match scan never splits them.
pub const OPERATORS: &[&str] = &[
    "+=", "-=", "*=", "/=", "|=", "^=", "&=", "<<=", ">>=", "+", "-", "*", "/", "|", "^", "&",
    "<<", ">>", "!", "%",
];

pub const SYMBOLS: &[&str] = &["(", ")", "[", "]", "{", "}", ":", ";", ",", "@"];

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

pub fn is_type(s: &str) -> bool {
    TYPES.contains(&s)
}

pub fn is_comparator(s: &str) -> bool {
    COMPARATORS.contains(&s)
}

pub fn is_operator(s: &str) -> bool {
    OPERATORS.contains(&s)
}

/// `=` is a symbol even though it is not part of `SYMBOLS`.
pub fn is_symbol(s: &str) -> bool {
    s == "=" || SYMBOLS.contains(&s)
}

pub fn is_bool(s: &str) -> bool {
    s == "true" || s == "false"
}

pub fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.parse::<i32>().is_ok()
}

pub fn is_hex(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn is_binary(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b == b'0' || b == b'1')
}

/// `1.5f`, `2F`: a number with a trailing `f`.
pub fn is_float(s: &str) -> bool {
    let Some(body) = s.strip_suffix('f').or_else(|| s.strip_suffix('F')) else {
        return false;
    };
    starts_with_digit(body) && body.parse::<f32>().is_ok()
}

/// `1.5`, `1e9`, `3d`: anything `f64` accepts, with an optional trailing `d`.
pub fn is_double(s: &str) -> bool {
    let body = s.strip_suffix('d').unwrap_or(s);
    starts_with_digit(body) && body.parse::<f64>().is_ok()
}

fn starts_with_digit(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

pub fn type_index(s: &str) -> Option<usize> {
    TYPES.iter().position(|t| *t == s)
}

/// Target spelling of a type name; user types pass through unchanged.
pub fn convert_type(s: &str) -> &str {
    match type_index(s) {
        Some(i) => OUTPUT_TYPES[i],
        None => s,
    }
}
