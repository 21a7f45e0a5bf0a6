use std::fmt;

/// Failures raised while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A string or char literal reached end of input.
    UnterminatedLiteral { quote: char, line: u32 },
    /// A character that starts no token.
    UnexpectedChar { ch: char, line: u32 },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedLiteral { line, .. } | LexError::UnexpectedChar { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedLiteral { quote, line } => {
                let what = if *quote == '"' { "string" } else { "char" };
                write!(f, "expected {quote} for {what} literal at line {line}")
            }
            LexError::UnexpectedChar { ch, line } => {
                write!(f, "unexpected character {ch:?} at line {line}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Fatal parse diagnostics. The first one aborts the whole parse; no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required token was missing or had the wrong classification.
    Expected {
        expected: &'static str,
        context: &'static str,
        line: u32,
    },
    /// Input ended while a scope, list, bound or expression was still open.
    Unterminated {
        expected: &'static str,
        context: &'static str,
        line: u32,
    },
    /// Blocks nested deeper than the parser's limit.
    TooDeep { limit: usize, line: u32 },
    Lex(LexError),
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Expected { line, .. }
            | ParseError::Unterminated { line, .. }
            | ParseError::TooDeep { line, .. } => *line,
            ParseError::Lex(e) => e.line(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Expected {
                expected,
                context,
                line,
            } => write!(f, "expected {expected} for {context} at line {line}"),
            ParseError::Unterminated {
                expected,
                context,
                line,
            } => write!(
                f,
                "expected {expected} for {context} at line {line} (reached end of input)"
            ),
            ParseError::TooDeep { limit, line } => {
                write!(f, "maximum nesting depth of {limit} exceeded at line {line}")
            }
            ParseError::Lex(e) => write!(f, "lexer error: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}
