use dsharp_ast::token::{Token, INVALID};

/// Cursor over an owned token sequence.
///
/// Reads past the end yield the `Invalid` sentinel and leave the cursor where
/// it is. `back` must not be called at position 0, nor twice in a row.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    rewound: bool,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            rewound: false,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        self.rewound = false;
        match self.tokens.get(self.pos) {
            Some(tok) => {
                self.pos += 1;
                tok.clone()
            }
            None => INVALID.clone(),
        }
    }

    pub fn peek(&self) -> &Token {
        self.peek_at(self.pos)
    }

    pub fn peek_at(&self, at: usize) -> &Token {
        self.tokens.get(at).unwrap_or(&INVALID)
    }

    pub fn back(&mut self) {
        debug_assert!(self.pos > 0, "token stream rewound at position 0");
        debug_assert!(!self.rewound, "token stream rewound twice without a read");
        self.pos = self.pos.saturating_sub(1);
        self.rewound = true;
    }

    pub fn done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Line of the most recently consumed token, for end-of-input diagnostics.
    pub fn line(&self) -> u32 {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.line)
    }
}
