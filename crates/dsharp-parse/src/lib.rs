#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

mod dump;
mod error;
mod lexer;
mod parser;
mod stream;

pub use dump::{serialize_token, serialize_tokens};
pub use error::{LexError, ParseError};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse_str, parse_tokens, Parser, MAX_NESTING_DEPTH};
pub use stream::TokenStream;
