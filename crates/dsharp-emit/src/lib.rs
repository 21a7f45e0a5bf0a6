#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Two walks over one tree: declarations for the header, definitions for the
//! source file. Neither walk mutates the tree, so both may run concurrently.

mod compiler;
mod header;
mod source;

pub use compiler::{parameter, parameter_list, type_name, CodeGenerator};
pub use header::HeaderEmitter;
pub use source::SourceEmitter;

use dsharp_ast::ast::Body;
use dsharp_ast::report::Silent;

pub fn emit_header(root: &Body) -> String {
    HeaderEmitter::new(&Silent).perform(root)
}

pub fn emit_source(root: &Body) -> String {
    SourceEmitter::new(&Silent).perform(root)
}
