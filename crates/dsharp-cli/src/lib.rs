#![forbid(unsafe_code)]
#![deny(unused_must_use)]

pub mod console;
pub mod driver;
