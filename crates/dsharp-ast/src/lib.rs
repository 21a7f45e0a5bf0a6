#![forbid(unsafe_code)]
#![deny(unused_must_use)]

pub mod ast;
pub mod grammar;
pub mod token;

pub mod report {
    //! Progress sink handed to the parser and the emitters.
    //!
    //! Fatal conditions are not reported here; they travel as error values.

    pub trait Reporter {
        fn ok(&self, _msg: &str) {}
        fn info(&self, _msg: &str) {}
    }

    /// Drops every message.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Silent;

    impl Reporter for Silent {}
}
