//! Tagged stderr output for the command-line driver.

use dsharp_ast::report::Reporter;
use std::fmt::Display;

/// Progress goes to stderr only with `--verbose`; failures always do.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn fatal(&self, err: &dyn Display) {
        eprintln!("[  !!  ] {err}");
    }
}

impl Reporter for Console {
    fn ok(&self, msg: &str) {
        if self.verbose {
            eprintln!("[  OK  ] {msg}");
        }
    }

    fn info(&self, msg: &str) {
        if self.verbose {
            eprintln!("[  >>  ] {msg}");
        }
    }
}
