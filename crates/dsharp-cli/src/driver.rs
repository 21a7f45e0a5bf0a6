//! File-level pipeline: read, tokenize, parse, emit both artifacts.

use anyhow::{bail, Context, Result};
use dsharp_ast::ast::Body;
use dsharp_ast::report::Reporter;
use dsharp_ast::token::Token;
use dsharp_emit::{CodeGenerator, HeaderEmitter, SourceEmitter};
use dsharp_parse::{tokenize, ParseError, Parser};
use std::path::{Path, PathBuf};

/// Maximum source file size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

pub struct Artifacts {
    pub header: String,
    pub source: String,
}

pub fn read_source(path: &Path) -> Result<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

pub fn parse(tokens: Vec<Token>, reporter: &dyn Reporter) -> Result<Body, ParseError> {
    Parser::new(tokens, reporter).parse()
}

/// Header gets an include guard; source includes `<stem>.h`.
pub fn compile_str(
    src: &str,
    stem: &str,
    reporter: &dyn Reporter,
) -> Result<Artifacts, ParseError> {
    let tokens = tokenize(src)?;
    reporter.ok(&format!("Tokenizer produced {} tokens", tokens.len()));
    let tree = parse(tokens, reporter)?;
    Ok(emit(&tree, stem, reporter))
}

pub fn emit(tree: &Body, stem: &str, reporter: &dyn Reporter) -> Artifacts {
    let header = HeaderEmitter::new(reporter).perform(tree);
    let source = SourceEmitter::new(reporter).perform(tree);
    Artifacts {
        header: format!("#pragma once\n{header}"),
        source: format!("#include \"{stem}.h\"\n{source}"),
    }
}

pub fn stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name", path.display()))
}

/// Compile `input` and write `<stem>.h` / `<stem>.cpp` into `out_dir`
/// (default: next to the input). Returns the written paths.
pub fn compile_file(
    input: &Path,
    out_dir: Option<&Path>,
    reporter: &dyn Reporter,
) -> Result<(PathBuf, PathBuf)> {
    let src = read_source(input)?;
    let stem = stem(input)?;
    let artifacts = compile_str(&src, &stem, reporter)?;

    let dir = match out_dir {
        Some(d) => d.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create '{}'", dir.display()))?;
    }
    let header_path = dir.join(format!("{stem}.h"));
    let source_path = dir.join(format!("{stem}.cpp"));
    std::fs::write(&header_path, &artifacts.header)
        .with_context(|| format!("failed to write '{}'", header_path.display()))?;
    std::fs::write(&source_path, &artifacts.source)
        .with_context(|| format!("failed to write '{}'", source_path.display()))?;
    reporter.ok(&format!(
        "Wrote '{}' and '{}'",
        header_path.display(),
        source_path.display()
    ));
    Ok((header_path, source_path))
}
