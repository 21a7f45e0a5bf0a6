use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dsharp_ast::ast::Body;
use dsharp_ast::token::Token;
use dsharp_cli::console::Console;
use dsharp_cli::driver;
use dsharp_parse::{serialize_tokens, tokenize};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dsharp")]
#[command(about = "D#: translate .ds sources into a C++ header and source pair")]
struct Cli {
    /// Print progress messages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a source file into <stem>.h and <stem>.cpp
    Compile {
        /// Path to .ds source file
        file: PathBuf,

        /// Directory for the generated files (default: next to the input)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Also write the token dump to this path
        #[arg(long)]
        tokens: Option<PathBuf>,
    },

    /// Print one generated artifact to stdout
    Emit {
        /// Path to .ds source file
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Target::Header)]
        target: Target,
    },

    /// Print the token stream, one token per line
    Tokens {
        /// Path to .ds source file
        file: PathBuf,
    },

    /// Parse a source file and dump the tree
    Parse {
        /// Path to .ds source file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
    Header,
    Source,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Pretty,
    Json,
}

#[derive(Serialize)]
struct ParseDump<'a> {
    file: String,
    tokens: usize,
    tree: &'a Body,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = Console::new(cli.verbose);

    let result = match cli.command {
        Commands::Compile {
            file,
            out_dir,
            tokens,
        } => cmd_compile(&file, out_dir.as_deref(), tokens.as_deref(), &console),
        Commands::Emit { file, target } => cmd_emit(&file, target, &console),
        Commands::Tokens { file } => cmd_tokens(&file),
        Commands::Parse { file, format } => cmd_parse(&file, format, &console),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.fatal(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn load_tokens(file: &Path) -> Result<Vec<Token>> {
    let src = driver::read_source(file)?;
    tokenize(&src).with_context(|| format!("failed to tokenize '{}'", file.display()))
}

fn cmd_compile(
    file: &Path,
    out_dir: Option<&Path>,
    tokens: Option<&Path>,
    console: &Console,
) -> Result<()> {
    if let Some(dump) = tokens {
        let tokens = load_tokens(file)?;
        std::fs::write(dump, serialize_tokens(&tokens))
            .with_context(|| format!("failed to write '{}'", dump.display()))?;
    }
    let (header, source) = driver::compile_file(file, out_dir, console)?;
    println!("{}", header.display());
    println!("{}", source.display());
    Ok(())
}

fn cmd_emit(file: &Path, target: Target, console: &Console) -> Result<()> {
    let src = driver::read_source(file)?;
    let stem = driver::stem(file)?;
    let artifacts = driver::compile_str(&src, &stem, console)
        .with_context(|| format!("failed to compile '{}'", file.display()))?;
    match target {
        Target::Header => print!("{}", artifacts.header),
        Target::Source => print!("{}", artifacts.source),
    }
    Ok(())
}

fn cmd_tokens(file: &Path) -> Result<()> {
    let tokens = load_tokens(file)?;
    print!("{}", serialize_tokens(&tokens));
    Ok(())
}

fn cmd_parse(file: &Path, format: Format, console: &Console) -> Result<()> {
    let tokens = load_tokens(file)?;
    let count = tokens.len();
    let tree = driver::parse(tokens, console)
        .with_context(|| format!("failed to parse '{}'", file.display()))?;

    match format {
        Format::Pretty => {
            for node in tree.iter() {
                println!("{node}");
            }
        }
        Format::Json => {
            let dump = ParseDump {
                file: file.display().to_string(),
                tokens: count,
                tree: &tree,
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}
