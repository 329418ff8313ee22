// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{io::{self, Write}, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use blunt::{parse, print_tree, Lexer, ParseError};
use blunt_interpreter::{ErrorPrinter, EvalResult, Halt, Interpreter};
use clap::error::ErrorKind;
use colored::Colorize;
use logger::Logger;

const USAGE: &str = "Usage: blunt <filename> [-v] [-l]";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    file: PathBuf,

    /// Trace lexing, parsing and evaluation to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Print the tokens of the file instead of running it
    #[arg(short, long)]
    lex: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;

        match Self::try_parse() {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
            Err(..) => {
                println!("{USAGE}");
                exit(1);
            }
        }
    }
}

fn main() {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    let source_code = match read_file(&args.file) {
        Ok(source_code) => source_code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{e:#}").bold());
            exit(1);
        }
    };

    if args.lex {
        let status = print_tokens(&mut io::stdout(), &args.file, &source_code)
            .unwrap_or_else(|e| {
                eprintln!("{}: {}", "error".red().bold(), format!("Failed to write tokens: {e}").bold());
                1
            });
        exit(status);
    }

    exit(interpret(&args.file, &source_code));
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Error opening file: {}", path.display()))
}

/// Writes one `TOKEN(kind, text)` line per token, ending with the end-of-file token.
fn print_tokens(output: &mut impl Write, path: &Path, source_code: &str) -> io::Result<i32> {
    for token in Lexer::new(source_code) {
        match token {
            Ok(token) => writeln!(output, "TOKEN({}, {})", token.kind.name(), token.text)?,
            Err(e) => {
                ErrorPrinter::new(path, source_code, "LexicalError", &e)
                    .location(e.location)
                    .print();
                return Ok(1);
            }
        }
    }

    Ok(0)
}

fn interpret(path: &Path, source_code: &str) -> i32 {
    let tree = match parse(source_code) {
        Ok(tree) => tree,
        Err(e) => {
            print_parse_error(path, source_code, &e);
            return 1;
        }
    };

    print_tree(&tree);

    let mut interpreter = Interpreter::new(io::stdout());
    let result = interpreter.execute_tree(&tree);

    if let Err(Halt::Error(e)) = &result {
        ErrorPrinter::new(path, source_code, e.category().as_ref(), e).print();
    }

    exit_code(&result)
}

/// `exit()` ends the program as successfully as reaching the end of the file does.
fn exit_code(result: &EvalResult<()>) -> i32 {
    match result {
        Ok(()) | Err(Halt::Exit) => 0,
        Err(Halt::Error(..)) => 1,
    }
}

fn print_parse_error(path: &Path, source_code: &str, error: &ParseError) {
    let hint = match error {
        ParseError::ExpectedToken { expected, .. } => Some(format!("insert {expected} here")),
        _ => None,
    };

    ErrorPrinter::new(path, source_code, error.category(), error)
        .location(error.location())
        .hint(hint)
        .print();
}
