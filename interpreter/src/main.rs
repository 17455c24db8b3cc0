// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context as _;
use clap::Subcommand;
use colored::Colorize;
use logger::Logger;
use sprak::{Lexer, Parser, Program, ReturnTypeChecker, SourceLocation};
use sprak_interpreter::Interpreter;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log everything the pipeline reports.
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program, starting at `main`.
    Run { file: PathBuf },

    /// Parse and verify a program without running it.
    Check { file: PathBuf },

    /// Print the parsed tree.
    Ast { file: PathBuf },
}

fn main() {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    match args.command {
        Commands::Run { file } => run(&file),
        Commands::Check { file } => check(&file),
        Commands::Ast { file } => ast(&file),
    }
}

fn run(path: &Path) {
    let program = parse(path);
    check_return_types(&program);

    let mut interpreter = Interpreter::new(&program, std::io::stdout());
    if interpreter.run().is_err() {
        exit(3);
    }
}

fn check(path: &Path) {
    let program = parse(path);
    check_return_types(&program);
}

fn ast(path: &Path) {
    let program = parse(path);
    println!("{program:#?}");
}

fn check_return_types(program: &Program) {
    if let Err(error) = ReturnTypeChecker::new(program).check() {
        println!("Error while return type checking: {error}");
        exit(2);
    }
}

fn parse(path: &Path) -> Program {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {error:#}", "error".red().bold());
            exit(1);
        }
    };

    let (tokens, errors) = Lexer::new(&source).collect_all();
    for error in &errors {
        print_diagnostic(&source, path, error.location, &error.kind);
    }

    let mut parser = Parser::new(&tokens);
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(error) => {
            let position = error.position().unwrap_or_else(|| end_of_source(&source));
            print_diagnostic(&source, path, position, &error);
            exit(1);
        }
    };

    for diagnostic in parser.diagnostics() {
        print_diagnostic(&source, path, diagnostic.position(), diagnostic);
    }

    if !errors.is_empty() || !parser.diagnostics().is_empty() {
        exit(1);
    }

    program
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn print_diagnostic(source: &str, path: &Path, position: SourceLocation, message: impl std::fmt::Display) {
    eprintln!("{}: {}", "error".red().bold(), message.to_string().bold());
    eprintln!();

    if let Some(line) = source.lines().nth(position.line().saturating_sub(1)) {
        let line_number = position.line().to_string();
        eprintln!("{} {} {}", line_number.blue().bold(), "|".blue().bold(), line);
        eprintln!(
            "{spaces}{caret}",
            spaces = " ".repeat(line_number.len() + 3 + position.column().saturating_sub(1)),
            caret = "^".bright_red().bold(),
        );
    }

    eprintln!("In {}:{}:{}\n", path.display(), position.line(), position.column());
}

/// Where to point when a parse error has no token left to point at.
fn end_of_source(source: &str) -> SourceLocation {
    let line = source.lines().count().max(1);
    let column = source.lines().last().map_or(0, |line| line.chars().count()) + 1;
    SourceLocation::new(line, column)
}
