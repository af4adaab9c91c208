//! TINY-extended Interpreter Driver
//!
//! Main entry point for the `tiny` command. `run` executes a program on
//! stdin/stdout, `scan` lists the tokens of a file.

use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tiny_common::CompilerError;
use tiny_eval::Interpreter;
use tiny_frontend::ast::format_program;
use tiny_frontend::{Frontend, Token, TokenType};

#[derive(Parser)]
#[command(name = "tiny")]
#[command(about = "TINY-extended interpreter")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze and execute a source file
    Run {
        /// Input source file
        input: PathBuf,

        /// Print the symbol table before running
        #[arg(long)]
        symbols: bool,

        /// Print the annotated syntax tree before running
        #[arg(long)]
        tree: bool,

        /// Print the annotated syntax tree as JSON before running
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print every token of a source file
    Scan {
        /// Input source file
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { input, symbols, tree, json, verbose } => {
            init_logging(verbose);
            run_file(&input, symbols, tree, json)
        }
        Commands::Scan { input, verbose } => {
            init_logging(verbose);
            scan_file(&input)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    }
}

fn read_source(path: &Path) -> Result<String, CompilerError> {
    fs::read_to_string(path).map_err(|e| CompilerError::IoError {
        message: format!("Cannot read {}: {}", path.display(), e),
    })
}

fn run_file(input_path: &Path, symbols: bool, tree: bool, json: bool) -> Result<(), CompilerError> {
    info!("Running {}", input_path.display());
    let source = read_source(input_path)?;

    let (program, symbol_table) = Frontend::analyze_source(&source)?;

    if tree {
        println!("Syntax Tree:");
        print!("{}", format_program(&program));
    }

    if symbols {
        println!("Symbol Table:");
        print!("{}", symbol_table);
    }

    if json {
        let text = serde_json::to_string_pretty(&program).map_err(|e| CompilerError::IoError {
            message: format!("Cannot serialize syntax tree: {}", e),
        })?;
        println!("{}", text);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Interpreter::run_program(&program, &symbol_table, stdin.lock(), stdout.lock())
}

fn scan_file(input_path: &Path) -> Result<(), CompilerError> {
    info!("Scanning {}", input_path.display());
    let source = read_source(input_path)?;

    for token in Frontend::tokenize_source(&source) {
        println!("{}", format_token(&token));
        if matches!(token.token_type, TokenType::Error(_)) {
            break;
        }
    }

    Ok(())
}

/// One line of the scanner listing: `[line] lexeme (Kind)`
fn format_token(token: &Token) -> String {
    format!("[{}] {} ({})", token.line(), token.token_type, token.token_type.kind_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(source: &str) -> Vec<String> {
        Frontend::tokenize_source(source).iter().map(format_token).collect()
    }

    #[test]
    fn test_scan_listing() {
        assert_eq!(
            listing("x := 2.5;\nwrite x"),
            vec![
                "[1] x (ID)",
                "[1] := (Assign)",
                "[1] 2.5 (Num)",
                "[1] ; (SemiColon)",
                "[2] write (Write)",
                "[2] x (ID)",
                "[2] EOF (EndFile)",
            ]
        );
    }

    #[test]
    fn test_cli_parses_run_flags() {
        let cli = Cli::try_parse_from(["tiny", "run", "prog.tiny", "--tree", "--symbols"]).unwrap();
        match cli.command {
            Commands::Run { input, symbols, tree, json, verbose } => {
                assert_eq!(input, PathBuf::from("prog.tiny"));
                assert!(symbols && tree);
                assert!(!json && !verbose);
            }
            Commands::Scan { .. } => panic!("Expected run command"),
        }
    }
}
