//! Clexc CLI
//!
//! Tokenize preprocessed C-family source and print the token stream.

use clexc::commands::lex_file;
use clexc::{init_tracing, parse_lex_args};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                print_lex_usage();
                std::process::exit(2);
            }

            let lex = match parse_lex_args(&args[2..]) {
                Ok(lex) => lex,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    print_lex_usage();
                    std::process::exit(e.exit_code());
                }
            };

            if let Err(e) = lex_file(&lex.path, &lex.options) {
                eprintln!("error: {e}");
                std::process::exit(e.exit_code());
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("clexc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_lex_usage() {
    eprintln!("Usage: clexc lex <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --skip-comments   Leave comment tokens out of the output");
    eprintln!("  --json            Print tokens as a JSON array");
    eprintln!("  --deny-illegal    Exit with status 3 if any token is illegal");
    eprintln!();
    eprintln!("Use `-` as <file> to read standard input.");
}

fn print_usage() {
    println!("Clexc (C-family lexical scanner)");
    println!();
    println!("Usage: clexc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize a file and display tokens");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Lex options:");
    println!("  --skip-comments   Leave comment tokens out of the output");
    println!("  --json            Print tokens as a JSON array");
    println!("  --deny-illegal    Exit with status 3 if any token is illegal");
    println!();
    println!("Environment:");
    println!("  RUST_LOG       Enable scanner logging (e.g. RUST_LOG=clex_lexer=trace)");
}
