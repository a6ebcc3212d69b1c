//! LOLCODE CLI.

use lolc::commands::{lex_file, parse_file, run_file, RunOptions};
use lolc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match RunOptions::parse(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: lol run <file.lol> [--max-depth=<n>]");
                std::process::exit(1);
            }
        },
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lol lex <file.lol>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lol parse <file.lol>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("lol {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("LOLCODE interpreter");
    println!();
    println!("Usage: lol <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>     Evaluate a program and print its final value");
    println!("  lex <file>     Show the token stream");
    println!("  parse <file>   Show the syntax tree");
    println!("  help           Show this message");
    println!("  version        Show the version");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>  Fail once function calls nest deeper than n");
    println!();
    println!("Logging: set LOL_LOG (or RUST_LOG), e.g. LOL_LOG=lol_eval=debug");
}
