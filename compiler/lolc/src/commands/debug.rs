//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::read_file;
use crate::report::eprint_report;
use crate::Error;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);

    match lol_lexer::lex(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for tok in &tokens {
                println!("  {:?} @ {}", tok.kind, tok.span);
            }
        }
        Err(e) => {
            eprint_report(&Error::Lex(e), path, &content);
            std::process::exit(1);
        }
    }
}

/// Parse a file and display the AST.
pub fn parse_file(path: &str) {
    let content = read_file(path);

    match crate::parse(&content) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.body.len());
            println!();
            println!("{program:#?}");
        }
        Err(e) => {
            eprint_report(&e, path, &content);
            std::process::exit(1);
        }
    }
}
