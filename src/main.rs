use std::{
    env,
    io::{self, BufRead, Write},
};

use monkey::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::parse,
};

const PROMPT: &str = ">> ";

enum Mode {
    Tokens,
    Ast,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mode = match args.get(1).map(String::as_str) {
        None | Some("--tokens") => Mode::Tokens,
        Some("--ast") => Mode::Ast,
        Some(other) => {
            eprintln!("Unknown argument `{}` (expected --tokens or --ast)", other);
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            return;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("Failed to read input: {}", err);
                return;
            }
            // EOF
            None => return,
        };

        match mode {
            Mode::Tokens => {
                for token in Lexer::new(line) {
                    token.debug();
                }
            }
            Mode::Ast => {
                let (parser, program) = parse(line);
                if parser.has_errors() {
                    for error in parser.diagnostics() {
                        display_error(error);
                    }
                } else {
                    println!("{}", program);
                }
            }
        }
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}: {}", error.get_error_name(), error);
    } else {
        println!(
            "Error: {}: {} ({})",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
}
