//! Command-line interface for tokmark
//!
//! Usage:
//!   tokmark render [text]   - render text (or stdin) into the markup string
//!   tokmark tokens [text]   - dump the token stream of text (or stdin) as JSON

use clap::{Arg, Command};
use std::io::Read;
use tokmark::TextParser;

fn main() {
    let matches = Command::new("tokmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering rich social text into markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render text into the markup string")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream as JSON")
                .arg(text_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub)) => {
            let input = read_input(sub.get_one::<String>("text"));
            handle_render_command(&input);
        }
        Some(("tokens", sub)) => {
            let input = read_input(sub.get_one::<String>("text"));
            handle_tokens_command(&input);
        }
        _ => unreachable!(),
    }
}

fn text_arg() -> Arg {
    Arg::new("text")
        .help("Text to process; reads stdin when omitted")
        .index(1)
}

/// Read the positional argument, or all of stdin when it is absent.
fn read_input(text: Option<&String>) -> String {
    match text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            buffer
        }
    }
}

/// Handle the render command
fn handle_render_command(input: &str) {
    let parser = TextParser::new();
    let markup = parser.parse(input).unwrap_or_else(|e| {
        eprintln!("Render error: {}", e);
        std::process::exit(1);
    });

    println!("{}", markup);
}

/// Handle the tokens command
fn handle_tokens_command(input: &str) {
    let parser = TextParser::new();
    let tokens = parser.tokenize(input);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });

    println!("{}", json);
}
