//! Command-line driver for the rlox scanner
//!
//! Usage: `rlox [script]`
//!
//! With a script path, scans the file and prints one token per line. With no
//! arguments, runs an interactive prompt that scans each input line. Exits
//! with 64 on bad usage and 65 when a script contained lexical errors.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;

use rlox::Scanner;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: rlox [script]");
            process::exit(64);
        }
    }
}

fn run_file(path: &str) -> anyhow::Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("reading script '{}'", path))?;

    if run(&source) {
        process::exit(65);
    }
    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        match lines.next() {
            Some(line) => {
                // Error state is per-line in the prompt, never per-session
                run(&line?);
            }
            None => break, // EOF
        }
    }
    Ok(())
}

/// Scans one source buffer, printing tokens to stdout and diagnostics to
/// stderr. Returns whether any lexical error was reported.
fn run(source: &str) -> bool {
    let mut had_error = false;

    let scanner = Scanner::new(source, |err| {
        eprintln!("[line {}] Error: {}", err.line(), err);
        had_error = true;
    });

    for token in scanner.scan_tokens() {
        println!("{}", token);
    }

    had_error
}
