use std::{fs, io::Write};

use brio::{evaluate_with_env, interpreter::value::environment::{EnvRef, Environment}};
use clap::Parser;

/// brio is an easy to use, dynamically-typed scripting language with
/// first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells brio to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a brio script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script source, or a path to it with `--file`. Omit it to start
    /// the REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        run_prompt();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let env = Environment::new().into_ref();
    match evaluate_with_env(&script, &env) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}

/// Runs the interactive prompt. Bindings persist across lines through a
/// shared environment.
fn run_prompt() {
    let env: EnvRef = Environment::new().into_ref();
    let mut input = String::new();
    let stdin = std::io::stdin();

    loop {
        input.clear();
        print!(">> ");
        if let Err(e) = std::io::stdout().flush() {
            eprintln!("Failed flush: {e}");
        }
        match stdin.read_line(&mut input) {
            Ok(0) => {
                println!("\nExited brio repl");
                break;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed read line: {e}");
                continue;
            },
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match evaluate_with_env(line, &env) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
