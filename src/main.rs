use std::io::{self, BufRead};

use abacus::{
    calculate,
    config::{Config, DEFAULT_ERROR_TEXT, DEFAULT_MAX_INPUT_LEN},
    interpreter::input::buffer::InputBuffer,
    util::num::format_number,
};
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// abacus is a keypad calculator: type digits, `.`, `+ - * /`, `=` to
/// evaluate, `c` to clear and `<` to delete the last key.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The most tokens the input may hold.
    #[arg(short, long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_len: usize,

    /// Text shown after a division by zero.
    #[arg(short, long, default_value = DEFAULT_ERROR_TEXT)]
    error_text: String,

    /// Treat the argument as a whole expression and print its result.
    #[arg(short = 'x', long)]
    expression: bool,

    /// Log more (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Keys to press. Standard input is read line by line when omitted.
    keys: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    if args.expression {
        let Some(source) = args.keys else {
            eprintln!("An expression is required with --expression.");
            std::process::exit(2);
        };
        match calculate(&source) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let config = Config { max_input_len: args.max_len,
                          error_text:    args.error_text, };
    let mut buffer = InputBuffer::new(config);

    if let Some(keys) = args.keys {
        if let Err(e) = buffer.replay(&keys) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        println!("{buffer}");
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = line.unwrap_or_else(|e| {
                           eprintln!("Failed to read standard input: {e}");
                           std::process::exit(1);
                       });
        if let Err(e) = buffer.replay(&line) {
            eprintln!("{e}");
            continue;
        }
        println!("{buffer}");
    }
}
