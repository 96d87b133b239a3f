use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, builder::RangedU64ValueParser};
use safecalc::{DEFAULT_MAX_DEPTH, EvalError, EvalOptions, MAX_DEPTH_LIMIT, Number,
               evaluate_with_options, parse_with_limit};
use tracing_subscriber::{EnvFilter, fmt};

/// safecalc evaluates arithmetic expressions without ever executing code.
///
/// Supports integers and reals, `+ - * / // % **`, prefix signs and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum nesting of parentheses and signs, and maximum expression tree
    /// height.
    #[arg(long,
          env = "SAFECALC_MAX_DEPTH",
          default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_LIMIT as u64))]
    max_depth: usize,

    /// Print the parsed expression tree before evaluating it.
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate. Several words are joined with spaces. Starts an
    /// interactive session when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the log level; warnings only by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let options = EvalOptions { max_depth: args.max_depth,
                                ..EvalOptions::default() };

    if args.expression.is_empty() {
        repl(&options, args.debug_parse);
        return ExitCode::SUCCESS;
    }

    let source = args.expression.join(" ");
    match run(&source, &options, args.debug_parse) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads expressions line by line until a quit command or end of input.
fn repl(options: &EvalOptions, debug_parse: bool) {
    println!("Simple calculator. Type 'exit' or 'quit' to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("calc> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error writing prompt: {e}");
            return;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading line from stdin: {e}");
                return;
            },
            None => {
                println!("\nGoodbye.");
                return;
            },
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_quit_command(input) {
            println!("Goodbye.");
            return;
        }

        match run(input, options, debug_parse) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn is_quit_command(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "exit" | "quit" | "q")
}

fn run(source: &str, options: &EvalOptions, debug_parse: bool) -> Result<Number, EvalError> {
    if debug_parse {
        let tree = parse_with_limit(source, options.max_depth)?;
        println!("=== Parsed tree ===");
        println!("{tree}");
    }

    evaluate_with_options(source, options)
}
