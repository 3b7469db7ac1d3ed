use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use calc::{
    errors::errors::EvaluatorError, evaluator::evaluator::evaluate, lexer::lexer::tokenize,
    parser::parser::parse, render_error,
};
use clap::Parser;

/// Evaluates arithmetic expressions over `+ - * /` and parentheses
#[derive(Parser)]
#[command(name = "calc", version)]
struct Args {
    /// Expressions to evaluate, one per argument
    expressions: Vec<String>,
    /// Evaluate every non-blank line of a file
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,
    /// Print the token stream of each expression
    #[arg(long, default_value_t = false)]
    tokens: bool,
    /// Print the fully parenthesized form of each expression
    #[arg(long, default_value_t = false)]
    ast: bool,
    /// Print per-stage timings to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// An expression and where it came from, for diagnostics.
struct Source {
    label: String,
    text: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let sources = match collect_sources(&args) {
        Ok(sources) => sources,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;

    for source in sources {
        match run(&args, &source.text) {
            Ok(value) => println!("{} = {}", source.text.trim(), value),
            Err(error) => {
                eprint!("{}", render_error(&error, &source.text, &source.label));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn collect_sources(args: &Args) -> io::Result<Vec<Source>> {
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        let name = path.as_os_str().to_string_lossy();

        return Ok(non_blank_lines(contents.lines().map(String::from), &name));
    }

    if !args.expressions.is_empty() {
        return Ok(args
            .expressions
            .iter()
            .enumerate()
            .map(|(index, text)| Source {
                label: format!("<arg {}>", index + 1),
                text: text.clone(),
            })
            .collect());
    }

    let lines = io::stdin().lock().lines().collect::<io::Result<Vec<String>>>()?;
    Ok(non_blank_lines(lines.into_iter(), "<stdin>"))
}

fn non_blank_lines(lines: impl Iterator<Item = String>, name: &str) -> Vec<Source> {
    lines
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Source {
            label: format!("{}:{}", name, index + 1),
            text: line,
        })
        .collect()
}

fn run(args: &Args, source: &str) -> Result<f64, EvaluatorError> {
    let start = Instant::now();

    let tokens = tokenize(source)?;

    if args.verbose {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    if args.tokens {
        for token in &tokens {
            println!("  {}", token);
        }
    }

    let parse_start = Instant::now();
    let ast = parse(tokens)?;

    if args.verbose {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }

    if args.ast {
        println!("  {}", ast);
    }

    let evaluate_start = Instant::now();
    let value = evaluate(&ast)?;

    if args.verbose {
        eprintln!("Evaluated in {:?}", evaluate_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    Ok(value)
}
