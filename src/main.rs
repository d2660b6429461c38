use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use morl::{
    analyze, format_error,
    type_checker::{environment::TypeEnv, type_checker::declare_top_level},
    Config,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Front end for the morl language: tokenizes and parses source files.
#[derive(Parser, Debug)]
#[command(name = "morl", version)]
struct Args {
    /// Source files to compile
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the token stream of each file
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements of each file
    #[arg(long)]
    ast: bool,

    /// Deepest allowed nesting of statements and expressions
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::from_default_env()
    };

    fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut config = Config::default();
    if let Some(max_depth) = args.max_depth {
        config.max_nesting_depth = max_depth;
    }

    for file in &args.files {
        let file_name = file.to_string_lossy();

        let source = match read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("morl: error: failed to read {}: {}", file_name, err);
                return ExitCode::FAILURE;
            }
        };

        tracing::info!(file = %file_name, "compiling");
        let start = Instant::now();

        let unit = match analyze(&source, &config) {
            Ok(unit) => unit,
            Err(error) => {
                eprint!("{}", format_error(&error, &source, &file_name));
                return ExitCode::FAILURE;
            }
        };

        tracing::debug!(elapsed = ?start.elapsed(), "front end finished");

        let mut env = TypeEnv::with_capacity(&source, config.type_env_capacity);
        let declared = declare_top_level(&unit.ast, &mut env);
        tracing::debug!(declared, capacity = env.capacity(), "declared top-level symbols");

        if args.tokens {
            for token in &unit.tokens {
                println!(
                    "{} `{}` line: {} | from: {} - to: {}",
                    token.kind,
                    token.lexeme(&source),
                    token.line,
                    token.span.start,
                    token.span.end
                );
            }
        }

        if args.ast {
            for stmt in &unit.ast {
                println!("{:#?}", stmt);
            }
        }
    }

    ExitCode::SUCCESS
}
