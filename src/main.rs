use std::{fs, path::PathBuf, process::ExitCode};

use aegis::{
    error::Error,
    interpreter::{config::Config, evaluator::core::Interpreter, value::core::Value},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// aegis runs scripts written in the aegis scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script file to run.
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Evaluates the given source instead of a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Maximum number of nested calls before the script is stopped.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Prints the script's final value unless it is null.
    #[arg(short, long)]
    print_result: bool,

    /// Arguments exposed to the script as `ARGV`.
    #[arg(last = true)]
    args: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if let Some(source) = &args.eval {
        source.clone()
    } else {
        let Some(path) = &args.file else {
            eprintln!("No script given");
            return ExitCode::from(1);
        };
        match fs::read_to_string(path) {
            Ok(source) => source,
            Err(source) => {
                let err = Error::Io { path: path.clone(),
                                      source };
                return report(&err);
            },
        }
    };

    let mut config = Config::default();
    if let Some(depth) = args.max_depth {
        config = config.with_max_call_depth(depth);
    }

    let mut interpreter = Interpreter::new().with_config(config);
    match interpreter.run_with_args(&source, &args.args) {
        Ok(value) => {
            if args.print_result && !matches!(value, Value::Null) {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(err) => report(&err),
    }
}

/// Prints an error the way the runner reports it and picks the exit code.
fn report(err: &Error) -> ExitCode {
    eprintln!("{err}");
    match err {
        Error::Io { .. } => ExitCode::from(1),
        Error::Parse(_) => ExitCode::from(2),
        Error::Runtime(runtime) => {
            let trace = runtime.trace();
            if !trace.is_empty() {
                eprintln!("Stack:");
                for frame in trace {
                    eprintln!("  at {frame}()");
                }
            }
            ExitCode::from(3)
        },
    }
}
