use std::{fs, io, process::ExitCode};

use arith::{get_result, parse_source};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `ARITH_LOG=trace`.
const LOG_ENV: &str = "ARITH_LOG";

/// arith runs small C-like programs over 32-bit integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the path of a file to run instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed program instead of running it.
    #[arg(long)]
    ast: bool,

    contents: String,
}

/// Installs a stderr logger when `ARITH_LOG` is set, so program output on
/// stdout stays clean.
fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };

    tracing_subscriber::registry().with(filter)
                                  .with(fmt::layer().with_writer(io::stderr))
                                  .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.ast {
        return match parse_source(&script) {
            Ok(program) => {
                for statement in &program {
                    println!("{statement}");
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = get_result(&script) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
