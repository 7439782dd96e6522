//! jlex CLI
//!
//! Prints the token stream of one source file.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use jlexc::{lex_file, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "jlex", version, about = "Print the tokens of a source file")]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print token kind names instead of integer codes
    #[arg(long)]
    names: bool,

    /// Print a token/error/line count after the tokens
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let options = RenderOptions {
        names: cli.names,
        summary: cli.summary,
    };

    match lex_file(&cli.file, options) {
        Ok(out) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("error: cannot write output: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
