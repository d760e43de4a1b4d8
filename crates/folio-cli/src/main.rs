//! `folio` entry point.
//!
//! Usage:
//!   folio                        # Interactive session
//!   folio -c "ls projects"       # Run one line and exit
//!   folio --complete "cd pro"    # Print tab completion and exit
//!   folio --json ...             # Emit results as JSON lines (completions carry a hint)

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_cli::{
    run_repl, write_completion, write_completion_json, write_json, write_result, CliError, Session,
};
use folio_core::config::HOME_DIR;
use folio_core::VirtualFs;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Portfolio terminal over a read-only virtual filesystem.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short, long, conflicts_with = "complete")]
    command: Option<String>,

    /// Print tab completion for a partial line and exit
    #[arg(long)]
    complete: Option<String>,

    /// Working directory to start in
    #[arg(long, default_value = HOME_DIR)]
    cwd: String,

    /// Emit command results as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).without_time().compact())
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!(?cli, "parsed arguments");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut session = Session::with_dir(VirtualFs::portfolio(), &cli.cwd)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(partial) = cli.complete {
        let result = session.complete(&partial);
        if cli.json {
            write_completion_json(&mut out, &result, session.hint(&partial))?;
        } else {
            write_completion(&mut out, &result)?;
        }
        out.flush()?;
        return Ok(());
    }

    if let Some(line) = cli.command {
        let result = session.submit(&line);
        if cli.json {
            write_json(&mut out, &result, session.current_dir())?;
        } else {
            write_result(&mut out, &result)?;
        }
        out.flush()?;
        return Ok(());
    }

    run_repl(&mut session, io::stdin().lock(), &mut out, cli.json)?;
    out.flush()?;
    Ok(())
}
