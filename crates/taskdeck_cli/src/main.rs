//! Interactive terminal front end for the taskdeck board.
//!
//! # Responsibility
//! - Wire process arguments, logging and the stdin/stdout session loop.
//! - Keep every board rule inside `taskdeck_core`; this binary only talks
//!   to the registry API.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod render;
mod session;

/// Session-resident task board.
#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Track, sort and complete tasks in an interactive session", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level for the session log file (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rolling log files (defaults to ~/.taskdeck/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Skip log-file initialization entirely
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.no_log {
        init_session_logging(&cli);
    }

    let today = chrono::Local::now().date_naive();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = session::Session::new(stdin.lock(), stdout.lock(), today);
    session.run().context("session IO failed")?;

    log::info!("event=session_end module=cli status=ok");
    Ok(())
}

/// Initializes file logging; a failure degrades to a warning because the
/// board must stay usable without a log file.
fn init_session_logging(cli: &Cli) {
    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => match dirs::home_dir() {
            Some(home) => home.join(".taskdeck").join("logs"),
            None => {
                eprintln!("warning: logging disabled: could not resolve home directory");
                return;
            }
        },
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| taskdeck_core::default_log_level());

    let Some(dir_str) = log_dir.to_str() else {
        eprintln!("warning: logging disabled: log directory path is not valid UTF-8");
        return;
    };

    if let Err(message) = taskdeck_core::init_logging(level, dir_str) {
        eprintln!("warning: logging disabled: {message}");
    }
}
