//! CLI entry point for unixfiles

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;
use unixfiles::{Walker, WalkerConfig, stdout_writer};

#[derive(Parser, Debug)]
#[command(name = "unixfiles")]
#[command(about = "List every non-directory entry under the given paths as a JSON array")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directories to walk, breadth-first, in the order given.
    /// Every argument is a path, including ones that start with `-`.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    paths: Vec<PathBuf>,
}

fn main() {
    let args = Args::command()
        .try_get_matches()
        .and_then(|matches| Args::from_arg_matches(&matches))
        .unwrap_or_else(|e| {
            eprintln!("unixfiles: argument parsing error: {}", e);
            process::exit(1);
        });
    setup_logging();

    if let Err(e) = run(args) {
        eprintln!("unixfiles: error writing output: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> unixfiles::Result<()> {
    let walker = Walker::new(WalkerConfig::from_roots(args.paths));
    let mut writer = stdout_writer();

    writer.begin()?;
    walker.walk(&mut writer)?;
    writer.end()
}

/// Diagnostics go to stderr as bare messages, e.g. `opendir: Permission denied (os error 13)`.
/// `RUST_LOG=unixfiles=debug` adds per-directory and summary lines.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .init();
}
