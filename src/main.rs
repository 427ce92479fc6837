use std::ffi::OsString;

use clap::Parser;
use quicksvc::{AppError, Invocation, decode_program_tokens, split_at_separator};

#[derive(Parser)]
#[command(name = "quicksvc")]
#[command(version)]
#[command(
    about = "Wrap an executable into a systemd service package and install it",
    override_usage = "quicksvc [OPTIONS] -- <PROGRAM> [ARGS]...",
    long_about = None
)]
struct Cli {
    /// Service name (defaults to quicksvc-<program file name>)
    #[arg(short, long)]
    name: Option<String>,
    /// Print the generated unit file and PKGBUILD instead of building
    #[arg(long)]
    dry_run: bool,
    /// Tokens before the separator; only flags are accepted there
    #[arg(hide = true)]
    stray: Vec<OsString>,
}

fn run(cli: Cli, program: Option<Vec<OsString>>) -> Result<(), AppError> {
    let program = program.map(decode_program_tokens).transpose()?;
    let stray = cli.stray.iter().map(|s| s.to_string_lossy().into_owned()).collect();
    let invocation = Invocation { name: cli.name, stray, program };

    if cli.dry_run {
        quicksvc::preview(invocation).map(|_| ())
    } else {
        quicksvc::install(invocation).map(|_| ())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The binary name lands in `flags`, which is what clap expects first.
    let (flags, program) = split_at_separator(std::env::args_os());
    let cli = Cli::parse_from(flags);

    if let Err(e) = run(cli, program) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
