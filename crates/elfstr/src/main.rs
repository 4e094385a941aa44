//! elfstr - Generate lookup functions from the constants in elf.h
//!
//! Usage:
//!   elfstr                           Generate elf_strings.h from /usr/include/elf.h
//!   elfstr generate -o - --lang rust Print Rust lookup functions to stdout
//!   elfstr list --prefix EM_         Show resolved EM_* constants
//!   elfstr families > table.json     Dump the family table for editing
//!
//! Exit status is 0 on success, 1 when a file cannot be read or written, and
//! 2 when a constant cannot be resolved.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{FamiliesArgs, GenerateArgs, ListArgs};
use elfstr_defines::ResolveError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Exit status for I/O failures.
const EXIT_IO: u8 = 1;
/// Exit status for constants that cannot be resolved.
const EXIT_RESOLVE: u8 = 2;

#[derive(Parser)]
#[command(name = "elfstr", version)]
#[command(about = "Generate value-to-name lookup functions from C header constants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Header file to read constants from
    #[arg(short, long, global = true, default_value = "/usr/include/elf.h")]
    input: PathBuf,

    /// JSON family table to use instead of the builtin ELF table
    #[arg(short, long, global = true)]
    families: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lookup functions (default)
    Generate(GenerateArgs),
    /// List resolved definitions
    List(ListArgs),
    /// Print the family table as JSON
    Families(FamiliesArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Map a failure to the process exit status.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.chain().any(|cause| cause.is::<ResolveError>()) {
        EXIT_RESOLVE
    } else {
        EXIT_IO
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context {
        input: cli.input,
        families: cli.families,
    };

    match cli.command {
        Some(Commands::Generate(args)) => commands::handle_generate_command(&ctx, &args),
        Some(Commands::List(args)) => commands::handle_list_command(&ctx, &args),
        Some(Commands::Families(args)) => commands::handle_families_command(&ctx, &args),
        None => commands::handle_generate_command(&ctx, &GenerateArgs::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
