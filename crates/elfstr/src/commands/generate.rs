//! Lookup function generation command.

use super::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use elfstr_codegen::{generate, Language};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_OUTPUT: &str = "elf_strings.h";

/// Options for `elfstr generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// File to write, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Language of the generated functions: "c" or "rust"
    #[arg(short, long, default_value_t = Language::C)]
    pub lang: Language,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            lang: Language::C,
        }
    }
}

/// Generate lookup functions and write them out.
///
/// Everything is generated in memory first, so a failure leaves the output
/// path untouched.
pub fn handle_generate_command(ctx: &Context, args: &GenerateArgs) -> Result<()> {
    let table = ctx.load_families()?;
    let defs = ctx.load_definitions()?;

    let code = generate(&table, &defs, args.lang);

    if args.output == Path::new("-") {
        io::stdout()
            .lock()
            .write_all(code.as_bytes())
            .context("Failed to write to stdout")?;
    } else {
        fs::write(&args.output, &code)
            .with_context(|| format!("Failed to write output: {}", args.output.display()))?;
        info!(
            path = %args.output.display(),
            functions = table.len(),
            bytes = code.len(),
            "wrote lookup functions"
        );
    }

    Ok(())
}
