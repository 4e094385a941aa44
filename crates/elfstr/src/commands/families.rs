//! Family table inspection.

use super::Context;
use anyhow::Result;
use clap::Args;
use elfstr_codegen::FamilyTable;

/// Options for `elfstr families`.
#[derive(Args, Debug, Clone, Default)]
pub struct FamiliesArgs {
    /// Print the builtin ELF table even when --families is given
    #[arg(long)]
    pub builtin: bool,
}

/// Print the active family table as JSON, in the format `--families` reads.
pub fn handle_families_command(ctx: &Context, args: &FamiliesArgs) -> Result<()> {
    let table = if args.builtin {
        FamilyTable::elf_defaults()
    } else {
        ctx.load_families()?
    };
    println!("{}", table.to_json()?);
    Ok(())
}
