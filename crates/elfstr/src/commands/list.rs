//! Resolved definition listing.

use super::Context;
use anyhow::Result;
use clap::Args;
use elfstr_defines::Definition;

/// Options for `elfstr list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show keys starting with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Show the comment captured from each definition's line
    #[arg(long)]
    pub comments: bool,

    /// Print as JSON
    #[arg(long, conflicts_with = "comments")]
    pub json: bool,
}

/// Print resolved definitions in header order.
pub fn handle_list_command(ctx: &Context, args: &ListArgs) -> Result<()> {
    let defs = ctx.load_definitions()?;
    let prefix = args.prefix.as_deref().unwrap_or("");
    let selected: Vec<&Definition> = defs.with_prefix(prefix).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for def in &selected {
        println!("{}", format_line(def, args.comments));
    }
    Ok(())
}

fn format_line(def: &Definition, comments: bool) -> String {
    let mut line = format!("{:<32} {:>20}  {:#018x}", def.key, def.value, def.value);
    if comments {
        if let Some(comment) = &def.comment {
            line.push_str("  /* ");
            line.push_str(comment);
            line.push_str(" */");
        }
    }
    line
}
