//! Command handlers for the elfstr CLI.
//!
//! Each submodule handles one subcommand. Loading of the header and the
//! family table is shared here so every command sees the same inputs.

pub mod families;
pub mod generate;
pub mod list;

pub use families::{handle_families_command, FamiliesArgs};
pub use generate::{handle_generate_command, GenerateArgs};
pub use list::{handle_list_command, ListArgs};

use anyhow::{Context as _, Result};
use elfstr_codegen::FamilyTable;
use elfstr_defines::{extract_definitions, resolve, Definitions};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Inputs shared by all commands.
pub struct Context {
    /// Header to read constants from.
    pub input: PathBuf,
    /// Optional JSON family table.
    pub families: Option<PathBuf>,
}

impl Context {
    /// Read the header and resolve every constant in it.
    pub fn load_definitions(&self) -> Result<Definitions> {
        let bytes = fs::read(&self.input)
            .with_context(|| format!("Failed to read header: {}", self.input.display()))?;
        let text = String::from_utf8_lossy(&bytes);

        let raw = extract_definitions(text.lines());
        debug!(path = %self.input.display(), count = raw.len(), "extracted definitions");

        resolve(&raw)
            .with_context(|| format!("Failed to resolve constants in {}", self.input.display()))
    }

    /// The family table from `--families`, or the builtin ELF table.
    pub fn load_families(&self) -> Result<FamilyTable> {
        let Some(path) = &self.families else {
            return Ok(FamilyTable::elf_defaults());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read family table: {}", path.display()))?;
        let table = FamilyTable::from_json(&json)
            .with_context(|| format!("Failed to load family table: {}", path.display()))?;
        debug!(path = %path.display(), families = table.len(), "loaded family table");
        Ok(table)
    }
}
