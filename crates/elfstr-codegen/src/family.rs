//! Symbol family configuration.
//!
//! A symbol family pairs a key prefix with the name of the function that
//! decodes it. The table is ordered; generated functions follow its order.
//! Tables can be built in code, taken from [`FamilyTable::elf_defaults`], or
//! loaded from JSON:
//!
//! ```json
//! {
//!   "families": [
//!     { "prefix": "ELFCLASS", "name": "ei_class" },
//!     { "prefix": "SHF_", "name": "sh_flags", "kind": "flags" }
//!   ]
//! }
//! ```

use crate::error::{FamilyError, FamilyResult};
use serde::{Deserialize, Serialize};

/// How a family's values are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    /// Each value names exactly one bucket.
    #[default]
    Value,
    /// Values are bit flags combined into a mask.
    Flags,
}

/// A prefix and the function generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolFamily {
    /// Keys starting with this prefix belong to the family.
    pub prefix: String,
    /// Function name suffix; the function is `str_<name>`.
    pub name: String,
    #[serde(default, skip_serializing_if = "is_value_kind")]
    pub kind: FamilyKind,
}

fn is_value_kind(kind: &FamilyKind) -> bool {
    *kind == FamilyKind::Value
}

impl SymbolFamily {
    /// Creates a value family.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            kind: FamilyKind::Value,
        }
    }

    /// Creates a flags family.
    pub fn flags(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: FamilyKind::Flags,
            ..Self::new(prefix, name)
        }
    }

    /// Name of the generated function.
    pub fn function_name(&self) -> String {
        format!("str_{}", self.name)
    }

    fn check(&self, index: usize) -> FamilyResult<()> {
        let reason = if self.prefix.is_empty() {
            "prefix is empty"
        } else if self.name.is_empty() {
            "name is empty"
        } else if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            "name is not an identifier"
        } else {
            return Ok(());
        };

        Err(FamilyError::InvalidFamily {
            index,
            prefix: self.prefix.clone(),
            name: self.name.clone(),
            reason,
        })
    }
}

/// Ordered list of symbol families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyTable {
    pub families: Vec<SymbolFamily>,
}

impl FamilyTable {
    pub fn new(families: Vec<SymbolFamily>) -> Self {
        Self { families }
    }

    /// The families decoded for an ELF dump: identification bytes, file
    /// header, program and section headers, symbols, and x86-64 relocations.
    pub fn elf_defaults() -> Self {
        Self::new(vec![
            SymbolFamily::new("ELFCLASS", "ei_class"),
            SymbolFamily::new("ELFDATA", "ei_data"),
            SymbolFamily::new("EV_", "ei_version"),
            SymbolFamily::new("ELFOSABI", "ei_osabi"),
            SymbolFamily::new("ET_", "e_type"),
            SymbolFamily::new("EM_", "e_machine"),
            SymbolFamily::new("EV_", "e_version"),
            SymbolFamily::new("PT_", "p_type"),
            SymbolFamily::new("SHT_", "sh_type"),
            SymbolFamily::new("STT_", "st_type"),
            SymbolFamily::new("STB_", "st_binding"),
            SymbolFamily::new("STV_", "st_other"),
            SymbolFamily::new("R_X86_64_", "relo_type_x86_64"),
        ])
    }

    pub fn push(&mut self, family: SymbolFamily) {
        self.families.push(family);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolFamily> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Check that every family has a usable prefix and name.
    pub fn validate(&self) -> FamilyResult<()> {
        self.families
            .iter()
            .enumerate()
            .try_for_each(|(index, family)| family.check(index))
    }

    // ==================== Serialization ====================

    /// Load and validate a table from JSON.
    pub fn from_json(json: &str) -> FamilyResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Save the table to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a FamilyTable {
    type Item = &'a SymbolFamily;
    type IntoIter = std::slice::Iter<'a, SymbolFamily>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}
