//! Source emitters for lookup functions.
//!
//! An [`Emitter`] turns one family's value groups into the text of a single
//! function. Two targets are provided:
//! - [`CEmitter`]: `const char* str_<name>(long long v)` built on `switch`
//! - [`RustEmitter`]: `pub fn str_<name>(v: i64) -> &'static str` built on `match`
//!
//! Both treat an unrecognized value as fatal: the generated function prints a
//! diagnostic naming the family and the value, then exits with status 1.

pub mod c;
pub mod rust;

pub use c::CEmitter;
pub use rust::RustEmitter;

use crate::family::{FamilyKind, SymbolFamily};
use crate::group::ValueGroup;
use std::fmt;
use std::str::FromStr;

/// Renders lookup functions in one target language.
pub trait Emitter {
    /// Function returning the label of the group whose value equals the input.
    fn value_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String;

    /// Function returning the labels of every group whose bits are set in the input.
    fn flags_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String;

    /// Function for a family, chosen by its kind.
    fn function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String {
        match family.kind {
            FamilyKind::Value => self.value_function(family, groups),
            FamilyKind::Flags => self.flags_function(family, groups),
        }
    }
}

/// Target language of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    C,
    Rust,
}

impl Language {
    /// Emitter for this language.
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Self::C => Box::new(CEmitter),
            Self::Rust => Box::new(RustEmitter),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "h" => Ok(Self::C),
            "rust" | "rs" => Ok(Self::Rust),
            _ => Err(format!("unknown language '{}', expected 'c' or 'rust'", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "c"),
            Self::Rust => write!(f, "rust"),
        }
    }
}

/// Escape a string for use inside a double-quoted C or Rust literal.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Split groups into the label for zero and the non-zero flag groups.
pub(crate) fn split_flags(groups: &[ValueGroup]) -> (String, Vec<&ValueGroup>) {
    let zero = groups
        .iter()
        .find(|g| g.value == 0)
        .map(ValueGroup::label)
        .unwrap_or_default();
    let flags = groups.iter().filter(|g| g.value != 0).collect();
    (zero, flags)
}

/// Union of all flag bits.
pub(crate) fn known_bits(flags: &[&ValueGroup]) -> u64 {
    flags.iter().fold(0, |acc, g| acc | g.value as u64)
}
