//! # elfstr-codegen
//!
//! Lookup function generation for resolved header constants.
//!
//! Given a table of symbol families (a key prefix plus an output function
//! name) and the resolved definitions of a header, this crate groups each
//! family's constants by value and emits one function per family mapping a
//! value back to its name, or to `"A | B"` when several names share it.
//!
//! # Example
//!
//! ```
//! use elfstr_codegen::{generate, FamilyTable, Language, SymbolFamily};
//! use elfstr_defines::parse_header;
//!
//! let defs = parse_header("#define ELFCLASS32 1\n#define ELFCLASS64 2\n").unwrap();
//! let table = FamilyTable::new(vec![SymbolFamily::new("ELFCLASS", "ei_class")]);
//!
//! let code = generate(&table, &defs, Language::C);
//! assert!(code.starts_with("const char* str_ei_class(long long v)"));
//! ```

pub mod emit;
pub mod error;
pub mod family;
pub mod generate;
pub mod group;

pub use emit::{CEmitter, Emitter, Language, RustEmitter};
pub use error::{FamilyError, FamilyResult};
pub use family::{FamilyKind, FamilyTable, SymbolFamily};
pub use generate::{generate, generate_with};
pub use group::{group_by_value, ValueGroup};
