//! # elfstr-defines
//!
//! Constant extraction and resolution for C headers such as `elf.h`.
//!
//! This crate provides:
//! - An extractor for simple object-like `#define NAME VALUE` lines
//! - Literal classification (decimal, hex, character, string, alias)
//! - Alias resolution with cycle detection
//! - Ordered collections of raw and resolved definitions
//!
//! # Example
//!
//! ```
//! use elfstr_defines::parse_header;
//!
//! let defs = parse_header(
//!     "#define ET_NONE 0\n\
//!      #define ET_REL 1\n\
//!      #define ET_NULL ET_NONE\n",
//! )
//! .unwrap();
//!
//! assert_eq!(defs.get("ET_NULL").map(|d| d.value), Some(0));
//! ```

pub mod definition;
pub mod error;
pub mod extract;
pub mod literal;
pub mod resolve;

pub use definition::{Definition, Definitions, RawDefinition};
pub use error::{LiteralError, ResolveError, ResolveResult};
pub use extract::{extract_definitions, parse_define};
pub use literal::Literal;
pub use resolve::resolve;

/// Extract and resolve every definition in a header's text.
pub fn parse_header(text: &str) -> ResolveResult<Definitions> {
    let raw = extract_definitions(text.lines());
    resolve(&raw)
}
