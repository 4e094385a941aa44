//! Whole-file generation.
//!
//! Functions are emitted in family-table order. Each function ends with a
//! newline and consecutive functions are separated by one blank line.

use crate::emit::{Emitter, Language};
use crate::family::FamilyTable;
use crate::group::group_by_value;
use elfstr_defines::Definitions;
use tracing::{debug, warn};

/// Generate the lookup functions for every family in `table`.
pub fn generate(table: &FamilyTable, defs: &Definitions, language: Language) -> String {
    generate_with(table, defs, language.emitter().as_ref())
}

/// Generate with a caller-supplied emitter.
pub fn generate_with(table: &FamilyTable, defs: &Definitions, emitter: &dyn Emitter) -> String {
    let mut output = String::new();

    for family in table {
        let groups = group_by_value(defs.with_prefix(&family.prefix));
        if groups.is_empty() {
            warn!(
                prefix = %family.prefix,
                name = %family.name,
                "no definitions match family"
            );
        } else {
            debug!(
                name = %family.name,
                values = groups.len(),
                "generating lookup function"
            );
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&emitter.function(family, &groups));
    }

    output
}
