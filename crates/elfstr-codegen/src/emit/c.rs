//! C emitter.
//!
//! Output has no `#include`s; the including translation unit is expected to
//! provide `<stdio.h>`, `<stdlib.h>` and, for flag families, `<string.h>`.

use super::{escape_string, known_bits, split_flags, Emitter};
use crate::family::SymbolFamily;
use crate::group::{ValueGroup, LABEL_SEPARATOR};
use std::fmt::Write;

/// Emits C functions returning `const char*`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CEmitter;

/// Format a value as a C integer constant expression.
///
/// `i64::MIN` has no literal form in C, since the negation applies to an
/// out-of-range positive literal.
fn c_integer(value: i64) -> String {
    if value == i64::MIN {
        "(-9223372036854775807LL - 1)".to_string()
    } else {
        value.to_string()
    }
}

fn write_default_arm(output: &mut String, indent: &str, name: &str) {
    writeln!(
        output,
        "{}printf(\"Unrecognized {}: %lld\\n\", v);",
        indent,
        escape_string(name)
    )
    .unwrap();
    writeln!(output, "{}exit(1);", indent).unwrap();
}

impl Emitter for CEmitter {
    fn value_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String {
        let mut output = String::new();

        writeln!(output, "const char* {}(long long v)", family.function_name()).unwrap();
        writeln!(output, "{{").unwrap();
        writeln!(output, "    switch (v)").unwrap();
        writeln!(output, "    {{").unwrap();
        for group in groups {
            writeln!(output, "        case {}:", c_integer(group.value)).unwrap();
            writeln!(
                output,
                "            return \"{}\";",
                escape_string(&group.label())
            )
            .unwrap();
        }
        writeln!(output, "        default:").unwrap();
        write_default_arm(&mut output, "            ", &family.name);
        writeln!(output, "    }}").unwrap();
        writeln!(output, "}}").unwrap();

        output
    }

    fn flags_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String {
        let (zero, flags) = split_flags(groups);
        let labels: Vec<String> = flags.iter().map(|g| escape_string(&g.label())).collect();

        // Room for every label, the separators between them, and the NUL.
        let capacity = labels.iter().map(String::len).sum::<usize>()
            + LABEL_SEPARATOR.len() * labels.len().saturating_sub(1)
            + 1;

        let mut output = String::new();
        writeln!(output, "const char* {}(long long v)", family.function_name()).unwrap();
        writeln!(output, "{{").unwrap();
        writeln!(output, "    static char ret[{}];", capacity).unwrap();
        writeln!(output, "    unsigned long long bits = (unsigned long long)v;").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "    if (bits == 0)").unwrap();
        writeln!(output, "        return \"{}\";", escape_string(&zero)).unwrap();
        writeln!(output, "    if (bits & ~{:#x}ULL)", known_bits(&flags)).unwrap();
        writeln!(output, "    {{").unwrap();
        write_default_arm(&mut output, "        ", &family.name);
        writeln!(output, "    }}").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "    ret[0] = '\\0';").unwrap();
        for (group, label) in flags.iter().zip(&labels) {
            writeln!(output, "    if (bits & {:#x}ULL)", group.value as u64).unwrap();
            writeln!(output, "    {{").unwrap();
            writeln!(output, "        if (ret[0] != '\\0')").unwrap();
            writeln!(output, "            strcat(ret, \"{}\");", LABEL_SEPARATOR).unwrap();
            writeln!(output, "        strcat(ret, \"{}\");", label).unwrap();
            writeln!(output, "    }}").unwrap();
        }
        writeln!(output, "    return ret;").unwrap();
        writeln!(output, "}}").unwrap();

        output
    }
}
