//! Rust emitter.

use super::{escape_string, known_bits, split_flags, Emitter};
use crate::family::SymbolFamily;
use crate::group::{ValueGroup, LABEL_SEPARATOR};
use std::fmt::Write;

/// Emits Rust functions; value families return `&'static str`, flag
/// families return `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

fn rust_integer(value: i64) -> String {
    if value == i64::MIN {
        "i64::MIN".to_string()
    } else {
        value.to_string()
    }
}

fn write_default_arm(output: &mut String, indent: &str, name: &str) {
    // Braces in the family name would be read as format arguments.
    let name = escape_string(name).replace('{', "{{").replace('}', "}}");
    writeln!(
        output,
        "{}eprintln!(\"Unrecognized {}: {{}}\", v);",
        indent, name
    )
    .unwrap();
}

impl Emitter for RustEmitter {
    fn value_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "pub fn {}(v: i64) -> &'static str {{",
            family.function_name()
        )
        .unwrap();
        writeln!(output, "    match v {{").unwrap();
        for group in groups {
            writeln!(
                output,
                "        {} => \"{}\",",
                rust_integer(group.value),
                escape_string(&group.label())
            )
            .unwrap();
        }
        writeln!(output, "        _ => {{").unwrap();
        write_default_arm(&mut output, "            ", &family.name);
        writeln!(output, "            std::process::exit(1)").unwrap();
        writeln!(output, "        }}").unwrap();
        writeln!(output, "    }}").unwrap();
        writeln!(output, "}}").unwrap();

        output
    }

    fn flags_function(&self, family: &SymbolFamily, groups: &[ValueGroup]) -> String {
        let (zero, flags) = split_flags(groups);

        let mut output = String::new();
        writeln!(output, "pub fn {}(v: i64) -> String {{", family.function_name()).unwrap();
        writeln!(output, "    let bits = v as u64;").unwrap();
        writeln!(output, "    if bits == 0 {{").unwrap();
        writeln!(
            output,
            "        return String::from(\"{}\");",
            escape_string(&zero)
        )
        .unwrap();
        writeln!(output, "    }}").unwrap();
        writeln!(output, "    if bits & !{:#x}_u64 != 0 {{", known_bits(&flags)).unwrap();
        write_default_arm(&mut output, "        ", &family.name);
        writeln!(output, "        std::process::exit(1);").unwrap();
        writeln!(output, "    }}").unwrap();
        writeln!(output, "    let mut names: Vec<&str> = Vec::new();").unwrap();
        for group in &flags {
            writeln!(output, "    if bits & {:#x}_u64 != 0 {{", group.value as u64).unwrap();
            writeln!(
                output,
                "        names.push(\"{}\");",
                escape_string(&group.label())
            )
            .unwrap();
            writeln!(output, "    }}").unwrap();
        }
        writeln!(output, "    names.join(\"{}\")", LABEL_SEPARATOR).unwrap();
        writeln!(output, "}}").unwrap();

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(value: i64, keys: &[&str]) -> ValueGroup {
        ValueGroup {
            value,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_value_function_layout() {
        let family = SymbolFamily::new("ET_", "e_type");
        let code = RustEmitter.value_function(
            &family,
            &[group(0, &["ET_NONE", "ET_NULL"]), group(1, &["ET_REL"])],
        );
        let expected = "\
pub fn str_e_type(v: i64) -> &'static str {
    match v {
        0 => \"ET_NONE | ET_NULL\",
        1 => \"ET_REL\",
        _ => {
            eprintln!(\"Unrecognized e_type: {}\", v);
            std::process::exit(1)
        }
    }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_min_value() {
        let family = SymbolFamily::new("X_", "x");
        let code = RustEmitter.value_function(&family, &[group(i64::MIN, &["X_MIN"])]);
        assert!(code.contains("        i64::MIN => \"X_MIN\",\n"));
    }

    #[test]
    fn test_flags_function() {
        let family = SymbolFamily::flags("PF_", "p_flags");
        let code = RustEmitter.flags_function(
            &family,
            &[group(1, &["PF_X"]), group(2, &["PF_W"]), group(0xf000_0000, &["PF_MASKPROC"])],
        );
        assert!(code.starts_with("pub fn str_p_flags(v: i64) -> String {\n"));
        assert!(code.contains("    if bits & !0xf0000003_u64 != 0 {\n"));
        assert!(code.contains("    if bits & 0xf0000000_u64 != 0 {\n        names.push(\"PF_MASKPROC\");\n"));
        assert!(code.contains("        return String::from(\"\");\n"));
        assert!(code.ends_with("    names.join(\" | \")\n}\n"));
    }
}
