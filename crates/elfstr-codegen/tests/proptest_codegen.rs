//! Property-based tests for grouping and code generation.
//!
//! These tests verify that:
//! - Generation is deterministic (byte-identical across runs)
//! - Every distinct value of a family gets exactly one dispatch arm
//! - String constants never appear in generated output
//! - Labels join shared-value keys in header order

use proptest::prelude::*;

use elfstr_codegen::{generate, group_by_value, FamilyTable, Language, SymbolFamily};
use elfstr_defines::parse_header;
use std::collections::HashSet;

// =============================================================================
// Generators
// =============================================================================

/// Generate a header body of `FAM_<n>` defines with small values so that
/// collisions are common.
fn arb_header() -> impl Strategy<Value = (String, Vec<i64>)> {
    prop::collection::vec(0i64..16, 0..24).prop_map(|values| {
        let text = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("#define FAM_{} {}\n", i, v))
            .collect();
        (text, values)
    })
}

fn family_table() -> FamilyTable {
    FamilyTable::new(vec![SymbolFamily::new("FAM_", "fam")])
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Generating twice from the same input is byte-identical.
    #[test]
    fn generation_is_deterministic((text, _) in arb_header(), rust in any::<bool>()) {
        let defs = parse_header(&text).unwrap();
        let language = if rust { Language::Rust } else { Language::C };
        let first = generate(&family_table(), &defs, language);
        let second = generate(&family_table(), &defs, language);
        prop_assert_eq!(first, second);
    }

    /// One case arm per distinct value.
    #[test]
    fn one_arm_per_distinct_value((text, values) in arb_header()) {
        let defs = parse_header(&text).unwrap();
        let code = generate(&family_table(), &defs, Language::C);
        let distinct: HashSet<i64> = values.iter().copied().collect();
        prop_assert_eq!(code.matches("        case ").count(), distinct.len());
        for value in &distinct {
            let arm = format!("        case {}:\n", value);
            prop_assert!(code.contains(&arm));
        }
    }

    /// Groups are ordered by first occurrence and keep header order inside.
    #[test]
    fn groups_follow_first_occurrence((text, values) in arb_header()) {
        let defs = parse_header(&text).unwrap();
        let groups = group_by_value(defs.with_prefix("FAM_"));

        let mut seen = Vec::new();
        for v in &values {
            if !seen.contains(v) {
                seen.push(*v);
            }
        }
        let order: Vec<i64> = groups.iter().map(|g| g.value).collect();
        prop_assert_eq!(order, seen);

        for group in &groups {
            let expected: Vec<String> = values
                .iter()
                .enumerate()
                .filter(|(_, v)| **v == group.value)
                .map(|(i, _)| format!("FAM_{}", i))
                .collect();
            prop_assert_eq!(&group.keys, &expected);
        }
    }

    /// String constants never reach a dispatch table.
    #[test]
    fn strings_never_emitted((text, _) in arb_header(), name in "[a-z]{1,8}") {
        let text = format!("{}#define FAM_STR \"{}\"\n", text, name);
        let defs = parse_header(&text).unwrap();
        let code = generate(&family_table(), &defs, Language::C);
        prop_assert!(!code.contains("FAM_STR"));
    }
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn scenario_two_classes() {
    let defs = parse_header("#define ELFCLASS32 1\n#define ELFCLASS64 2\n").unwrap();
    let table = FamilyTable::new(vec![SymbolFamily::new("ELFCLASS", "ei_class")]);
    let code = generate(&table, &defs, Language::C);

    assert!(code.starts_with("const char* str_ei_class(long long v)\n"));
    assert_eq!(code.matches("        case ").count(), 2);
    assert!(code.contains("        case 1:\n            return \"ELFCLASS32\";\n"));
    assert!(code.contains("        case 2:\n            return \"ELFCLASS64\";\n"));
    assert!(code.contains("printf(\"Unrecognized ei_class: %lld\\n\", v);"));
    assert!(code.contains("exit(1);"));
}

#[test]
fn scenario_shared_value() {
    let defs = parse_header("#define ET_NONE 0\n#define ET_NULL ET_NONE\n").unwrap();
    let table = FamilyTable::new(vec![SymbolFamily::new("ET_", "e_type")]);
    let code = generate(&table, &defs, Language::C);

    assert_eq!(code.matches("        case ").count(), 1);
    assert!(code.contains("        case 0:\n            return \"ET_NONE | ET_NULL\";\n"));
}

#[test]
fn flags_family_from_header() {
    let defs = parse_header(
        "#define PF_X 1\n\
         #define PF_W 2\n\
         #define PF_R 4\n\
         #define PF_MASKOS 0x0ff00000\n\
         #define PF_MASKPROC 0xf0000000\n",
    )
    .unwrap();
    let table = FamilyTable::new(vec![SymbolFamily::flags("PF_", "p_flags")]);
    let code = generate(&table, &defs, Language::C);

    assert!(code.contains("if (bits & ~0xfff00007ULL)"));
    assert!(code.contains("strcat(ret, \"PF_MASKPROC\");"));
}
