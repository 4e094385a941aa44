#![no_main]

use elfstr_codegen::{generate, FamilyTable, Language};
use elfstr_defines::parse_header;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Resolution errors are expected for malformed headers, panics are not
    match parse_header(&text) {
        Ok(defs) => {
            let table = FamilyTable::elf_defaults();
            let c = generate(&table, &defs, Language::C);
            let rust = generate(&table, &defs, Language::Rust);
            assert_eq!(c.matches("const char* str_").count(), table.len());
            assert_eq!(rust.matches("pub fn str_").count(), table.len());

            // Every resolved key must be findable by its own name
            for def in &defs {
                assert!(defs.get(&def.key).is_some());
            }
        }
        Err(err) => {
            let _ = err.to_string();
        }
    }
});
