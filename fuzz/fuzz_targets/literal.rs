#![no_main]

use elfstr_defines::Literal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(literal) = Literal::classify(data) {
        // Integer and character literals always carry a value
        match literal {
            Literal::Int(_) | Literal::Char(_) => assert!(literal.integer().is_some()),
            Literal::Str(_) | Literal::Alias(_) => assert!(literal.integer().is_none()),
        }
    }
});
