#![no_main]

use libfuzzer_sys::fuzz_target;
use raiz::{validate_json, FormKind, FormRules};

fuzz_target!(|data: &[u8]| {
    // Malformed payloads must surface as errors, never panics
    if let Ok(text) = std::str::from_utf8(data) {
        let rules = FormRules::default();
        for kind in [FormKind::SoloMother, FormKind::Professional, FormKind::Login] {
            let _ = validate_json(kind, text, &rules);
        }
    }
});
