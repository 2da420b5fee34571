#![no_main]

use libfuzzer_sys::fuzz_target;
use raiz::{diagnose_cpf, mask_cpf, validate_cpf, validate_cpf_with, Strictness};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let valid = validate_cpf(text);
        assert_eq!(valid, diagnose_cpf(text).is_ok());
        if valid {
            assert!(validate_cpf_with(text, Strictness::LengthOnly));
            assert!(validate_cpf(&mask_cpf(text)));
        }
    }
});
