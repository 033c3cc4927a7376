#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any input must be handled without panicking.
        let mut lines = s.lines();
        let candidate = lines.next().unwrap_or_default();
        let existing: Vec<&str> = lines.collect();

        let result = praxis::core::validate_with_reason(candidate, &existing);
        let parsed = praxis::core::InvoiceNumber::parse(candidate);
        if result.is_valid() {
            assert!(parsed.is_ok());
        }
    }
});
