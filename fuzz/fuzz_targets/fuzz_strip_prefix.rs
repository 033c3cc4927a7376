#![no_main]

use libfuzzer_sys::fuzz_target;
use praxis::core::InvoiceFormatter;

fuzz_target!(|input: (&str, &str)| {
    let (prefix, number) = input;
    let fmt = InvoiceFormatter::new(prefix);
    let shown = fmt.format_number(number);
    assert_eq!(fmt.strip_prefix(&shown), number);
});
