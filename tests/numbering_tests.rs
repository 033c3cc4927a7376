use std::collections::HashMap;

use praxis::core::*;

const NONE: [&str; 0] = [];

fn invalid(reason: InvoiceNumberError) -> ValidationResult {
    ValidationResult::Invalid(reason)
}

// --- Format ---

#[test]
fn wrong_length_is_invalid_format() {
    for candidate in ["1", "202500001", "20250000011", "2025 000001"] {
        assert_eq!(
            validate_with_reason(candidate, NONE),
            invalid(InvoiceNumberError::InvalidFormat),
            "{candidate}"
        );
    }
}

#[test]
fn non_digits_are_invalid_format() {
    for candidate in ["202500000a", "F202500001", "2025-00001", "+202500001", "2025.00001"] {
        assert_eq!(
            validate_with_reason(candidate, NONE),
            invalid(InvoiceNumberError::InvalidFormat),
            "{candidate}"
        );
    }
}

#[test]
fn zero_sequence_is_invalid_format() {
    for candidate in ["0000000000", "2025000000", "9999000000"] {
        assert_eq!(
            validate_with_reason(candidate, NONE),
            invalid(InvoiceNumberError::InvalidFormat)
        );
    }
}

#[test]
fn blank_is_required() {
    assert_eq!(validate_with_reason("", NONE), invalid(InvoiceNumberError::Required));
    assert_eq!(validate_with_reason("    ", NONE), invalid(InvoiceNumberError::Required));
}

// --- Sequencing ---

#[test]
fn first_invoice() {
    assert_eq!(validate_with_reason("2025000001", NONE), ValidationResult::Valid);
}

#[test]
fn duplicate() {
    assert_eq!(
        validate_with_reason("2025000001", ["2025000001"]),
        invalid(InvoiceNumberError::Duplicate)
    );
}

#[test]
fn next() {
    assert_eq!(
        validate_with_reason("2025000002", ["2025000001"]),
        ValidationResult::Valid
    );
}

#[test]
fn gap_ahead() {
    assert_eq!(
        validate_with_reason("2025000005", ["2025000001"]),
        invalid(InvoiceNumberError::OutOfSequence)
    );
}

#[test]
fn backfill_with_other_year() {
    assert_eq!(
        validate_with_reason("2024000003", ["2025000005"]),
        ValidationResult::Valid
    );
}

#[test]
fn year_rollover_continues_sequence() {
    let existing = ["2024000001", "2024000002", "2024000003"];
    assert!(validate("2025000004", existing));
    assert_eq!(
        validate_with_reason("2025000001", existing),
        invalid(InvoiceNumberError::Duplicate)
    );
}

#[test]
fn malformed_existing_entries_are_ignored() {
    let existing = vec![
        String::from("2025000001"),
        String::from(" 2025000002\n"),
        String::from("F2025000003"),
        String::new(),
        String::from("2025000000"),
    ];
    let validator = InvoiceNumberValidator::from_existing(&existing);
    assert_eq!(validator.max_sequence(), 2);
    assert!(validator.validate("2025000003"));
    assert_eq!(
        validator.validate_with_reason("2025000002"),
        invalid(InvoiceNumberError::Duplicate)
    );
}

#[test]
fn validator_reused_for_several_candidates() {
    let validator = InvoiceNumberValidator::from_existing(["2025000001", "2025000004"]);
    assert_eq!(validator.missing_sequences(), vec![2, 3]);
    assert!(validator.validate("2025000002"));
    assert!(validator.validate("2025000003"));
    assert!(validator.validate("2025000005"));
    assert!(!validator.validate("2025000006"));
}

#[test]
fn reason_is_surfaced_as_code() {
    let result = validate_with_reason("2025000009", ["2025000001"]);
    assert_eq!(
        result.reason().map(|r| r.code()),
        Some("invoice_number_out_of_sequence")
    );
    let err: PraxisError = result.into_result().unwrap_err().into();
    assert!(err.to_string().ends_with("invoice_number_out_of_sequence"));
}

// --- Sequence generator agrees with validator ---

#[test]
fn issued_numbers_always_validate() {
    let mut issued: Vec<String> = vec!["2024000001".into(), "2024000002".into()];
    let mut seq = InvoiceNumberSequence::from_existing(2025, &issued);
    for _ in 0..20 {
        let number = seq.next_number().unwrap();
        assert!(validate(number.as_str(), &issued), "{number}");
        issued.push(number.into_string());
    }
    assert_eq!(issued.last().map(String::as_str), Some("2025000022"));
}

// --- Formatter ---

#[test]
fn formatter_from_env_config() {
    let env = HashMap::from([("INVOICE__PREFIX".to_string(), "RE".to_string())]);
    let config = InvoicingConfig::from_env(&env).unwrap();
    let fmt = InvoiceFormatter::from_config(&config);
    assert_eq!(fmt.format_number("2025000001"), "RE2025000001");
    assert_eq!(fmt.strip_prefix("RE2025000001"), "2025000001");
}

#[test]
fn display_number_roundtrip_through_validator() {
    let fmt = InvoiceFormatter::default();
    let shown = fmt.format_number("2025000002");
    assert_eq!(shown, "F2025000002");
    // User input comes back prefixed; strip before validating.
    assert!(validate(&fmt.strip_prefix(&shown), ["2025000001"]));
    assert!(!validate(&shown, ["2025000001"]));
}

#[test]
fn parsed_number_parts() {
    let number: InvoiceNumber = "2025000123".parse().unwrap();
    assert_eq!(number.year(), 2025);
    assert_eq!(number.sequence(), 123);
    assert_eq!(number.to_string(), "2025000123");
}
