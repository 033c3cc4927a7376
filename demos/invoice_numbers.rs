use praxis::core::*;

fn main() {
    let config = InvoicingConfig::from_process_env().unwrap_or_default();
    let fmt = InvoiceFormatter::from_config(&config);

    // Numbers already stored for the practice (without display prefix).
    let stored = ["2024000001", "2024000002", "2025000004"];

    // ── 1. Validate user input ────────────────────────────────────────
    println!("=== Validation ===");
    let inputs = ["F2025000005", "F2025000003", "F2025000004", "F2025000009", "F20250001", ""];
    for input in inputs {
        let number = fmt.strip_prefix(input);
        match validate_with_reason(&number, stored) {
            ValidationResult::Valid => println!("  {input:<12} ok"),
            ValidationResult::Invalid(reason) => {
                println!("  {input:<12} rejected: {}", reason.code())
            }
        }
    }

    // ── 2. Gaps that may still be backfilled ──────────────────────────
    println!("\n=== Unused numbers ===");
    for s in missing_sequences(stored) {
        println!("  sequence {s}");
    }

    // ── 3. Issue the next numbers ─────────────────────────────────────
    println!("\n=== Next numbers ===");
    let mut seq = InvoiceNumberSequence::from_existing(2025, stored);
    for _ in 0..3 {
        match seq.next_number() {
            Ok(number) => println!("  {}", fmt.format_number(number.as_str())),
            Err(e) => println!("  {e}"),
        }
    }
}
