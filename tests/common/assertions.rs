//! Domain-specific assertion macros for fieldscribe harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* extraction invariant was violated and what the full
//! rendered output looked like at the time.

use fieldscribe_core::Field;

// ---------------------------------------------------------------------------
// Line assertions
// ---------------------------------------------------------------------------

/// Assert that rendered output contains `field=value` exactly.
///
/// ```rust
/// assert_line!(output, "status", "complete");
/// ```
#[macro_export]
macro_rules! assert_line {
    ($output:expr, $field:expr, $value:expr) => {{
        let output: &str = &$output;
        let field: &str = $field;
        match $crate::common::value_of(output, field) {
            Some(actual) => pretty_assertions::assert_eq!(
                actual, $value,
                "assert_line! failed for field {:?}\n  full output:\n{}",
                field, output
            ),
            None => panic!(
                "assert_line! failed: field {:?} not present.\n  Present fields: {:?}\n  full output:\n{}",
                field,
                $crate::common::output_fields(output),
                output
            ),
        }
    }};
}

/// Assert that rendered output has no line for `field`.
#[macro_export]
macro_rules! assert_no_field {
    ($output:expr, $field:expr) => {{
        let output: &str = &$output;
        let field: &str = $field;
        if $crate::common::value_of(output, field).is_some() {
            panic!(
                "assert_no_field! failed: field {:?} unexpectedly present.\n  full output:\n{}",
                field, output
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Structural assertions
// ---------------------------------------------------------------------------

/// Assert every line is `field=value` with a canonical field name, and that
/// lines appear in canonical order. Holds for any rendered output.
pub fn assert_well_formed(rendered: &str) {
    if rendered.is_empty() {
        return;
    }
    let mut last_index: Option<usize> = None;
    for line in rendered.lines() {
        let (name, _) = line
            .split_once('=')
            .unwrap_or_else(|| panic!("line without '=': {line:?}\n  full output:\n{rendered}"));
        let index = Field::ALL
            .iter()
            .position(|f| f.name() == name)
            .unwrap_or_else(|| panic!("non-canonical field {name:?} in output:\n{rendered}"));
        if let Some(last) = last_index {
            assert!(
                index > last,
                "canonical ordering violated at {name:?}:\n{rendered}"
            );
        }
        last_index = Some(index);
    }
}
