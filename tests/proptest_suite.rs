//! Property-based tests for mojo_result
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use mojo_result::{
    ErrorCode, LayoutViolation, RESULT_TABLE, ResultCode, ResultLog, checked_make, describe,
    get_code, get_space, get_subcode, make,
};
use proptest::prelude::*;

fn is_defined(value: u32) -> bool {
    RESULT_TABLE.iter().any(|(v, _)| *v == value)
}

// ============================================================================
// DESCRIBE PROPERTIES
// ============================================================================

proptest! {
    /// Every 32-bit value has a name, and it is one of the table names
    #[test]
    fn describe_is_total(value in any::<u32>()) {
        let name = describe(value);
        prop_assert!(RESULT_TABLE.iter().any(|(_, n)| *n == name));
    }

    /// Undefined values always fall back to UNKNOWN
    #[test]
    fn undefined_values_describe_as_unknown(value in any::<u32>()) {
        prop_assume!(!is_defined(value));
        prop_assert_eq!(describe(value), "UNKNOWN");
    }

    /// Repeated calls agree
    #[test]
    fn describe_is_deterministic(value in any::<u32>()) {
        prop_assert_eq!(describe(value), describe(value));
    }

    /// Signed inputs from other bindings reinterpret without surprises
    #[test]
    fn negative_values_are_unknown(value in i32::MIN..0i32) {
        prop_assert_eq!(describe(value as u32), "UNKNOWN");
    }
}

// ============================================================================
// TYPED VIEW PROPERTIES
// ============================================================================

proptest! {
    /// The enum and the raw table agree on every value
    #[test]
    fn from_raw_agrees_with_describe(value in any::<u32>()) {
        match ResultCode::from_raw(value) {
            Some(code) => {
                prop_assert_eq!(code.value(), value);
                prop_assert_eq!(code.name(), describe(value));
            }
            None => {
                prop_assert!(!is_defined(value));
            }
        }
    }

    /// Conversion failures keep the rejected value
    #[test]
    fn try_from_error_carries_value(value in any::<u32>()) {
        prop_assume!(!is_defined(value));
        let err = ResultCode::try_from(value).unwrap_err();
        prop_assert_eq!(err.value, value);
        prop_assert_eq!(err.category(), ErrorCode::from_bits(value));
    }

    /// Small values cover the whole table
    #[test]
    fn defined_values_round_trip(index in 0..RESULT_TABLE.len()) {
        let (value, name) = RESULT_TABLE[index];
        let code = ResultCode::try_from(value).unwrap();
        prop_assert_eq!(code.to_string(), name);
        prop_assert_eq!(u32::from(code), value);
    }
}

// ============================================================================
// LAYOUT PROPERTIES
// ============================================================================

proptest! {
    /// Packing then unpacking in-range fields is lossless
    #[test]
    fn make_preserves_in_range_fields(
        code in 0u32..=0xF,
        space in 0u32..=0xFFFF,
        subcode in 0u32..=0xFFF,
    ) {
        let result = make(code, space, subcode);
        prop_assert_eq!(get_code(result), code);
        prop_assert_eq!(get_space(result), space);
        prop_assert_eq!(get_subcode(result), subcode);
        prop_assert_eq!(checked_make(code, space, subcode), Ok(result));
    }

    /// Every 32-bit value decomposes into fields that rebuild it
    #[test]
    fn every_value_decomposes(value in any::<u32>()) {
        prop_assert_eq!(make(get_code(value), get_space(value), get_subcode(value)), value);
    }

    /// Oversized codes are refused rather than truncated
    #[test]
    fn checked_make_refuses_wide_code(code in 0x10u32..=u32::MAX, space in 0u32..=0xFFFF) {
        prop_assert_eq!(
            checked_make(code, space, 0),
            Err(LayoutViolation::CodeOutOfRange { value: code })
        );
    }
}

// ============================================================================
// LOGGING PROPERTIES
// ============================================================================

proptest! {
    /// Logging any value never fails and always starts with its name
    #[test]
    fn log_line_starts_with_name(value in any::<u32>(), op in "\\PC{0,64}") {
        let mut line = String::new();
        ResultLog::new(value).with_operation(&op).write_to(&mut line).unwrap();
        let expected_prefix = format!("[{}] value={:#010x}", describe(value), value);
        prop_assert!(line.starts_with(&expected_prefix));
    }

    /// Context fields are bounded in output
    #[test]
    fn log_line_is_bounded(value in any::<u32>(), op in "\\PC{0,2000}") {
        let line = ResultLog::new(value).with_operation(&op).to_string();
        // fixed prefix + one truncated field
        prop_assert!(line.len() < 400 + mojo_result::MAX_FIELD_OUTPUT_LEN);
        prop_assert_eq!(line.lines().count(), 1);
    }
}
