//! # Error Tests
//!
//! Verifies the user-facing messages of every error variant.

use mipsim_core::common::SimError;

#[test]
fn test_error_messages() {
    let cases = [
        (
            SimError::InvalidInstruction {
                mnemonic: "FOO".to_string(),
            },
            "unrecognized instruction: FOO",
        ),
        (
            SimError::MalformedOperands {
                mnemonic: "ADD".to_string(),
                expected: 3,
                found: 2,
            },
            "malformed operands for ADD: expected 3, found 2",
        ),
        (
            SimError::UnknownLabel("loop".to_string()),
            "unknown label: loop",
        ),
        (
            SimError::UnknownRegister("$t10".to_string()),
            "unknown register: $t10",
        ),
        (
            SimError::InvalidImmediate("abc".to_string()),
            "invalid immediate: abc",
        ),
    ];

    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_error_is_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(SimError::UnknownLabel("x".to_string()));
    assert_eq!(boxed.to_string(), "unknown label: x");
}
