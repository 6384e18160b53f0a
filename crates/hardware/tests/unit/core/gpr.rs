//! # General-Purpose Register Tests
//!
//! Tests for the MIPS register bank implementation.

use mipsim_core::common::{Register, SimError};
use mipsim_core::core::arch::gpr::Gpr;
use proptest::prelude::*;

fn reg(idx: usize) -> Register {
    Register::from_index(idx).unwrap()
}

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for r in Register::all() {
        assert_eq!(gpr.read(r), 0);
    }
}

#[test]
fn test_gpr_zero_ignores_writes() {
    let mut gpr = Gpr::new();
    for value in [1, -1, i64::MAX, i64::MIN] {
        gpr.write(Register::ZERO, value);
        assert_eq!(gpr.read(Register::ZERO), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = ((i as i64) << 40) | i as i64;
        gpr.write(reg(i), value);
        assert_eq!(gpr.read(reg(i)), value);
    }
}

#[test]
fn test_gpr_values_are_not_truncated() {
    let mut gpr = Gpr::new();
    gpr.write(Register::T0, 0x1_0000_0000);
    gpr.write(Register::SP, -5);
    assert_eq!(gpr.read(Register::T0), 0x1_0000_0000);
    assert_eq!(gpr.read(Register::SP), -5);
}

#[test]
fn test_gpr_named_access() {
    let mut gpr = Gpr::new();
    gpr.write_named("$s3", 42).unwrap();
    assert_eq!(gpr.read_named("$s3"), Ok(42));
    assert_eq!(gpr.read(reg(19)), 42);

    assert_eq!(
        gpr.write_named("$x1", 1),
        Err(SimError::UnknownRegister("$x1".to_string()))
    );
    assert_eq!(
        gpr.read_named("r8"),
        Err(SimError::UnknownRegister("r8".to_string()))
    );
}

#[test]
fn test_gpr_clear() {
    let mut gpr = Gpr::new();
    gpr.write(Register::RA, 99);
    gpr.clear();
    assert_eq!(gpr, Gpr::default());
}

#[test]
fn test_gpr_display_lists_every_register() {
    let mut gpr = Gpr::new();
    gpr.write(Register::T0, 7);
    let dump = gpr.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "$zero: 0");
    assert_eq!(lines[8], "$t0: 7");
    assert_eq!(lines[31], "$ra: 0");
}

proptest! {
    #[test]
    fn zero_register_always_reads_zero(idx in 0usize..32, value in any::<i64>()) {
        let mut gpr = Gpr::new();
        gpr.write(reg(idx), value);
        gpr.write(Register::ZERO, value);
        prop_assert_eq!(gpr.read(Register::ZERO), 0);
        if idx != 0 {
            prop_assert_eq!(gpr.read(reg(idx)), value);
        }
    }
}
