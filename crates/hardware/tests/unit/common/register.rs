//! # Register Identifier Tests
//!
//! Tests for register name lookup, canonical numbering and display.

use mipsim_core::common::reg::REGISTER_COUNT;
use mipsim_core::common::{Register, SimError};
use mipsim_core::isa::abi::REG_NAMES;

#[test]
fn test_register_count() {
    assert_eq!(REGISTER_COUNT, 32);
    assert_eq!(Register::all().count(), 32);
}

#[test]
fn test_canonical_numbering() {
    assert_eq!(Register::from_name("$zero").unwrap().index(), 0);
    assert_eq!(Register::from_name("$at").unwrap().index(), 1);
    assert_eq!(Register::from_name("$v0").unwrap().index(), 2);
    assert_eq!(Register::from_name("$a0").unwrap().index(), 4);
    assert_eq!(Register::from_name("$t0").unwrap().index(), 8);
    assert_eq!(Register::from_name("$t7").unwrap().index(), 15);
    assert_eq!(Register::from_name("$s0").unwrap().index(), 16);
    assert_eq!(Register::from_name("$t8").unwrap().index(), 24);
    assert_eq!(Register::from_name("$gp").unwrap().index(), 28);
    assert_eq!(Register::from_name("$sp").unwrap().index(), 29);
    assert_eq!(Register::from_name("$fp").unwrap().index(), 30);
    assert_eq!(Register::from_name("$ra").unwrap().index(), 31);
}

#[test]
fn test_named_constants_match_table() {
    assert_eq!(Register::ZERO.name(), "$zero");
    assert_eq!(Register::T0.name(), "$t0");
    assert_eq!(Register::SP.name(), "$sp");
    assert_eq!(Register::RA.name(), "$ra");
    assert!(Register::ZERO.is_zero());
    assert!(!Register::T0.is_zero());
}

#[test]
fn test_every_name_resolves_to_its_position() {
    for (idx, name) in REG_NAMES.iter().enumerate() {
        let reg: Register = name.parse().unwrap();
        assert_eq!(reg.index(), idx);
        assert_eq!(reg.to_string(), *name);
    }
}

#[test]
fn test_unknown_names_rejected() {
    for bad in ["t0", "$t10", "$T0", "$32", "", "$"] {
        assert_eq!(
            Register::from_name(bad),
            Err(SimError::UnknownRegister(bad.to_string())),
            "{bad:?} should not be a register"
        );
    }
}

#[test]
fn test_from_index_bounds() {
    assert_eq!(Register::from_index(31), Some(Register::RA));
    assert_eq!(Register::from_index(32), None);
}
