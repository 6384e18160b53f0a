//! # Statistics Tests
//!
//! Verifies that `SimStats` counts retired instructions by class and branch
//! outcome, both directly and through whole-program runs.

use mipsim_core::core::cpu::Flow;
use mipsim_core::isa::InstructionClass;
use mipsim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::TestContext;

#[test]
fn test_record_classes() {
    let mut stats = SimStats::default();
    stats.record(InstructionClass::Alu, Flow::Next);
    stats.record(InstructionClass::Load, Flow::Next);
    stats.record(InstructionClass::Store, Flow::Next);
    stats.record(InstructionClass::Output, Flow::Next);
    stats.record(InstructionClass::Halt, Flow::Jump(9));

    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_output, 1);
    assert_eq!(stats.inst_halt, 1);
    assert_eq!(stats.inst_branch, 0);
}

#[test]
fn test_record_branch_outcomes() {
    let mut stats = SimStats::default();
    stats.record(InstructionClass::Branch, Flow::Jump(0));
    stats.record(InstructionClass::Branch, Flow::Jump(3));
    stats.record(InstructionClass::Branch, Flow::Next);

    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.branches_taken, 2);
    assert_eq!(stats.branches_not_taken, 1);
}

#[test]
fn test_program_instruction_mix() {
    let mut ctx = TestContext::new().load(&[
        "ADDI $t0, $zero, 2",
        "loop: SW $t0, 0($zero)",
        "LW $t1, 0($zero)",
        "PRINT $t1",
        "ADDI $t0, $t0, -1",
        "BNE $t0, $zero, loop",
        "HALT",
    ]);
    let executed = ctx.run();
    let stats = ctx.sim.stats();

    assert_eq!(stats.instructions_retired, executed);
    assert_eq!(stats.instructions_retired, 12);
    assert_eq!(stats.inst_alu, 3);
    assert_eq!(stats.inst_store, 2);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_output, 2);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.inst_halt, 1);
}

#[test]
fn test_failed_step_is_not_counted() {
    let mut ctx = TestContext::new().load(&["ADDI $t0, $zero, 1", "FOO"]);
    let _ = ctx.run_err();
    assert_eq!(ctx.sim.stats().instructions_retired, 1);
}

#[test]
fn test_stats_sections() {
    assert_eq!(STATS_SECTIONS, ["summary", "instruction_mix", "branch"]);
    SimStats::default().print_sections(&["branch".to_string()]);
}
