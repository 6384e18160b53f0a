//! # Instruction Execution Tests
//!
//! Exercises `Cpu::execute` one instruction at a time against a fixed program,
//! checking register, memory and control-flow effects.

use mipsim_core::common::{Register, SimError};
use mipsim_core::core::Cpu;
use mipsim_core::core::cpu::{Flow, Retired};
use mipsim_core::isa::decode;
use mipsim_core::sim::Program;
use rstest::rstest;

/// Program providing labels and strings for branch and output tests.
fn program() -> Program {
    Program::from_source(
        ".data greeting \"hello world\"\n\
         start: addi $t0, $zero, 1\n\
         addi $t0, $zero, 2\n\
         done: halt\n",
    )
}

fn exec(cpu: &mut Cpu, text: &str) -> Result<Retired, SimError> {
    cpu.execute(&decode(text).unwrap(), &program())
}

fn cpu_with(regs: &[(&str, i64)]) -> Cpu {
    let mut cpu = Cpu::default();
    for (name, value) in regs {
        cpu.regs.write_named(name, *value).unwrap();
    }
    cpu
}

fn read(cpu: &Cpu, name: &str) -> i64 {
    cpu.regs.read_named(name).unwrap()
}

#[rstest]
#[case("add $t0, $t1, $t2", 3, 4, 7)]
#[case("sub $t0, $t1, $t2", 3, 4, -1)]
#[case("and $t0, $t1, $t2", 12, 10, 8)]
#[case("or $t0, $t1, $t2", 12, 10, 14)]
#[case("slt $t0, $t1, $t2", 3, 4, 1)]
#[case("slt $t0, $t1, $t2", 4, 3, 0)]
#[case("slt $t0, $t1, $t2", -5, 3, 1)]
#[case("add $t0, $t1, $t2", i64::MAX, 1, i64::MIN)]
fn test_register_alu(#[case] text: &str, #[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    let mut cpu = cpu_with(&[("$t1", a), ("$t2", b)]);
    let retired = exec(&mut cpu, text).unwrap();
    assert_eq!(retired.flow, Flow::Next);
    assert_eq!(retired.output, None);
    assert_eq!(read(&cpu, "$t0"), expected);
}

#[rstest]
#[case("addi $t0, $t1, 5", 10, 15)]
#[case("addi $t0, $t1, -15", 10, -5)]
#[case("addi $t0, $t1, 0x10", 1, 17)]
#[case("slti $t0, $t1, 5", 4, 1)]
#[case("slti $t0, $t1, 5", 5, 0)]
#[case("slti $t0, $t1, -1", -2, 1)]
#[case("sll $t0, $t1, 4", 3, 48)]
#[case("sll $t0, $t1, 0", 3, 3)]
#[case("sll $t0, $t1, 64", 3, 0)]
fn test_immediate_alu(#[case] text: &str, #[case] src: i64, #[case] expected: i64) {
    let mut cpu = cpu_with(&[("$t1", src)]);
    let _ = exec(&mut cpu, text).unwrap();
    assert_eq!(read(&cpu, "$t0"), expected);
}

#[rstest]
#[case(1, 65536)]
#[case(0x1234, 0x1234_0000)]
#[case(-1, -65536)]
fn test_lui(#[case] imm: i64, #[case] expected: i64) {
    let mut cpu = Cpu::default();
    let _ = exec(&mut cpu, &format!("lui $s0, {imm}")).unwrap();
    assert_eq!(read(&cpu, "$s0"), expected);
}

#[test]
fn test_mult_writes_default_destination() {
    let mut cpu = cpu_with(&[("$a0", 6), ("$a1", -7)]);
    let _ = exec(&mut cpu, "mult $a0, $a1").unwrap();
    assert_eq!(read(&cpu, "$t0"), -42);
    assert_eq!(read(&cpu, "$a0"), 6);
}

#[test]
fn test_mult_writes_configured_destination() {
    let mut cpu = Cpu::with_mult_destination(Register::from_name("$v0").unwrap());
    cpu.regs.write_named("$a0", 9).unwrap();
    cpu.regs.write_named("$a1", 9).unwrap();
    let _ = exec(&mut cpu, "mult $a0, $a1").unwrap();
    assert_eq!(read(&cpu, "$v0"), 81);
    assert_eq!(read(&cpu, "$t0"), 0);
}

#[test]
fn test_writes_to_zero_are_dropped() {
    let mut cpu = cpu_with(&[("$t1", 3)]);
    let _ = exec(&mut cpu, "addi $zero, $t1, 5").unwrap();
    let _ = exec(&mut cpu, "lui $zero, 7").unwrap();
    assert_eq!(read(&cpu, "$zero"), 0);
}

#[test]
fn test_store_then_load() {
    let mut cpu = cpu_with(&[("$t0", 77), ("$sp", 100)]);
    let _ = exec(&mut cpu, "sw $t0, 4($sp)").unwrap();
    assert_eq!(cpu.memory.load(104), 77);

    let _ = exec(&mut cpu, "lw $t1, -96($sp)").unwrap();
    assert_eq!(read(&cpu, "$t1"), 0);
    let _ = exec(&mut cpu, "lw $t1, 104($zero)").unwrap();
    assert_eq!(read(&cpu, "$t1"), 77);
}

#[test]
fn test_beq_taken_and_not_taken() {
    let mut cpu = cpu_with(&[("$t0", 5), ("$t1", 5)]);
    let taken = exec(&mut cpu, "beq $t0, $t1, done").unwrap();
    assert_eq!(taken.flow, Flow::Jump(2));

    cpu.regs.write_named("$t1", 6).unwrap();
    let not_taken = exec(&mut cpu, "beq $t0, $t1, done").unwrap();
    assert_eq!(not_taken.flow, Flow::Next);
}

#[test]
fn test_bne_taken_and_not_taken() {
    let mut cpu = cpu_with(&[("$t0", 5), ("$t1", 6)]);
    assert_eq!(
        exec(&mut cpu, "bne $t0, $t1, start").unwrap().flow,
        Flow::Jump(0)
    );
    assert_eq!(
        exec(&mut cpu, "bne $t0, $t0, start").unwrap().flow,
        Flow::Next
    );
}

#[rstest]
#[case("beq $t0, $t0, nowhere")]
#[case("beq $t0, $t1, nowhere")]
#[case("bne $t0, $t1, nowhere")]
#[case("bne $t0, $t0, nowhere")]
fn test_branch_to_undefined_label_fails(#[case] text: &str) {
    let mut cpu = cpu_with(&[("$t0", 1), ("$t1", 2)]);
    let before = cpu.clone();
    assert_eq!(
        exec(&mut cpu, text),
        Err(SimError::UnknownLabel("nowhere".to_string()))
    );
    assert_eq!(cpu, before);
}

#[test]
fn test_print_emits_register_value() {
    let mut cpu = cpu_with(&[("$s1", -12)]);
    let retired = exec(&mut cpu, "print $s1").unwrap();
    assert_eq!(retired.flow, Flow::Next);
    assert_eq!(retired.output.as_deref(), Some("-12"));
}

#[test]
fn test_prints_uses_string_table_or_label_text() {
    let mut cpu = Cpu::default();
    let known = exec(&mut cpu, "prints greeting").unwrap();
    assert_eq!(known.output.as_deref(), Some("hello world"));

    let unknown = exec(&mut cpu, "prints farewell").unwrap();
    assert_eq!(unknown.output.as_deref(), Some("farewell"));
}

#[rstest]
#[case("halt")]
#[case("EXIT")]
fn test_halt_jumps_past_end(#[case] text: &str) {
    let mut cpu = Cpu::default();
    let retired = exec(&mut cpu, text).unwrap();
    assert_eq!(retired.flow, Flow::Jump(program().len()));
}

#[test]
fn test_execute_does_not_move_pc() {
    let mut cpu = Cpu::default();
    cpu.pc = 1;
    let retired = exec(&mut cpu, "beq $zero, $zero, done").unwrap();
    assert_eq!(cpu.pc, 1);

    cpu.advance(retired.flow);
    assert_eq!(cpu.pc, 2);
    cpu.advance(Flow::Next);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_reset_clears_state_but_keeps_mult_destination() {
    let mut cpu = Cpu::with_mult_destination(Register::SP);
    cpu.regs.write(Register::T0, 1);
    cpu.memory.store(8, 2);
    cpu.pc = 5;
    cpu.reset();
    assert_eq!(cpu, Cpu::with_mult_destination(Register::SP));
}
