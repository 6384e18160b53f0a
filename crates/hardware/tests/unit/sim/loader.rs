//! # Program Loading Tests
//!
//! Tests for assembling source lines: comments, labels, `.data` directives and
//! reading programs from disk.

use std::fs;

use mipsim_core::sim::Program;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_comments_and_blank_lines_are_dropped() {
    let program = Program::assemble([
        "# header comment",
        "",
        "   addi $t0, $zero, 1   # trailing comment",
        "\t",
        "halt",
    ]);
    assert_eq!(program.instructions(), ["addi $t0, $zero, 1", "halt"]);
}

#[test]
fn test_labels_bind_next_instruction_index() {
    let program = Program::from_source(
        "start:\n\
         addi $t0, $zero, 1\n\
         loop: addi $t0, $t0, 1\n\
         bne $t0, $t1, loop\n\
         end:\n",
    );
    assert_eq!(program.len(), 3);
    assert_eq!(program.label("start"), Some(0));
    assert_eq!(program.label("loop"), Some(1));
    assert_eq!(program.label("end"), Some(3));
    assert_eq!(program.get(1), Some("addi $t0, $t0, 1"));
    assert_eq!(program.label("missing"), None);
}

#[test]
fn test_label_only_line_after_comment_strip() {
    let program = Program::assemble(["here: # nothing else", "halt"]);
    assert_eq!(program.label("here"), Some(0));
    assert_eq!(program.instructions(), ["halt"]);
}

#[test]
fn test_redefined_label_keeps_last_definition() {
    let program = Program::assemble(["dup: addi $t0, $zero, 1", "dup: addi $t0, $zero, 2"]);
    assert_eq!(program.label("dup"), Some(1));
    assert_eq!(program.labels().len(), 1);
}

#[test]
fn test_data_directive_registers_string() {
    let program = Program::assemble([
        ".data greeting \"Hello,   world\"",
        ".data single word",
        "prints greeting",
    ]);
    assert_eq!(program.string("greeting"), Some("Hello, world"));
    assert_eq!(program.string("single"), Some("word"));
    assert_eq!(program.instructions(), ["prints greeting"]);
}

#[test]
fn test_incomplete_data_directive_is_ignored() {
    let program = Program::assemble([".data", ".data lonely", "halt"]);
    assert!(program.strings().is_empty());
    assert_eq!(program.instructions(), ["halt"]);
}

#[test]
fn test_invalid_instructions_are_kept_verbatim() {
    let program = Program::assemble(["FOO $t0", "add $t0"]);
    assert_eq!(program.instructions(), ["FOO $t0", "add $t0"]);
}

#[test]
fn test_empty_source() {
    let program = Program::from_source("");
    assert!(program.is_empty());
    assert_eq!(program, Program::default());
    assert_eq!(program.get(0), None);
}

#[test]
fn test_program_from_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        "# sum\n.data msg \"sum:\"\naddi $t0, $zero, 2\nprints msg\nprint $t0\n",
    )
    .unwrap();

    let source = fs::read_to_string(file.path()).unwrap();
    let program = Program::from_source(&source);
    assert_eq!(program.len(), 3);
    assert_eq!(program.string("msg"), Some("sum:"));
}
