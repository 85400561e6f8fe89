use std::fs;
use std::path::PathBuf;

use alu2c::processor::UnknownPolicy;
use alu2c::reader::{LineReader, Source};
use alu2c::writer::{Format, emit, emit_to_string};

const EPILOGUE: &str = "\n    bool valid = z == 0;\n    return valid;\n}\n";

fn translate(program: &[&str]) -> String {
    emit_to_string(program, UnknownPolicy::Skip).expect("translates")
}

fn translate_file(path: &str) -> String {
    let lines = LineReader::new(vec![Source::File(PathBuf::from(path))]);
    let mut buf = Vec::new();
    emit(lines, Format::C, UnknownPolicy::Skip, &mut buf).expect("translates");
    String::from_utf8(buf).unwrap()
}

#[test]
fn multiply_add_compare_scenario() {
    let out = translate(&["inp w", "mul w 2", "add w 3", "eql w 6"]);
    assert_eq!(
        out,
        "bool alu(const int8_t digits[]) {
    long w = 0, x = 0, y = 0, z = 0;

    // Step 1
    w = digits[0];
    w = w * 2;
    w = w + 3;
    w = w == 6 ? 1 : 0;

    bool valid = z == 0;
    return valid;
}
"
    );
}

#[test]
fn two_inputs_then_divide() {
    let out = translate_file("tests/two_digits.alu");
    let x = out.find("x = digits[0];").expect("first input");
    let y = out.find("y = digits[1];").expect("second input");
    let div = out.find("x = x / y;").expect("division");
    assert!(x < y && y < div);
}

#[test]
fn steps_and_indices_are_sequential() {
    let out = translate_file("tests/monad.alu");
    let k = fs::read_to_string("tests/monad.alu")
        .unwrap()
        .lines()
        .filter(|l| l.trim_start().starts_with("inp"))
        .count();
    assert_eq!(k, 2);

    let mut cursor = 0;
    for i in 0..k {
        let step = format!("// Step {}\n", i + 1);
        let index = format!("digits[{i}]");
        assert_eq!(out.matches(&step).count(), 1, "{step}");
        assert_eq!(out.matches(&index).count(), 1, "{index}");

        let at_step = cursor + out[cursor..].find(&step).unwrap();
        let at_index = at_step + out[at_step..].find(&index).unwrap();
        cursor = at_index;
    }
    assert!(!out.contains(&format!("digits[{k}]")));
}

#[test]
fn fourteen_digit_program_uses_two_digit_steps() {
    let out = translate_file("tests/monad14.alu");

    let mut cursor = 0;
    for i in 0..14 {
        let step = format!("    // Step {}\n", i + 1);
        let load = format!(" = digits[{i}];\n");
        assert_eq!(out.matches(&step).count(), 1, "{step}");
        assert_eq!(out.matches(&load).count(), 1, "{load}");

        let at_step = cursor + out[cursor..].find(&step).unwrap();
        let at_load = at_step + out[at_step..].find(&load).unwrap();
        cursor = at_load;
    }
    assert!(out.contains("    // Step 14\n    w = digits[13];\n"));
    assert!(!out.contains("digits[14]"));
    assert!(out.ends_with(EPILOGUE));
}

#[test]
fn input_counter_continues_across_files() {
    let lines = LineReader::new(vec![
        Source::File(PathBuf::from("tests/two_digits.alu")),
        Source::File(PathBuf::from("tests/two_digits.alu")),
    ]);
    let mut buf = Vec::new();
    let stats = emit(lines, Format::C, UnknownPolicy::Skip, &mut buf).expect("translates");
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(stats.inputs, 4);
    let order: Vec<usize> = ["x = digits[0];", "y = digits[1];", "x = digits[2];", "y = digits[3];"]
        .iter()
        .map(|s| out.find(s).expect(s))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{out}");
    assert!(out.contains("// Step 3\n"));
    assert!(out.contains("// Step 4\n"));
    assert_eq!(out.matches("x = x / y;").count(), 2);
}

#[test]
fn destination_is_the_left_hand_side() {
    let program = ["inp z", "add x -9", "mul y x", "div z 26", "mod w 3", "eql y w"];
    let out = translate(&program);
    let body: Vec<&str> = out
        .lines()
        .map(str::trim)
        .filter(|l| l.contains(" = ") && !l.starts_with("long") && !l.starts_with("bool"))
        .collect();

    assert_eq!(body.len(), program.len());
    for (stmt, instr) in body.iter().zip(program) {
        let dst = instr.split_whitespace().nth(1).unwrap();
        assert!(stmt.starts_with(&format!("{dst} = ")), "{stmt} for {instr}");
    }
}

#[test]
fn translation_is_repeatable() {
    let first = translate_file("tests/monad.alu");
    let second = translate_file("tests/monad.alu");
    assert_eq!(first, second);
    assert!(first.contains("// Step 1\n"));
}

#[test]
fn unknown_mnemonics_are_invisible() {
    let with = translate(&["inp w", "nop", "add w 1", "jmp w 3", "inp x"]);
    let without = translate(&["inp w", "add w 1", "inp x"]);
    assert_eq!(with, without);
}

#[test]
fn blank_lines_are_ignored() {
    let with = translate(&["", "inp w", "   ", "mul w 2", ""]);
    let without = translate(&["inp w", "mul w 2"]);
    assert_eq!(with, without);
}

#[test]
fn empty_program_is_a_complete_function() {
    let out = translate(&[]);
    assert!(out.starts_with("bool alu(const int8_t digits[]) {\n"));
    assert!(out.ends_with(EPILOGUE));
    assert!(!out.contains("digits[0]"));
    assert_eq!(out.matches("bool valid = z == 0;").count(), 1);
}

#[test]
fn epilogue_is_fixed() {
    for program in [vec!["inp w"], vec!["inp z", "mul z 0", "eql z 0"]] {
        let out = translate(&program);
        assert!(out.ends_with(EPILOGUE), "{out}");
        assert_eq!(out.matches("return").count(), 1);
    }
}

#[test]
fn missing_operand_fails_with_line_number() {
    let err = emit_to_string(&["inp w", "add w"], UnknownPolicy::Skip).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("line 2"), "got error message: {chain}");
}

#[test]
fn unreadable_file_is_named() {
    let lines = LineReader::new(vec![Source::File(PathBuf::from("tests/nope.alu"))]);
    let err = emit(lines, Format::C, UnknownPolicy::Skip, Vec::<u8>::new()).unwrap_err();
    assert!(err.to_string().contains("nope.alu"), "got error message: {err}");
}
