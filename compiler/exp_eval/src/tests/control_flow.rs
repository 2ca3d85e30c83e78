//! Blocks, loops, branches and `return` propagation.

use std::cell::RefCell;
use std::rc::Rc;

use exp_ir::{Int, Stmt, StringInterner};
use pretty_assertions::assert_eq;

use super::{output, parse, run_capture};
use crate::{run, Builtins, EvalErrorKind, Interpreter, InterpreterBuilder, LocalScope, Scope};

#[test]
fn return_escapes_loop_and_branches() {
    let out = output(
        "
        fun find(limit) {
            var i = 0
            while (1) {
                if (i * i > limit) {
                    if (1) {
                        return i
                    }
                    println(111)
                }
                i = i + 1
            }
            println(999)
        }
        println(find(50))
        ",
    );
    assert_eq!(out, "8\n");
}

#[test]
fn missing_return_yields_zero() {
    assert_eq!(output("fun f() { var x = 1 } println(f())"), "0\n");
    assert_eq!(output("fun g(a) { if (a) { return 5 } } println(g(1), g(0))"), "5 0\n");
}

#[test]
fn top_level_return_stops_the_program() {
    let (result, out) = run_capture("println(1) return 5 println(2)");
    assert!(result.is_ok());
    assert_eq!(out, "1\n");
}

#[test]
fn each_iteration_gets_a_fresh_scope() {
    let out = output(
        "
        var i = 0
        while (i < 3) {
            var t = i * 10
            println(t)
            i = i + 1
        }
        ",
    );
    assert_eq!(out, "0\n10\n20\n");
}

#[test]
fn loop_body_bindings_are_gone_after_the_loop() {
    let (result, _) = run_capture(
        "
        var i = 0
        while (i < 1) {
            var j = 5
            i = i + 1
        }
        println(j)
        ",
    );
    assert_eq!(
        result.unwrap_err().kind,
        EvalErrorKind::UndefinedVariable { name: "j".into() }
    );
}

#[test]
fn zero_iteration_loop() {
    assert_eq!(output("while (0) { println(1) } println(2)"), "2\n");
}

#[test]
fn branch_redeclaration_shadows_temporarily() {
    let out = output(
        "
        var a = 3
        println(a)
        if (1) {
            var a = 4
            println(a)
        }
        println(a)
        ",
    );
    assert_eq!(out, "3\n4\n3\n");
}

#[test]
fn assignment_in_branch_reaches_outer_binding() {
    assert_eq!(output("var a = 1 if (a) { a = 2 } else { a = 3 } println(a)"), "2\n");
    assert_eq!(output("var a = 0 if (a) { a = 2 } else { a = 3 } println(a)"), "3\n");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let out = output(
        "
        var hits = 0
        fun hit(v) { hits = hits + 1 return v }
        println(hit(0) && hit(1), hit(1) || hit(0), hits)
        ",
    );
    assert_eq!(out, "0 1 4\n");
}

#[test]
fn arguments_evaluate_left_to_right_after_callee_lookup() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let builtins = Builtins::new()
        .with("note", move |args: &[Int]| {
            log.borrow_mut().extend_from_slice(args);
            args.first().copied().unwrap_or(0)
        })
        .with("sum", |args: &[Int]| args.iter().sum());

    let interner = StringInterner::new();
    let program = parse("sum(note(1), note(2) + note(3), note(4))", &interner);
    run(&program, builtins.clone(), &interner).unwrap();
    assert_eq!(*seen.borrow(), vec![1, 2, 3, 4]);

    seen.borrow_mut().clear();
    let program = parse("missing(note(1))", &interner);
    let err = run(&program, builtins, &interner).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UndefinedFunction { name: "missing".into() });
    assert!(seen.borrow().is_empty());
}

#[test]
fn pure_expressions_are_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let program = parse("a * 7 + a / 4 - (a % 5 == 1) || a", &interner);
    let Stmt::Expr(expr) = &program.stmts[0] else {
        panic!("expected an expression statement");
    };

    let scope = LocalScope::new(Scope::new());
    scope.borrow_mut().declare_variable(a, 6).unwrap();

    let mut interp = Interpreter::new(&interner);
    let first = interp.eval_expr(expr, &scope).unwrap();
    let second = interp.eval_expr(expr, &scope).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 1);
}

#[test]
fn runs_are_independent() {
    let interner = StringInterner::new();
    let program = parse("var a = 1 fun f() { return a } println(f())", &interner);
    let out = crate::buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(out.clone())
        .build();
    interp.run(&program).unwrap();
    interp.run(&program).unwrap();
    assert_eq!(out.get_output(), "1\n1\n");
}

#[test]
fn deeply_nested_blocks() {
    let depth = 2_000;
    let source = format!(
        "var x = 0 {} x = x + 1 {} println(x)",
        "if (1) {".repeat(depth),
        "}".repeat(depth)
    );
    assert_eq!(output(&source), "1\n");
}
