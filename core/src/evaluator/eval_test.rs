//! Unit tests for the evaluator.

use super::*;
use crate::{parser, reader, values::Builtin};
use pretty_assertions::assert_eq;

struct Runner {
    env: Environment,
    options: EvaluatorOptions,
}

impl Runner {
    fn new() -> Self {
        Self {
            env: Environment::with_builtins(),
            options: EvaluatorOptions::default(),
        }
    }

    fn with_max_depth(max_depth: usize) -> Self {
        Self {
            options: EvaluatorOptions { max_depth },
            ..Self::new()
        }
    }

    fn read(source: &str) -> Value {
        reader::read(&parser::parse(source).expect("parsing failed"))
    }

    fn eval_value(&mut self, value: Value) -> Value {
        eval_with_options(self.options, &mut self.env, value)
    }

    fn run(&mut self, source: &str) -> Value {
        self.eval_value(Self::read(source))
    }

    fn show(&mut self, source: &str) -> String {
        self.run(source).to_string()
    }
}

fn run(source: &str) -> String {
    Runner::new().show(source)
}

#[test]
fn test_atoms_are_normal_form() {
    let mut env = Environment::new();
    for value in [
        Value::number(42),
        Value::error("boom"),
        Value::qexpr().add(Value::symbol("+")).add(Value::number(1)),
    ] {
        assert_eq!(eval(&mut env, value.clone()), value);
    }
}

#[test]
fn test_function_is_normal_form() {
    let mut runner = Runner::new();
    let plus = runner.env.get("+");
    assert_eq!(runner.eval_value(plus.clone()), plus);
}

#[test]
fn test_symbol_lookup() {
    let mut runner = Runner::new();
    runner.env.put("x", &Value::number(5));
    assert_eq!(runner.eval_value(Value::symbol("x")), Value::number(5));
}

#[test]
fn test_unbound_symbol() {
    assert_eq!(run("foo"), "Error: unbound symbol 'foo'");
    assert_eq!(run("(foo 1 2)"), "Error: unbound symbol 'foo'");
}

#[test]
fn test_empty_sexpr() {
    assert_eq!(run("()"), "()");
    assert_eq!(run("(())"), "()");
}

#[test]
fn test_singleton_unwraps() {
    assert_eq!(run("(5)"), "5");
    assert_eq!(run("((((5))))"), "5");
    assert_eq!(run("{1 2}"), "{1 2}");
}

#[test]
fn test_lone_builtin_is_returned_as_function() {
    assert_eq!(run("+"), "<function>");
    assert_eq!(run("(head)"), "<function>");
}

#[test]
fn test_not_a_function() {
    assert_eq!(
        run("(1 2 3)"),
        "Error: S-expression does not start with a function!"
    );
    assert_eq!(
        run("{+} 1 2"),
        "Error: S-expression does not start with a function!"
    );
}

#[test]
fn test_qexpr_is_an_evaluation_barrier() {
    assert_eq!(run("{+ 1 2}"), "{+ 1 2}");
    assert_eq!(run("(+ 1 2)"), "3");
    assert_eq!(run("{(/ 1 0) unbound}"), "{(/ 1 0) unbound}");
}

#[test]
fn test_arithmetic() {
    assert_eq!(run("(+ 1 2 3)"), "6");
    assert_eq!(run("(- 5)"), "-5");
    assert_eq!(run("(* 2 (+ 1 1))"), "4");
    assert_eq!(run("(/ 7 2)"), "3");
    assert_eq!(run("(/ -7 2)"), "-3");
    assert_eq!(run("(% 7 3)"), "1");
    assert_eq!(run("(^ 2 10)"), "1024");
    assert_eq!(run("+ 1 (* 7 5) 3"), "39");
}

#[test]
fn test_division_by_zero_is_a_value() {
    assert_eq!(run("(/ 4 0)"), "Error: Division by zero!");
    assert_eq!(run("(% 4 0)"), "Error: Division by zero!");
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(run("(+ 9223372036854775807 1)"), "-9223372036854775808");
    assert_eq!(run("(- -9223372036854775808)"), "-9223372036854775808");
    assert_eq!(run("(* 4611686018427387904 2)"), "-9223372036854775808");
}

#[test]
fn test_arithmetic_type_error() {
    assert_eq!(run("(+ 1 {2})"), "Error: Cannot operate on non-numbers!");
    assert_eq!(run("(- head 1)"), "Error: Cannot operate on non-numbers!");
}

#[test]
fn test_first_error_wins() {
    assert_eq!(
        run("(+ 1 (/ 1 0) (unbound-sym))"),
        "Error: Division by zero!"
    );
    assert_eq!(
        run("(+ 1 (unbound-sym) (/ 1 0))"),
        "Error: unbound symbol 'unbound-sym'"
    );
}

#[test]
fn test_error_stops_later_siblings() {
    let mut runner = Runner::new();
    assert_eq!(
        runner.show("(+ (/ 1 0) (def {x} 1))"),
        "Error: Division by zero!"
    );
    assert_eq!(runner.show("x"), "Error: unbound symbol 'x'");
}

#[test]
fn test_errors_short_circuit_nested_expressions() {
    assert_eq!(run("(head (tail {}))"), "Error: Function 'tail' passed '{}'!");
    assert_eq!(run("99999999999999999999"), "Error: invalid number");
    assert_eq!(run("(+ 1 99999999999999999999)"), "Error: invalid number");
}

#[test]
fn test_definitions_apply_left_to_right() {
    let mut runner = Runner::new();
    assert_eq!(runner.show("(list (def {x} 1) (def {y} (+ x 1)))"), "{() ()}");
    assert_eq!(runner.show("y"), "2");
}

#[test]
fn test_binding_round_trip() {
    let mut runner = Runner::new();
    assert_eq!(runner.show("def {x} 5"), "()");
    assert_eq!(runner.show("x"), "5");
    assert_eq!(runner.show("def {x} 6"), "()");
    assert_eq!(runner.show("x"), "6");
    assert_eq!(runner.env.names().filter(|n| *n == "x").count(), 1);
}

#[test]
fn test_def_multiple_and_use() {
    let mut runner = Runner::new();
    runner.show("def {a b} 5 6");
    assert_eq!(runner.show("+ a b"), "11");
    runner.show("def {arglist} {a b x y}");
    assert_eq!(runner.show("arglist"), "{a b x y}");
    runner.show("def arglist 1 2 3 4");
    assert_eq!(runner.show("list a b x y"), "{1 2 3 4}");
}

#[test]
fn test_builtins_can_be_rebound() {
    let mut runner = Runner::new();
    runner.show("def {plus} +");
    assert_eq!(runner.show("plus 2 3"), "5");
    runner.show("def {+} -");
    assert_eq!(runner.show("+ 10 3"), "7");
}

#[test]
fn test_errors_can_be_bound() {
    let mut runner = Runner::new();
    runner.env.put("e", &Value::error("stored"));
    assert_eq!(runner.show("e"), "Error: stored");
    assert_eq!(runner.show("list 1 e"), "Error: stored");
}

#[test]
fn test_bound_values_are_copies() {
    let mut runner = Runner::new();
    runner.show("def {xs} {1 2 3}");
    assert_eq!(runner.show("tail xs"), "{2 3}");
    assert_eq!(runner.show("xs"), "{1 2 3}");
}

#[test]
fn test_eval_quoted_code() {
    let mut runner = Runner::new();
    runner.show("def {code} {+ 1 2}");
    assert_eq!(runner.show("eval code"), "3");
    assert_eq!(runner.show("eval (join {head} {{1 2}})"), "{1}");
    assert_eq!(runner.show("eval (tail {tail tail {5 6 7}})"), "{6 7}");
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut runner = Runner::new();
    runner.show("def {x} 5");
    for source in ["42", "x", "{1 2}", "(+ 1 2)"] {
        let once = runner.run(source);
        let twice = runner.eval_value(once.clone());
        assert_eq!(twice, once, "not idempotent: {}", source);
    }
}

#[test]
fn test_copy_evaluates_the_same() {
    let mut runner = Runner::new();
    let program = Runner::read("(join {1} (list (+ 1 1) (* 3 1)))");
    let copy = program.clone();
    assert_eq!(runner.eval_value(copy), runner.eval_value(program));
}

#[test]
fn test_depth_limit_turns_runaway_recursion_into_error() {
    let mut runner = Runner::with_max_depth(64);
    runner.show("def {loop} {eval loop}");
    assert_eq!(
        runner.show("eval loop"),
        "Error: evaluation depth exceeds maximum of 64 levels"
    );
    // The session is still usable afterwards.
    assert_eq!(runner.show("+ 1 1"), "2");
}

#[test]
fn test_depth_limit_on_deep_nesting() {
    let source = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(Runner::with_max_depth(100).show(&source), "1");
    assert_eq!(
        Runner::with_max_depth(10).show(&source),
        "Error: evaluation depth exceeds maximum of 10 levels"
    );
}

fn builtin_depth(eval: &mut Evaluator<'_>, _args: Value) -> Value {
    Value::number(eval.options().max_depth as i64)
}

#[test]
fn test_custom_builtin_sees_evaluator() {
    let mut runner = Runner::with_max_depth(77);
    runner.env.register_builtin("depth", builtin_depth);
    assert_eq!(runner.show("depth 1"), "77");
    assert_eq!(
        runner.env.get("depth"),
        Value::function(Builtin::new("depth", builtin_depth))
    );
}
