#[macro_use]
mod cases;

use crispy::{Engine, EngineOptions, render_error_to_string_no_color};

test_case!(
    unclosed_sexpr,
    input: "(+ 1 2",
    parse_error: "P001",
);

test_case!(
    stray_closer,
    input: "1 )",
    parse_error: "P001",
);

test_case!(
    mismatched_brackets,
    input: "(1 2}",
    parse_error: "P001",
);

test_case!(
    empty_input,
    input: "",
    parse_error: "P001",
);

test_case!(
    too_deep,
    input: &format!("{}1{}", "(".repeat(600), ")".repeat(600)),
    parse_error: "P004",
);

#[test]
fn test_parse_error_does_not_touch_environment() {
    let mut engine = Engine::default();
    engine.eval("def {x} 1").unwrap();
    assert!(engine.eval("def {x} (2").is_err());
    assert_eq!(engine.eval("x").unwrap().to_string(), "1");
}

#[test]
fn test_rendered_parse_error_points_at_source() {
    let mut engine = Engine::new(
        EngineOptions {
            max_parse_depth: 3,
            ..Default::default()
        },
        |_| {},
    );
    let err = engine.eval("{{{{1}}}}").unwrap_err();
    let output = render_error_to_string_no_color(&err);
    assert!(output.contains("P004"));
    assert!(output.contains("{{{{1}}}}"));
}
