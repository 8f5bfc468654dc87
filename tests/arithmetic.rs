#[macro_use]
mod cases;

test_case!(
    add_many,
    input: "+ 1 2 3",
    result: "6",
);

test_case!(
    nested_sexprs,
    input: "(* 2 (+ 1 1))",
    result: "4",
);

test_case!(
    top_level_without_parens,
    input: "+ 1 (* 7 5) 3",
    result: "39",
);

// A single argument to `-` negates it
test_case!(
    unary_minus,
    input: "(- 5)",
    result: "-5",
);

test_case!(
    subtraction_folds_left,
    input: "- 100 10 1",
    result: "89",
);

test_case!(
    division_truncates,
    input: "/ -7 2",
    result: "-3",
);

test_case!(
    remainder,
    input: "(% 7 3)",
    result: "1",
);

test_case!(
    power,
    input: "(^ 2 10)",
    result: "1024",
);

test_case!(
    negative_power_is_zero,
    input: "^ 2 -1",
    result: "0",
);

test_case!(
    overflow_wraps,
    input: "(+ 9223372036854775807 1)",
    result: "-9223372036854775808",
);

test_case!(
    division_by_zero,
    input: "(/ 4 0)",
    result: "Error: Division by zero!",
);

test_case!(
    remainder_by_zero,
    input: "% 4 0",
    result: "Error: Division by zero!",
);

test_case!(
    non_number_operand,
    input: "+ 1 {2}",
    result: "Error: Cannot operate on non-numbers!",
);

test_case!(
    literal_too_large,
    input: "99999999999999999999",
    result: "Error: invalid number",
);
