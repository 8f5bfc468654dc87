//! `def {a b ...} x y ...` - bind symbols in the global environment.

use super::{check_has_args, check_qexpr};
use crate::{evaluator::Evaluator, values::Value};

pub fn builtin_def(eval: &mut Evaluator<'_>, args: Value) -> Value {
    if let Some(err) = check_has_args("def", &args).or_else(|| check_qexpr("def", &args, 0)) {
        return err;
    }

    let (names, values) = args.children().split_at(1);
    let names = names[0].children();

    if !names.iter().all(|name| matches!(name, Value::Symbol(_))) {
        return Value::error("Function 'def' cannot define non-symbol!");
    }
    if names.len() != values.len() {
        return Value::error(
            "Function 'def' cannot define incorrect number of values to symbols!",
        );
    }

    // Bindings are applied in order, so a repeated name ends up with the
    // last value given for it.
    for (name, value) in names.iter().zip(values) {
        if let Value::Symbol(name) = name {
            eval.env_mut().put(name, value);
        }
    }

    Value::sexpr()
}
