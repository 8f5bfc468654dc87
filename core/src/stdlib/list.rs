//! List builtins: `list`, `head`, `tail`, `eval`, `join`, `len`.

use super::{check_arity, check_has_args, check_not_empty, check_qexpr};
use crate::{evaluator::Evaluator, values::Value};

/// `list a b ...` - the arguments themselves, as a q-expression.
pub fn builtin_list(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    args.into_qexpr()
}

/// `head {a b ...}` - a q-expression holding only the first element.
pub fn builtin_head(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    if let Some(err) = check_arity("head", &args, 1)
        .or_else(|| check_qexpr("head", &args, 0))
        .or_else(|| check_not_empty("head", &args, 0))
    {
        return err;
    }

    let mut list = args.take(0);
    while list.len() > 1 {
        list.pop(1);
    }
    list
}

/// `tail {a b ...}` - the list without its first element.
pub fn builtin_tail(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    if let Some(err) = check_arity("tail", &args, 1)
        .or_else(|| check_qexpr("tail", &args, 0))
        .or_else(|| check_not_empty("tail", &args, 0))
    {
        return err;
    }

    let mut list = args.take(0);
    list.pop(0);
    list
}

/// `eval {...}` - evaluate a q-expression as if it were an s-expression.
pub fn builtin_eval(eval: &mut Evaluator<'_>, args: Value) -> Value {
    if let Some(err) = check_arity("eval", &args, 1).or_else(|| check_qexpr("eval", &args, 0)) {
        return err;
    }

    let expr = args.take(0).into_sexpr();
    eval.eval(expr)
}

/// `join {a} {b c} ...` - concatenate q-expressions.
pub fn builtin_join(_eval: &mut Evaluator<'_>, mut args: Value) -> Value {
    if let Some(err) = check_has_args("join", &args) {
        return err;
    }
    for index in 0..args.len() {
        if let Some(err) = check_qexpr("join", &args, index) {
            return err;
        }
    }

    let mut joined = args.pop(0);
    while !args.is_empty() {
        joined = joined.join(args.pop(0));
    }
    joined
}

/// `len {a b ...}` - number of elements.
///
/// Only arity and emptiness are checked; anything without children counts as
/// empty.
pub fn builtin_len(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    if let Some(err) =
        check_arity("len", &args, 1).or_else(|| check_not_empty("len", &args, 0))
    {
        return err;
    }

    Value::number(args.children()[0].len() as i64)
}
