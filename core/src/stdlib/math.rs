//! Math builtins: `+`, `-`, `*`, `/`, `%`, `^`.
//!
//! All arithmetic is on `i64` and wraps on overflow instead of panicking.
//! Division and remainder by zero return an error value.

use crate::{evaluator::Evaluator, values::Value};

/// Binary arithmetic operators, folded left over the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithmeticOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
            ArithmeticOp::Rem => "%",
            ArithmeticOp::Pow => "^",
        }
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error.
pub fn eval_binary_int(op: ArithmeticOp, left: i64, right: i64) -> Result<i64, Value> {
    match op {
        ArithmeticOp::Add => Ok(left.wrapping_add(right)),
        ArithmeticOp::Sub => Ok(left.wrapping_sub(right)),
        ArithmeticOp::Mul => Ok(left.wrapping_mul(right)),
        ArithmeticOp::Div | ArithmeticOp::Rem if right == 0 => {
            Err(Value::error("Division by zero!"))
        }
        // Wrapping handles i64::MIN / -1; both truncate toward zero.
        ArithmeticOp::Div => Ok(left.wrapping_div(right)),
        ArithmeticOp::Rem => Ok(left.wrapping_rem(right)),
        ArithmeticOp::Pow => {
            if right < 0 || right > u32::MAX as i64 {
                // Negative exponents truncate to 0; huge ones are treated the same.
                Ok(0)
            } else {
                Ok(left.wrapping_pow(right as u32))
            }
        }
    }
}

fn builtin_op(op: ArithmeticOp, args: Value) -> Value {
    let numbers: Option<Vec<i64>> = args
        .children()
        .iter()
        .map(|arg| match arg {
            Value::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    let Some(numbers) = numbers else {
        return Value::error("Cannot operate on non-numbers!");
    };

    let Some((&first, rest)) = numbers.split_first() else {
        return Value::error(format!("Function '{}' passed no arguments!", op.symbol()));
    };

    if op == ArithmeticOp::Sub && rest.is_empty() {
        return Value::number(first.wrapping_neg());
    }

    let mut acc = first;
    for &y in rest {
        match eval_binary_int(op, acc, y) {
            Ok(result) => acc = result,
            Err(err) => return err,
        }
    }
    Value::number(acc)
}

pub fn builtin_add(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Add, args)
}

pub fn builtin_sub(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Sub, args)
}

pub fn builtin_mul(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Mul, args)
}

pub fn builtin_div(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Div, args)
}

pub fn builtin_rem(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Rem, args)
}

pub fn builtin_pow(_eval: &mut Evaluator<'_>, args: Value) -> Value {
    builtin_op(ArithmeticOp::Pow, args)
}
